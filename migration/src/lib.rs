pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_giveaway_table;
mod m20260115_000002_create_giveaway_entry_table;
mod m20260115_000003_create_giveaway_winner_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_giveaway_table::Migration),
            Box::new(m20260115_000002_create_giveaway_entry_table::Migration),
            Box::new(m20260115_000003_create_giveaway_winner_table::Migration),
        ]
    }
}
