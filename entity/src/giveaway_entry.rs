use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A single user's registration of interest in a giveaway.
///
/// At most one entry exists per (giveaway_id, user_id) pair; the migration
/// enforces this with a composite unique index and the entry tracker checks
/// before inserting.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "giveaway_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub giveaway_id: i32,
    pub user_id: i64,
    pub entered_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::giveaway::Entity",
        from = "Column::GiveawayId",
        to = "super::giveaway::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Giveaway,
}

impl Related<super::giveaway::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Giveaway.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
