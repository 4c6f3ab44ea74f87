use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_giveaway_table::Giveaway;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiveawayWinner::Table)
                    .if_not_exists()
                    .col(pk_auto(GiveawayWinner::Id))
                    .col(integer(GiveawayWinner::GiveawayId))
                    .col(big_integer(GiveawayWinner::UserId))
                    .col(integer(GiveawayWinner::Draw))
                    .col(string(GiveawayWinner::Prize))
                    .col(
                        timestamp(GiveawayWinner::WonAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(GiveawayWinner::Claimed).default(false))
                    .col(boolean(GiveawayWinner::Notified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_giveaway_winner_giveaway_id")
                            .from(GiveawayWinner::Table, GiveawayWinner::GiveawayId)
                            .to(Giveaway::Table, Giveaway::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One user can never be drawn twice within the same draw.
        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_winner_giveaway_draw_user")
                    .table(GiveawayWinner::Table)
                    .col(GiveawayWinner::GiveawayId)
                    .col(GiveawayWinner::Draw)
                    .col(GiveawayWinner::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiveawayWinner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GiveawayWinner {
    Table,
    Id,
    GiveawayId,
    UserId,
    Draw,
    Prize,
    WonAt,
    Claimed,
    Notified,
}
