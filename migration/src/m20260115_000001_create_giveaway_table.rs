use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(big_integer(Giveaway::GuildId))
                    .col(big_integer(Giveaway::ChannelId))
                    .col(big_integer(Giveaway::MessageId))
                    .col(big_integer(Giveaway::HostId))
                    .col(string(Giveaway::Prize))
                    .col(text_null(Giveaway::Description))
                    .col(integer(Giveaway::WinnersCount))
                    .col(string_len(Giveaway::Status, 16))
                    .col(integer(Giveaway::EntriesCount).default(0))
                    .col(integer_null(Giveaway::MinLevel))
                    .col(text_null(Giveaway::RequiredRoleIds))
                    .col(integer_null(Giveaway::MinAccountAgeDays))
                    .col(integer_null(Giveaway::MinMembershipAgeDays))
                    .col(boolean(Giveaway::AllowHostEntry))
                    .col(boolean(Giveaway::PingWinners))
                    .col(boolean(Giveaway::DmWinners))
                    .col(
                        timestamp(Giveaway::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp(Giveaway::EndTime))
                    .col(timestamp_null(Giveaway::EndedAt))
                    .to_owned(),
            )
            .await?;

        // Giveaways are addressed by their announcement message.
        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_guild_message")
                    .table(Giveaway::Table)
                    .col(Giveaway::GuildId)
                    .col(Giveaway::MessageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Supports the scheduler's "active and past end_time" poll.
        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_status_end_time")
                    .table(Giveaway::Table)
                    .col(Giveaway::Status)
                    .col(Giveaway::EndTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Giveaway {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    HostId,
    Prize,
    Description,
    WinnersCount,
    Status,
    EntriesCount,
    MinLevel,
    RequiredRoleIds,
    MinAccountAgeDays,
    MinMembershipAgeDays,
    AllowHostEntry,
    PingWinners,
    DmWinners,
    CreatedAt,
    EndTime,
    EndedAt,
}
