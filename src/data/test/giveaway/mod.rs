use crate::{
    data::giveaway::GiveawayRepository,
    model::giveaway::{
        CreateGiveawayParams, GiveawaySettings, GiveawayStatus, Requirements, UpdateGiveawayParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_message;
mod list_by_guild;
mod list_due;
mod mark_cancelled;
mod mark_ended;
mod update_fields;

/// Default creation parameters for repository tests.
fn params(guild_id: u64, message_id: u64) -> CreateGiveawayParams {
    CreateGiveawayParams {
        guild_id,
        channel_id: 200,
        message_id,
        host_id: 300,
        prize: "Test prize".to_string(),
        description: None,
        winners_count: 1,
        requirements: Requirements::default(),
        settings: GiveawaySettings::default(),
        end_time: Utc::now() + Duration::hours(1),
    }
}
