use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Lifecycle status of a giveaway.
///
/// Status only moves `Active -> Ended` or `Active -> Cancelled`. Rerolls
/// happen against an `Ended` giveaway without changing its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GiveawayStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "ended")]
    Ended,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// A timed promotional draw posted in a Discord channel.
///
/// A giveaway is identified externally by its (guild_id, message_id) pair,
/// where message_id is the announcement message users react to. Discord
/// snowflakes are stored as i64 (SQLite has no unsigned 64-bit type); the
/// data layer converts back with `as u64`.
///
/// `entries_count` is a denormalized counter maintained with atomic column
/// expressions, not read-modify-write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "giveaway")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub channel_id: i64,
    pub message_id: i64,
    pub host_id: i64,
    pub prize: String,
    pub description: Option<String>,
    pub winners_count: i32,
    pub status: GiveawayStatus,
    pub entries_count: i32,
    /// Minimum level requirement; None imposes no constraint.
    pub min_level: Option<i32>,
    /// JSON array of role ids (any-of); None imposes no constraint.
    pub required_role_ids: Option<String>,
    pub min_account_age_days: Option<i32>,
    pub min_membership_age_days: Option<i32>,
    pub allow_host_entry: bool,
    pub ping_winners: bool,
    pub dm_winners: bool,
    pub created_at: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::giveaway_entry::Entity")]
    GiveawayEntry,
    #[sea_orm(has_many = "super::giveaway_winner::Entity")]
    GiveawayWinner,
}

impl Related<super::giveaway_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiveawayEntry.def()
    }
}

impl Related<super::giveaway_winner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiveawayWinner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
