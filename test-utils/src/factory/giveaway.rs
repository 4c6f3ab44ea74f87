//! Giveaway factory for creating test giveaway entities.
//!
//! This module provides factory methods for creating giveaway entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::giveaway::GiveawayStatus;

/// Factory for creating test giveaways with customizable fields.
///
/// Provides a builder pattern for creating giveaway entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::giveaway::GiveawayFactory;
///
/// let giveaway = GiveawayFactory::new(&db)
///     .prize("Nitro")
///     .winners_count(3)
///     .status(GiveawayStatus::Ended)
///     .build()
///     .await?;
/// ```
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    channel_id: i64,
    message_id: i64,
    host_id: i64,
    prize: String,
    description: Option<String>,
    winners_count: i32,
    status: GiveawayStatus,
    entries_count: i32,
    min_level: Option<i32>,
    required_role_ids: Option<String>,
    min_account_age_days: Option<i32>,
    min_membership_age_days: Option<i32>,
    allow_host_entry: bool,
    ping_winners: bool,
    dm_winners: bool,
    end_time: chrono::DateTime<Utc>,
    ended_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> GiveawayFactory<'a> {
    /// Creates a new GiveawayFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1000`
    /// - channel_id, message_id, host_id: unique auto-incremented ids
    /// - prize: `"Prize {id}"` where id is auto-incremented
    /// - winners_count: `1`
    /// - status: `Active`
    /// - no entry requirements
    /// - end_time: 1 hour from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GiveawayFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: 1000,
            channel_id: 2000 + id as i64,
            message_id: 3000 + id as i64,
            host_id: 4000 + id as i64,
            prize: format!("Prize {}", id),
            description: None,
            winners_count: 1,
            status: GiveawayStatus::Active,
            entries_count: 0,
            min_level: None,
            required_role_ids: None,
            min_account_age_days: None,
            min_membership_age_days: None,
            allow_host_entry: false,
            ping_winners: true,
            dm_winners: true,
            end_time: Utc::now() + chrono::Duration::hours(1),
            ended_at: None,
        }
    }

    /// Sets the guild the giveaway belongs to.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the announcement message id.
    pub fn message_id(mut self, message_id: i64) -> Self {
        self.message_id = message_id;
        self
    }

    /// Sets the hosting user.
    pub fn host_id(mut self, host_id: i64) -> Self {
        self.host_id = host_id;
        self
    }

    /// Sets the prize.
    pub fn prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    /// Sets the number of winners drawn at the end.
    pub fn winners_count(mut self, winners_count: i32) -> Self {
        self.winners_count = winners_count;
        self
    }

    /// Sets the lifecycle status. `Ended` also stamps `ended_at`.
    pub fn status(mut self, status: GiveawayStatus) -> Self {
        if status != GiveawayStatus::Active && self.ended_at.is_none() {
            self.ended_at = Some(Utc::now());
        }
        self.status = status;
        self
    }

    /// Sets the cached entry counter.
    pub fn entries_count(mut self, entries_count: i32) -> Self {
        self.entries_count = entries_count;
        self
    }

    /// Sets the minimum level requirement.
    pub fn min_level(mut self, min_level: Option<i32>) -> Self {
        self.min_level = min_level;
        self
    }

    /// Sets the required roles (any-of), serialized as JSON.
    pub fn required_roles(mut self, roles: &[u64]) -> Self {
        self.required_role_ids = if roles.is_empty() {
            None
        } else {
            serde_json::to_string(roles).ok()
        };
        self
    }

    /// Sets the minimum account age requirement in days.
    pub fn min_account_age_days(mut self, days: Option<i32>) -> Self {
        self.min_account_age_days = days;
        self
    }

    /// Sets the minimum membership age requirement in days.
    pub fn min_membership_age_days(mut self, days: Option<i32>) -> Self {
        self.min_membership_age_days = days;
        self
    }

    /// Sets whether the host may enter their own giveaway.
    pub fn allow_host_entry(mut self, allow: bool) -> Self {
        self.allow_host_entry = allow;
        self
    }

    /// Sets whether winners get a DM notification.
    pub fn dm_winners(mut self, dm_winners: bool) -> Self {
        self.dm_winners = dm_winners;
        self
    }

    /// Sets the scheduled end time.
    pub fn end_time(mut self, end_time: chrono::DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Builds and inserts the giveaway entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::giveaway::Model)` - Created giveaway entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            host_id: ActiveValue::Set(self.host_id),
            prize: ActiveValue::Set(self.prize),
            description: ActiveValue::Set(self.description),
            winners_count: ActiveValue::Set(self.winners_count),
            status: ActiveValue::Set(self.status),
            entries_count: ActiveValue::Set(self.entries_count),
            min_level: ActiveValue::Set(self.min_level),
            required_role_ids: ActiveValue::Set(self.required_role_ids),
            min_account_age_days: ActiveValue::Set(self.min_account_age_days),
            min_membership_age_days: ActiveValue::Set(self.min_membership_age_days),
            allow_host_entry: ActiveValue::Set(self.allow_host_entry),
            ping_winners: ActiveValue::Set(self.ping_winners),
            dm_winners: ActiveValue::Set(self.dm_winners),
            created_at: ActiveValue::Set(Utc::now()),
            end_time: ActiveValue::Set(self.end_time),
            ended_at: ActiveValue::Set(self.ended_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active giveaway with default values.
///
/// Shorthand for `GiveawayFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::giveaway::Model)` - Created giveaway entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_giveaway(db: &DatabaseConnection) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db).build().await
}
