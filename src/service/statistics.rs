//! Read-only aggregate queries over giveaway history.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{entry::EntryRepository, giveaway::GiveawayRepository, winner::WinnerRepository},
    error::AppError,
    model::{
        giveaway::GiveawayStatus,
        statistics::{GuildStatistics, UserStatistics},
    },
};

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates giveaway activity for a guild over the trailing
    /// `window_days` days.
    pub async fn guild_statistics(
        &self,
        guild_id: u64,
        window_days: u32,
    ) -> Result<GuildStatistics, AppError> {
        let giveaways = GiveawayRepository::new(self.db);
        let entries = EntryRepository::new(self.db);
        let since = Utc::now() - Duration::days(window_days as i64);

        let giveaways_created = giveaways.count_since(guild_id, since, None).await?;
        let giveaways_ended = giveaways
            .count_since(guild_id, since, Some(GiveawayStatus::Ended))
            .await?;
        let giveaways_cancelled = giveaways
            .count_since(guild_id, since, Some(GiveawayStatus::Cancelled))
            .await?;
        let active_now = giveaways.list_active(guild_id).await?.len() as u64;
        let total_entries = entries.count_in_guild_since(guild_id, since).await?;

        let average_entries = if giveaways_created > 0 {
            total_entries as f64 / giveaways_created as f64
        } else {
            0.0
        };

        Ok(GuildStatistics {
            window_days,
            giveaways_created,
            giveaways_ended,
            giveaways_cancelled,
            active_now,
            total_entries,
            average_entries,
        })
    }

    /// A user's participation history within a guild: entries, wins, hosted
    /// giveaways, and win rate over entered giveaways.
    pub async fn user_statistics(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<UserStatistics, AppError> {
        let giveaways = GiveawayRepository::new(self.db);
        let entries = EntryRepository::new(self.db);
        let winners = WinnerRepository::new(self.db);

        let entered = entries.count_by_user(guild_id, user_id).await?;
        let wins = winners.count_by_user(guild_id, user_id).await?;
        let hosted = giveaways.count_hosted_by_user(guild_id, user_id).await?;

        let win_rate = if entered > 0 {
            wins as f64 / entered as f64
        } else {
            0.0
        };

        Ok(UserStatistics {
            entered,
            wins,
            hosted,
            win_rate,
        })
    }
}
