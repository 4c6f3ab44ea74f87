//! Giveaway lifecycle orchestration.
//!
//! `GiveawayService` is the only entry point the command layer and the
//! expiry scheduler call. It drives the state machine
//! (Active -> Ended | Cancelled, with rerolls against Ended), delegating
//! persistence to the repositories, draws to the winner selector, and
//! Discord fan-out to the notification service.
//!
//! Notification failures after a successful store transition are logged and
//! swallowed per policy; the state change is already durable and a Discord
//! hiccup must not fail the operation.

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    data::{entry::EntryRepository, giveaway::GiveawayRepository, winner::WinnerRepository},
    error::AppError,
    model::{
        entry::Entry,
        giveaway::{
            CreateGiveawayParams, CreateGiveawayRequest, EndTrigger, Giveaway, GiveawayStatus,
            UpdateGiveawayParams,
        },
        winner::Winner,
    },
    service::{notification::GiveawayNotificationService, winner_selector},
};

pub const MIN_WINNERS: i32 = 1;
pub const MAX_WINNERS: i32 = 20;
pub const MIN_REROLL: u32 = 1;
pub const MAX_REROLL: u32 = 10;

pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> GiveawayService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Creates a giveaway: validates bounds, posts the announcement, then
    /// persists the record keyed by the announcement message.
    ///
    /// The announcement send is required; if it fails the giveaway is not
    /// created.
    ///
    /// # Returns
    /// - `Ok(Giveaway)`: The created giveaway in Active status
    /// - `Err(AppError::Validation)`: winners_count outside 1-20 or
    ///   duration not positive
    /// - `Err(AppError)`: Announcement send or storage failure
    pub async fn create(&self, request: CreateGiveawayRequest) -> Result<Giveaway, AppError> {
        if !(MIN_WINNERS..=MAX_WINNERS).contains(&request.winners_count) {
            return Err(AppError::Validation(format!(
                "winners_count must be between {} and {}",
                MIN_WINNERS, MAX_WINNERS
            )));
        }
        if request.duration <= chrono::Duration::zero() {
            return Err(AppError::Validation(
                "duration must be positive".to_string(),
            ));
        }

        let mut params = CreateGiveawayParams {
            guild_id: request.guild_id,
            channel_id: request.channel_id,
            message_id: 0,
            host_id: request.host_id,
            prize: request.prize,
            description: request.description,
            winners_count: request.winners_count,
            requirements: request.requirements,
            settings: request.settings,
            end_time: chrono::Utc::now() + request.duration,
        };

        let notifications = GiveawayNotificationService::new(self.db, self.http.clone());
        params.message_id = notifications.post_announcement(&params).await?;

        let giveaway = GiveawayRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created giveaway {} in guild {} (prize: {}, ends {})",
            giveaway.id,
            giveaway.guild_id,
            giveaway.prize,
            giveaway.end_time
        );

        Ok(giveaway)
    }

    /// Ends an active giveaway, drawing winners from the live entry pool.
    ///
    /// Only valid from Active; ending an Ended or Cancelled giveaway
    /// returns `InvalidState` and performs no new draw. The status guard
    /// also runs inside the store transaction, so a double invocation
    /// racing this call cannot produce a second draw.
    ///
    /// # Arguments
    /// - `trigger`: Whether the expiry scheduler or a command initiated
    ///   the end
    ///
    /// # Returns
    /// - `Ok(Vec<Winner>)`: The draw-0 winner rows (empty when nobody
    ///   entered)
    pub async fn end(
        &self,
        guild_id: u64,
        message_id: u64,
        trigger: EndTrigger,
    ) -> Result<Vec<Winner>, AppError> {
        let giveaway = self.get(guild_id, message_id).await?;

        if !giveaway.is_active() {
            return Err(AppError::InvalidState(
                "only an active giveaway can be ended".to_string(),
            ));
        }

        let pool = EntryRepository::new(self.db).user_ids(giveaway.id).await?;
        let winner_ids = if pool.is_empty() {
            Vec::new()
        } else {
            winner_selector::select(
                &pool,
                giveaway.winners_count as usize,
                &HashSet::new(),
                &mut rand::rng(),
            )
        };

        let giveaway_repo = GiveawayRepository::new(self.db);
        if !giveaway_repo
            .mark_ended(giveaway.id, &giveaway.prize, &winner_ids)
            .await?
        {
            // Lost the race against a concurrent end or cancel.
            return Err(AppError::InvalidState(
                "giveaway is no longer active".to_string(),
            ));
        }

        let ended = giveaway_repo
            .get_by_message(guild_id, message_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}/{}", guild_id, message_id)))?;
        let winners = WinnerRepository::new(self.db).list(ended.id).await?;

        tracing::info!(
            "Ended giveaway {} ({:?}) with {} winner(s) from {} entries",
            ended.id,
            trigger,
            winners.len(),
            pool.len()
        );

        let notifications = GiveawayNotificationService::new(self.db, self.http.clone());
        let announced = if winners.is_empty() {
            notifications.announce_no_winners(&ended).await
        } else {
            notifications.announce_result(&ended, &winners).await
        };
        if let Err(e) = announced {
            tracing::warn!("Failed to announce end of giveaway {}: {}", ended.id, e);
        }

        Ok(winners)
    }

    /// Cancels an active giveaway. No winners are drawn.
    pub async fn cancel(&self, guild_id: u64, message_id: u64) -> Result<(), AppError> {
        let giveaway = self.get(guild_id, message_id).await?;

        if !giveaway.is_active() {
            return Err(AppError::InvalidState(
                "only an active giveaway can be cancelled".to_string(),
            ));
        }

        if !GiveawayRepository::new(self.db)
            .mark_cancelled(giveaway.id)
            .await?
        {
            return Err(AppError::InvalidState(
                "giveaway is no longer active".to_string(),
            ));
        }

        tracing::info!("Cancelled giveaway {}", giveaway.id);

        let notifications = GiveawayNotificationService::new(self.db, self.http.clone());
        if let Err(e) = notifications.announce_cancelled(&giveaway).await {
            tracing::warn!(
                "Failed to announce cancellation of giveaway {}: {}",
                giveaway.id,
                e
            );
        }

        Ok(())
    }

    /// Redraws winners for an ended giveaway, excluding everyone drawn in
    /// any prior draw.
    ///
    /// # Returns
    /// - `Ok(Vec<Winner>)`: The new draw's winner rows
    /// - `Err(AppError::Validation)`: count outside 1-10
    /// - `Err(AppError::InvalidState)`: Giveaway is not Ended
    /// - `Err(AppError::NoEligibleParticipants)`: Every entrant has
    ///   already won
    pub async fn reroll(
        &self,
        guild_id: u64,
        message_id: u64,
        count: u32,
    ) -> Result<Vec<Winner>, AppError> {
        if !(MIN_REROLL..=MAX_REROLL).contains(&count) {
            return Err(AppError::Validation(format!(
                "reroll count must be between {} and {}",
                MIN_REROLL, MAX_REROLL
            )));
        }

        let giveaway = self.get(guild_id, message_id).await?;

        if giveaway.status != GiveawayStatus::Ended {
            return Err(AppError::InvalidState(
                "only an ended giveaway can be rerolled".to_string(),
            ));
        }

        let winner_repo = WinnerRepository::new(self.db);
        let prior: HashSet<u64> = winner_repo.user_ids(giveaway.id).await?.into_iter().collect();
        let pool = EntryRepository::new(self.db).user_ids(giveaway.id).await?;

        let winner_ids = winner_selector::select(&pool, count as usize, &prior, &mut rand::rng());
        if winner_ids.is_empty() {
            return Err(AppError::NoEligibleParticipants);
        }

        let draw = winner_repo.latest_draw(giveaway.id).await?.unwrap_or(0) + 1;
        let winners = winner_repo
            .add_draw(giveaway.id, &winner_ids, draw, &giveaway.prize)
            .await?;

        tracing::info!(
            "Rerolled giveaway {} (draw {}) with {} new winner(s)",
            giveaway.id,
            draw,
            winners.len()
        );

        let notifications = GiveawayNotificationService::new(self.db, self.http.clone());
        if let Err(e) = notifications.announce_reroll(&giveaway, &winners).await {
            tracing::warn!(
                "Failed to announce reroll of giveaway {}: {}",
                giveaway.id,
                e
            );
        }

        Ok(winners)
    }

    /// Applies a pre-expiry edit to an active giveaway and refreshes the
    /// announcement embed.
    pub async fn update(
        &self,
        guild_id: u64,
        message_id: u64,
        params: UpdateGiveawayParams,
    ) -> Result<Giveaway, AppError> {
        if params.is_empty() {
            return Err(AppError::Validation("nothing to update".to_string()));
        }
        if let Some(end_time) = params.end_time {
            if end_time <= chrono::Utc::now() {
                return Err(AppError::Validation(
                    "end_time must be in the future".to_string(),
                ));
            }
        }

        let giveaway = self.get(guild_id, message_id).await?;

        if !giveaway.is_active() {
            return Err(AppError::InvalidState(
                "only an active giveaway can be updated".to_string(),
            ));
        }

        let updated = GiveawayRepository::new(self.db)
            .update_fields(giveaway.id, params)
            .await?;

        let notifications = GiveawayNotificationService::new(self.db, self.http.clone());
        if let Err(e) = notifications.refresh_announcement(&updated).await {
            tracing::warn!(
                "Failed to refresh announcement for giveaway {}: {}",
                updated.id,
                e
            );
        }

        Ok(updated)
    }

    /// Deletes a giveaway and, via cascade, its entries and winner history.
    /// Valid from any status.
    pub async fn delete(&self, guild_id: u64, message_id: u64) -> Result<(), AppError> {
        let giveaway = self.get(guild_id, message_id).await?;

        GiveawayRepository::new(self.db).delete(giveaway.id).await?;

        tracing::info!("Deleted giveaway {}", giveaway.id);

        Ok(())
    }

    /// Gets a giveaway by its announcement message.
    pub async fn get(&self, guild_id: u64, message_id: u64) -> Result<Giveaway, AppError> {
        GiveawayRepository::new(self.db)
            .get_by_message(guild_id, message_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}/{}", guild_id, message_id)))
    }

    /// Lists the entries of a giveaway.
    pub async fn get_entries(&self, guild_id: u64, message_id: u64) -> Result<Vec<Entry>, AppError> {
        let giveaway = self.get(guild_id, message_id).await?;
        Ok(EntryRepository::new(self.db).list(giveaway.id).await?)
    }

    /// Lists all winner rows of a giveaway across every draw.
    pub async fn get_winners(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Vec<Winner>, AppError> {
        let giveaway = self.get(guild_id, message_id).await?;
        Ok(WinnerRepository::new(self.db).list(giveaway.id).await?)
    }

    /// Lists active giveaways in a guild, soonest-ending first.
    pub async fn list_active(&self, guild_id: u64) -> Result<Vec<Giveaway>, AppError> {
        Ok(GiveawayRepository::new(self.db).list_active(guild_id).await?)
    }
}
