//! Discord notification dispatch for giveaway lifecycle events.
//!
//! The service posts and edits the announcement message, publishes result
//! messages, and best-effort direct-messages winners. Only the initial
//! announcement is load-bearing: `create` fails without it. Every other
//! delivery is isolated - a failure is logged and the remaining recipients
//! still get notified. Storage failures (marking a winner notified) are
//! never swallowed.

pub mod builder;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, MessageId, ReactionType, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::{
    data::winner::WinnerRepository,
    error::AppError,
    model::{
        giveaway::{CreateGiveawayParams, Giveaway},
        winner::Winner,
    },
};

pub use builder::ENTRY_EMOJI;

pub struct GiveawayNotificationService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> GiveawayNotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Posts the initial announcement message and seeds it with the entry
    /// reaction.
    ///
    /// This send is required - a giveaway without an announcement message
    /// has no identity - so failures propagate to the caller instead of
    /// being swallowed.
    ///
    /// # Returns
    /// - `Ok(message_id)`: The posted announcement's message id
    /// - `Err(AppError)`: Discord send failure; creation must be aborted
    pub async fn post_announcement(&self, params: &CreateGiveawayParams) -> Result<u64, AppError> {
        let embed = builder::announcement_embed(params);
        let message = ChannelId::new(params.channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        // Seed the reaction so entrants can click instead of typing the
        // emoji. Not load-bearing.
        if let Err(e) = self
            .http
            .create_reaction(
                message.channel_id,
                message.id,
                &ReactionType::Unicode(ENTRY_EMOJI.to_string()),
            )
            .await
        {
            tracing::warn!(
                "Failed to seed entry reaction on message {}: {}",
                message.id,
                e
            );
        }

        Ok(message.id.get())
    }

    /// Announces the initial draw: edits the announcement to its terminal
    /// rendering, posts the public result, and direct-notifies winners.
    pub async fn announce_result(
        &self,
        giveaway: &Giveaway,
        winners: &[Winner],
    ) -> Result<(), AppError> {
        if let Err(e) = self
            .edit_announcement(giveaway, builder::ended_embed(giveaway, winners))
            .await
        {
            tracing::warn!("{}", e);
        }

        if let Err(e) = self
            .send_to_channel(giveaway, builder::result_content(giveaway, winners))
            .await
        {
            tracing::warn!("{}", e);
        }

        self.notify_winners(giveaway, winners).await
    }

    /// Announces an expiry with zero entries. Distinct copy; no draw
    /// happened and no winner notifications go out.
    pub async fn announce_no_winners(&self, giveaway: &Giveaway) -> Result<(), AppError> {
        if let Err(e) = self
            .edit_announcement(giveaway, builder::ended_embed(giveaway, &[]))
            .await
        {
            tracing::warn!("{}", e);
        }

        if let Err(e) = self
            .send_to_channel(giveaway, builder::no_winners_content(giveaway))
            .await
        {
            tracing::warn!("{}", e);
        }

        Ok(())
    }

    /// Rewrites the announcement for a cancelled giveaway.
    pub async fn announce_cancelled(&self, giveaway: &Giveaway) -> Result<(), AppError> {
        if let Err(e) = self
            .edit_announcement(giveaway, builder::cancelled_embed(giveaway))
            .await
        {
            tracing::warn!("{}", e);
        }

        Ok(())
    }

    /// Announces a reroll draw and direct-notifies the new winners. The
    /// announcement message keeps its terminal rendering from the initial
    /// draw.
    pub async fn announce_reroll(
        &self,
        giveaway: &Giveaway,
        winners: &[Winner],
    ) -> Result<(), AppError> {
        if let Err(e) = self
            .send_to_channel(giveaway, builder::reroll_content(giveaway, winners))
            .await
        {
            tracing::warn!("{}", e);
        }

        self.notify_winners(giveaway, winners).await
    }

    /// Re-renders the announcement embed after a pre-expiry edit.
    pub async fn refresh_announcement(&self, giveaway: &Giveaway) -> Result<(), AppError> {
        if let Err(e) = self
            .edit_announcement(giveaway, builder::active_embed(giveaway))
            .await
        {
            tracing::warn!("{}", e);
        }

        Ok(())
    }

    /// Direct-messages each winner, isolating per-recipient failures.
    ///
    /// A user with closed DMs must not block the remaining winners, so each
    /// send failure is logged and skipped. Successful deliveries set the
    /// winner row's `notified` flag; that write is a storage operation and
    /// its failure does propagate.
    async fn notify_winners(&self, giveaway: &Giveaway, winners: &[Winner]) -> Result<(), AppError> {
        if !giveaway.settings.dm_winners {
            return Ok(());
        }

        let winner_repo = WinnerRepository::new(self.db);
        let content = builder::winner_dm_content(giveaway);

        for winner in winners {
            match self.dm_winner(giveaway, winner, &content).await {
                Ok(()) => winner_repo.mark_notified(winner.id).await?,
                Err(e) => {
                    tracing::warn!("{}", e);
                }
            }
        }

        Ok(())
    }

    /// Direct-messages a single winner. Failures come back as
    /// [`AppError::Delivery`] so callers can apply the swallow policy.
    async fn dm_winner(
        &self,
        giveaway: &Giveaway,
        winner: &Winner,
        content: &str,
    ) -> Result<(), AppError> {
        let channel = UserId::new(winner.user_id)
            .create_dm_channel(&self.http)
            .await
            .map_err(|e| {
                AppError::Delivery(format!(
                    "DM channel for winner {} of giveaway {}: {}",
                    winner.user_id, giveaway.id, e
                ))
            })?;

        channel
            .id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(|e| {
                AppError::Delivery(format!(
                    "DM to winner {} of giveaway {}: {}",
                    winner.user_id, giveaway.id, e
                ))
            })?;

        Ok(())
    }

    async fn edit_announcement(
        &self,
        giveaway: &Giveaway,
        embed: serenity::all::CreateEmbed,
    ) -> Result<(), AppError> {
        let edit = EditMessage::new().content("").embed(embed);

        self.http
            .edit_message(
                ChannelId::new(giveaway.channel_id),
                MessageId::new(giveaway.message_id),
                &edit,
                vec![],
            )
            .await
            .map_err(|e| {
                AppError::Delivery(format!(
                    "announcement edit for giveaway {}: {}",
                    giveaway.id, e
                ))
            })?;

        Ok(())
    }

    async fn send_to_channel(&self, giveaway: &Giveaway, content: String) -> Result<(), AppError> {
        ChannelId::new(giveaway.channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(|e| {
                AppError::Delivery(format!(
                    "result message for giveaway {}: {}",
                    giveaway.id, e
                ))
            })?;

        Ok(())
    }
}
