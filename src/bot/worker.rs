//! Entry event worker.
//!
//! Consumes the entry events queued by the reaction handlers, runs
//! eligibility for adds, and applies the result through the entry tracker.
//! Serializing entry work through one consumer keeps the gateway handlers
//! free of database calls; the store's atomic counter updates handle any
//! concurrency that remains.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateMessage, MessageId, ReactionType, UserId};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::{entry::EntryEvent, giveaway::Giveaway},
    service::{
        eligibility::{EligibilityEvaluator, EligibilityResult, RejectionReason},
        entry_tracker::{AddEntryOutcome, EntryTracker},
        notification::ENTRY_EMOJI,
    },
};

/// Runs the entry worker loop until the event channel closes.
///
/// Each event is isolated: a failure is logged and the loop moves on to the
/// next event.
pub async fn run(
    db: DatabaseConnection,
    mut entry_rx: mpsc::Receiver<EntryEvent>,
    evaluator: EligibilityEvaluator,
    http: Arc<Http>,
) {
    tracing::info!("Entry worker started");

    while let Some(event) = entry_rx.recv().await {
        if let Err(e) = process_event(&db, &evaluator, &http, event).await {
            tracing::error!("Failed to process entry event {:?}: {}", event, e);
        }
    }

    tracing::info!("Entry worker stopped, event channel closed");
}

async fn process_event(
    db: &DatabaseConnection,
    evaluator: &EligibilityEvaluator,
    http: &Arc<Http>,
    event: EntryEvent,
) -> Result<(), AppError> {
    match event {
        EntryEvent::Add {
            guild_id,
            channel_id,
            message_id,
            user_id,
        } => {
            // Reactions on messages we don't track are not ours to handle.
            let Some(giveaway) = GiveawayRepository::new(db)
                .get_by_message(guild_id, message_id)
                .await?
            else {
                return Ok(());
            };

            match evaluator.check(user_id, &giveaway).await? {
                EligibilityResult::Eligible => {
                    let outcome = EntryTracker::new(db).add_entry(&giveaway, user_id).await?;

                    match outcome {
                        AddEntryOutcome::Added => {
                            tracing::info!(
                                "User {} entered giveaway {}",
                                user_id,
                                giveaway.id
                            );
                        }
                        AddEntryOutcome::AlreadyEntered => {}
                        AddEntryOutcome::GiveawayNotActive => {
                            remove_reaction(http, channel_id, message_id, user_id).await;
                        }
                    }
                }
                EligibilityResult::Rejected(reason) => {
                    tracing::info!(
                        "Rejected entry of user {} into giveaway {}: {}",
                        user_id,
                        giveaway.id,
                        reason
                    );

                    remove_reaction(http, channel_id, message_id, user_id).await;
                    notify_rejection(http, user_id, &giveaway, reason).await;
                }
            }
        }
        EntryEvent::Remove {
            guild_id,
            message_id,
            user_id,
        } => {
            let Some(giveaway) = GiveawayRepository::new(db)
                .get_by_message(guild_id, message_id)
                .await?
            else {
                return Ok(());
            };

            EntryTracker::new(db).remove_entry(&giveaway, user_id).await?;
        }
    }

    Ok(())
}

/// Removes a rejected user's entry reaction so the message doesn't imply
/// they are entered. Best-effort.
async fn remove_reaction(http: &Arc<Http>, channel_id: u64, message_id: u64, user_id: u64) {
    if let Err(e) = http
        .delete_reaction(
            ChannelId::new(channel_id),
            MessageId::new(message_id),
            UserId::new(user_id),
            &ReactionType::Unicode(ENTRY_EMOJI.to_string()),
        )
        .await
    {
        tracing::warn!(
            "Failed to remove rejected reaction of user {} on message {}: {}",
            user_id,
            message_id,
            e
        );
    }
}

/// DMs the rejected user why they could not enter. Best-effort; closed DMs
/// are common and not an error worth surfacing.
async fn notify_rejection(
    http: &Arc<Http>,
    user_id: u64,
    giveaway: &Giveaway,
    reason: RejectionReason,
) {
    let content = format!(
        "Your entry into the giveaway for **{}** was declined: {}",
        giveaway.prize,
        reason.message()
    );

    let delivery = async {
        let channel = UserId::new(user_id).create_dm_channel(http).await?;
        channel
            .id
            .send_message(http, CreateMessage::new().content(content))
            .await?;
        Ok::<(), serenity::Error>(())
    }
    .await;

    if let Err(e) = delivery {
        tracing::debug!("Failed to DM rejection reason to user {}: {}", user_id, e);
    }
}
