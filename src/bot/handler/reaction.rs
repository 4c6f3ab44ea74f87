//! Reaction event handlers for giveaway entry.
//!
//! Reactions with the entry emoji are translated into [`EntryEvent`]s and
//! pushed onto the entry channel; the entry worker owns eligibility and
//! storage. Handlers stay thin so a burst of reactions never blocks the
//! gateway on database work.

use serenity::all::{Context, Reaction};
use tokio::sync::mpsc;

use crate::{model::entry::EntryEvent, service::notification::ENTRY_EMOJI};

/// Handles a reaction added to a message.
///
/// Filters out non-entry emoji, DMs, bot users (including the bot's own
/// seed reaction), and then queues an add event.
pub async fn handle_reaction_add(
    entry_tx: &mpsc::Sender<EntryEvent>,
    ctx: Context,
    reaction: Reaction,
) {
    if !reaction.emoji.unicode_eq(ENTRY_EMOJI) {
        return;
    }

    let Some(guild_id) = reaction.guild_id else {
        return;
    };
    let Some(user_id) = reaction.user_id else {
        return;
    };

    if user_id == ctx.cache.current_user().id {
        return;
    }
    if reaction
        .member
        .as_ref()
        .is_some_and(|member| member.user.bot)
    {
        return;
    }

    let event = EntryEvent::Add {
        guild_id: guild_id.get(),
        channel_id: reaction.channel_id.get(),
        message_id: reaction.message_id.get(),
        user_id: user_id.get(),
    };

    forward_event(entry_tx, event);
}

/// Handles a reaction removed from a message.
///
/// Queues a withdraw event. No eligibility applies to removal; the worker
/// hands it straight to the entry tracker.
pub async fn handle_reaction_remove(
    entry_tx: &mpsc::Sender<EntryEvent>,
    ctx: Context,
    reaction: Reaction,
) {
    if !reaction.emoji.unicode_eq(ENTRY_EMOJI) {
        return;
    }

    let Some(guild_id) = reaction.guild_id else {
        return;
    };
    let Some(user_id) = reaction.user_id else {
        return;
    };

    if user_id == ctx.cache.current_user().id {
        return;
    }

    let event = EntryEvent::Remove {
        guild_id: guild_id.get(),
        message_id: reaction.message_id.get(),
        user_id: user_id.get(),
    };

    forward_event(entry_tx, event);
}

/// Queues an entry event for the worker without blocking the gateway.
///
/// The reaction itself stays visible on the message, so silently dropping
/// a toggle would leave the user's entry state out of sync with what they
/// see. When the channel is momentarily full the send moves to its own
/// task and waits for the worker to drain; only a closed channel (shutdown
/// in progress) loses the event.
fn forward_event(entry_tx: &mpsc::Sender<EntryEvent>, event: EntryEvent) {
    match entry_tx.try_send(event) {
        Ok(()) => {}
        Err(mpsc::error::TrySendError::Full(event)) => {
            let entry_tx = entry_tx.clone();
            tokio::spawn(async move {
                if entry_tx.send(event).await.is_err() {
                    tracing::warn!("Dropping entry event {:?}, channel closed", event);
                }
            });
        }
        Err(mpsc::error::TrySendError::Closed(event)) => {
            tracing::warn!("Dropping entry event {:?}, channel closed", event);
        }
    }
}
