use serenity::all::{Context, EventHandler, Reaction, Ready};
use serenity::async_trait;
use tokio::sync::mpsc;

use crate::model::entry::EntryEvent;

pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub entry_tx: mpsc::Sender<EntryEvent>,
}

impl Handler {
    pub fn new(entry_tx: mpsc::Sender<EntryEvent>) -> Self {
        Self { entry_tx }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.entry_tx, ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(&self.entry_tx, ctx, removed_reaction).await;
    }
}
