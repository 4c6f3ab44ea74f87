use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{bot::handler::Handler, config::Config, error::AppError, model::entry::EntryEvent};

/// Builds the Discord bot client.
///
/// The client is returned unstarted so the caller can hand its HTTP client
/// to the scheduler and the entry worker before the gateway connection
/// blocks. Call `client.start()` from a spawned task.
///
/// # Arguments
/// - `config`: Application configuration holding the bot token
/// - `entry_tx`: Channel the reaction handlers push entry events onto
///
/// # Returns
/// - `Ok((Client, Arc<Http>))`: The unstarted client and its HTTP handle
pub async fn init_bot(
    config: &Config,
    entry_tx: mpsc::Sender<EntryEvent>,
) -> Result<(Client, Arc<serenity::http::Http>), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let handler = Handler::new(entry_tx);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}
