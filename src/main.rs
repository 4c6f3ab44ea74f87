use std::sync::Arc;

use rafflebot::{
    bot,
    config::Config,
    error::AppError,
    scheduler::GiveawayExpiryScheduler,
    service::eligibility::{DiscordMembershipLookup, EligibilityEvaluator},
    startup,
};

/// Capacity of the entry event channel. Reaction bursts beyond this park
/// in per-event forwarding tasks until the worker catches up.
const ENTRY_CHANNEL_CAPACITY: usize = 1024;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let (entry_tx, entry_rx) = tokio::sync::mpsc::channel(ENTRY_CHANNEL_CAPACITY);

    let (mut client, http) = bot::init_bot(&config, entry_tx).await?;

    // No leveling backend is wired by default; giveaways with a level
    // requirement reject all candidates until one is.
    let evaluator =
        EligibilityEvaluator::new(None, Arc::new(DiscordMembershipLookup::new(http.clone())));

    tokio::spawn(bot::worker::run(
        db.clone(),
        entry_rx,
        evaluator,
        http.clone(),
    ));

    let mut expiry_scheduler = GiveawayExpiryScheduler::start(db.clone(), http.clone()).await?;

    tokio::spawn(async move {
        if let Err(e) = client.start().await {
            tracing::error!("Discord client stopped with error: {}", e);
        }
    });

    tracing::info!("Giveaway engine running, press Ctrl-C to stop");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    expiry_scheduler.shutdown().await?;

    Ok(())
}
