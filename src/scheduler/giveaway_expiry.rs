use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::giveaway::{EndTrigger, Giveaway},
    service::giveaway::GiveawayService,
};

/// Background scheduler that ends giveaways whose end time has passed.
///
/// Runs every minute. Each tick lists due giveaways and ends them through
/// the same service path a manual end takes, so a manual end racing the
/// tick resolves on the store's status guard rather than here.
pub struct GiveawayExpiryScheduler {
    scheduler: JobScheduler,
}

impl GiveawayExpiryScheduler {
    /// Starts the expiry scheduler.
    ///
    /// # Arguments
    /// - `db`: Database connection
    /// - `discord_http`: Discord HTTP client for end notifications
    pub async fn start(
        db: DatabaseConnection,
        discord_http: Arc<Http>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;

        let job_db = db.clone();
        let job_http = discord_http.clone();

        // Run every minute
        let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
            let db = job_db.clone();
            let http = job_http.clone();

            Box::pin(async move {
                if let Err(e) = process_due_giveaways(&db, http).await {
                    tracing::error!("Error processing due giveaways: {}", e);
                }
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        tracing::info!("Giveaway expiry scheduler started");

        Ok(Self { scheduler })
    }

    /// Stops the scheduler. A tick already in flight finishes its current
    /// giveaway; pending ones are picked up at the next startup.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;

        tracing::info!("Giveaway expiry scheduler stopped");

        Ok(())
    }
}

/// Ends every active giveaway whose end time has passed.
async fn process_due_giveaways(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
) -> Result<(), AppError> {
    let due = GiveawayRepository::new(db).list_due(Utc::now()).await?;

    if due.is_empty() {
        return Ok(());
    }

    tracing::info!("Found {} giveaway(s) due for ending", due.len());

    end_due_giveaways(db, discord_http, due).await;

    Ok(())
}

/// Ends a batch of due giveaways one by one.
///
/// One failing giveaway must not block the rest of the batch, so each end
/// is isolated: the error is logged and the loop continues. A giveaway
/// that lost the race to a manual end comes back as `InvalidState`, which
/// is expected and logged at debug.
pub(crate) async fn end_due_giveaways(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    due: Vec<Giveaway>,
) {
    let service = GiveawayService::new(db, discord_http);

    for giveaway in due {
        match service
            .end(giveaway.guild_id, giveaway.message_id, EndTrigger::Auto)
            .await
        {
            Ok(winners) => {
                tracing::info!(
                    "Auto-ended giveaway {} with {} winner(s)",
                    giveaway.id,
                    winners.len()
                );
            }
            Err(AppError::InvalidState(_)) => {
                tracing::debug!(
                    "Giveaway {} was already ended or cancelled before its tick",
                    giveaway.id
                );
            }
            Err(e) => {
                tracing::error!("Failed to auto-end giveaway {}: {}", giveaway.id, e);
            }
        }
    }
}
