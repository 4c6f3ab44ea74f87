//! Application error types.
//!
//! `AppError` is the single error type flowing through the engine. Storage
//! failures (`DbErr`) are transparent and never swallowed; Discord delivery
//! failures are represented as `Delivery` and handled at the notification
//! boundary (logged, never propagated out of `end`/`reroll`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage-layer failure. Fatal for the surrounding operation and
    /// surfaced to the caller; safe to retry.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity. Boxed because `serenity::Error` is
    /// large and would bloat every `Result` otherwise.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    #[error(transparent)]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// No giveaway exists for the given (guild, message) pair.
    #[error("giveaway not found: {0}")]
    NotFound(String),

    /// The operation is not valid for the giveaway's current status, e.g.
    /// ending an already-ended giveaway or rerolling an active one.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Caller-supplied input outside allowed bounds.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reroll requested but every remaining entrant has already won.
    #[error("no eligible participants remain")]
    NoEligibleParticipants,

    /// A single notification could not be delivered. Non-fatal; callers log
    /// and continue with the remaining recipients.
    #[error("delivery failure: {0}")]
    Delivery(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    /// Check `.env.example` for the required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
