pub mod giveaway_expiry;

pub use giveaway_expiry::GiveawayExpiryScheduler;
