//! Entry state tracking.
//!
//! The tracker applies add/remove entry events against the store. It owns
//! two invariants: one entry per (giveaway, user) pair, and an
//! `entries_count` that converges to the live entry row count. Eligibility
//! is deliberately not evaluated here - callers run the
//! [`EligibilityEvaluator`](super::eligibility::EligibilityEvaluator) first
//! and only hand eligible users to the tracker.

use sea_orm::DatabaseConnection;

use crate::{data::entry::EntryRepository, error::AppError, model::giveaway::Giveaway};

/// Outcome of an entry add. `AlreadyEntered` is distinct from `Added` so
/// callers can suppress a duplicate confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddEntryOutcome {
    Added,
    AlreadyEntered,
    GiveawayNotActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveEntryOutcome {
    Removed,
    NotEntered,
}

pub struct EntryTracker<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryTracker<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user's entry into a giveaway.
    ///
    /// Rejects softly when the giveaway is no longer Active - a reaction
    /// racing an end/cancel must not orphan an entry under a closed
    /// giveaway. On success the entry row is inserted and the cached
    /// counter incremented atomically.
    ///
    /// # Returns
    /// - `Ok(AddEntryOutcome)`: Added, already entered, or not active
    /// - `Err(AppError)`: Storage failure
    pub async fn add_entry(
        &self,
        giveaway: &Giveaway,
        user_id: u64,
    ) -> Result<AddEntryOutcome, AppError> {
        if !giveaway.is_active() {
            return Ok(AddEntryOutcome::GiveawayNotActive);
        }

        let entries = EntryRepository::new(self.db);

        if entries.exists(giveaway.id, user_id).await? {
            return Ok(AddEntryOutcome::AlreadyEntered);
        }

        entries.add(giveaway.id, user_id).await?;
        entries.increment_count(giveaway.id).await?;

        Ok(AddEntryOutcome::Added)
    }

    /// Withdraws a user's entry.
    ///
    /// Removal is accepted regardless of status; stale entries under a
    /// closed giveaway are ignored by draws anyway. The counter decrement
    /// floors at zero - if the counter was already zero while an entry row
    /// existed, the inconsistency is logged rather than driving the counter
    /// negative.
    pub async fn remove_entry(
        &self,
        giveaway: &Giveaway,
        user_id: u64,
    ) -> Result<RemoveEntryOutcome, AppError> {
        let entries = EntryRepository::new(self.db);

        if !entries.remove(giveaway.id, user_id).await? {
            return Ok(RemoveEntryOutcome::NotEntered);
        }

        if !entries.decrement_count(giveaway.id).await? {
            tracing::warn!(
                "entries_count for giveaway {} was already zero on removal; \
                 counter and entry rows have drifted",
                giveaway.id
            );
        }

        Ok(RemoveEntryOutcome::Removed)
    }
}
