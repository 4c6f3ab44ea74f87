use chrono::{DateTime, Utc};

/// A user's entry into a giveaway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub user_id: u64,
    pub entered_at: DateTime<Utc>,
}

impl From<entity::giveaway_entry::Model> for Entry {
    fn from(model: entity::giveaway_entry::Model) -> Self {
        Self {
            user_id: model.user_id as u64,
            entered_at: model.entered_at,
        }
    }
}

/// Inbound entry toggle delivered by the gateway.
///
/// The Serenity reaction handlers translate raw reaction events into these
/// messages and push them onto an mpsc channel; the entry worker consumes
/// them. No ordering is assumed between a rapid add/remove pair from the
/// same user - the tracker applies events as they arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEvent {
    Add {
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
    },
    Remove {
        guild_id: u64,
        message_id: u64,
        user_id: u64,
    },
}
