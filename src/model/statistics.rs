/// Aggregate giveaway activity for a guild over a trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildStatistics {
    pub window_days: u32,
    pub giveaways_created: u64,
    pub giveaways_ended: u64,
    pub giveaways_cancelled: u64,
    pub active_now: u64,
    pub total_entries: u64,
    pub average_entries: f64,
}

/// A single user's participation history within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatistics {
    pub entered: u64,
    pub wins: u64,
    pub hosted: u64,
    pub win_rate: f64,
}
