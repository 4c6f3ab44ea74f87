use chrono::{DateTime, Utc};

pub use entity::giveaway::GiveawayStatus;

/// Optional entry criteria for a giveaway. Absent fields impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    pub min_level: Option<u32>,
    /// Candidate must hold at least one of these roles (any-of). Empty means
    /// no role constraint.
    pub required_roles: Vec<u64>,
    pub min_account_age_days: Option<u32>,
    pub min_membership_age_days: Option<u32>,
}

impl Requirements {
    pub fn is_empty(&self) -> bool {
        self.min_level.is_none()
            && self.required_roles.is_empty()
            && self.min_account_age_days.is_none()
            && self.min_membership_age_days.is_none()
    }
}

/// Behavioral settings fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiveawaySettings {
    pub allow_host_entry: bool,
    pub ping_winners: bool,
    pub dm_winners: bool,
}

impl Default for GiveawaySettings {
    fn default() -> Self {
        Self {
            allow_host_entry: false,
            ping_winners: true,
            dm_winners: true,
        }
    }
}

/// Domain model for a giveaway, identified externally by
/// (guild_id, message_id).
#[derive(Debug, Clone)]
pub struct Giveaway {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub description: Option<String>,
    pub winners_count: i32,
    pub status: GiveawayStatus,
    /// Denormalized entry counter, maintained by atomic adjustment. The
    /// entry rows remain the source of truth for draws.
    pub entries_count: i32,
    pub requirements: Requirements,
    pub settings: GiveawaySettings,
    pub created_at: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Giveaway {
    pub fn is_active(&self) -> bool {
        self.status == GiveawayStatus::Active
    }
}

impl From<entity::giveaway::Model> for Giveaway {
    fn from(model: entity::giveaway::Model) -> Self {
        let required_roles = model
            .required_role_ids
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<u64>>(raw).ok())
            .unwrap_or_default();

        Self {
            id: model.id,
            guild_id: model.guild_id as u64,
            channel_id: model.channel_id as u64,
            message_id: model.message_id as u64,
            host_id: model.host_id as u64,
            prize: model.prize,
            description: model.description,
            winners_count: model.winners_count,
            status: model.status,
            entries_count: model.entries_count,
            requirements: Requirements {
                min_level: model.min_level.map(|l| l as u32),
                required_roles,
                min_account_age_days: model.min_account_age_days.map(|d| d as u32),
                min_membership_age_days: model.min_membership_age_days.map(|d| d as u32),
            },
            settings: GiveawaySettings {
                allow_host_entry: model.allow_host_entry,
                ping_winners: model.ping_winners,
                dm_winners: model.dm_winners,
            },
            created_at: model.created_at,
            end_time: model.end_time,
            ended_at: model.ended_at,
        }
    }
}

/// A creation request as the command layer supplies it. The service
/// validates the bounds, computes `end_time = now + duration`, posts the
/// announcement, and only then builds [`CreateGiveawayParams`] for the
/// store.
#[derive(Debug, Clone)]
pub struct CreateGiveawayRequest {
    pub guild_id: u64,
    pub channel_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub description: Option<String>,
    pub winners_count: i32,
    pub duration: chrono::Duration,
    pub requirements: Requirements,
    pub settings: GiveawaySettings,
}

/// Parameters for persisting a new giveaway. The announcement message is
/// posted before the row is created, so `message_id` is already known.
#[derive(Debug, Clone)]
pub struct CreateGiveawayParams {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub description: Option<String>,
    pub winners_count: i32,
    pub requirements: Requirements,
    pub settings: GiveawaySettings,
    pub end_time: DateTime<Utc>,
}

/// Partial update applied to an active giveaway before expiry.
#[derive(Debug, Clone, Default)]
pub struct UpdateGiveawayParams {
    pub prize: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl UpdateGiveawayParams {
    pub fn is_empty(&self) -> bool {
        self.prize.is_none() && self.description.is_none() && self.end_time.is_none()
    }
}

/// Who initiated an end operation. Auto ends come from the expiry scheduler,
/// manual ends from a host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTrigger {
    Auto,
    Manual,
}
