//! Multi-criterion entry eligibility evaluation.
//!
//! The evaluator checks a candidate against a giveaway's requirement set in
//! a fixed order so rejection reasons are deterministic: host exclusion,
//! minimum level, required roles, account age, membership age. The first
//! failing check wins. Criteria absent from the requirement set are treated
//! as satisfied.
//!
//! Level and membership data come from injected lookups; the evaluator
//! performs no I/O of its own, which keeps it a pure function for testing.

use serenity::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::{error::AppError, model::giveaway::Giveaway};

/// Level backend for guilds running a leveling system.
///
/// The leveling feature lives outside this engine; wire its store in here.
#[async_trait]
pub trait LevelLookup: Send + Sync {
    async fn level(&self, guild_id: u64, user_id: u64) -> Result<u32, AppError>;
}

/// Membership data for a candidate: roles and the two age criteria.
#[async_trait]
pub trait MembershipLookup: Send + Sync {
    async fn role_ids(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AppError>;
    async fn account_age_days(&self, user_id: u64) -> Result<u32, AppError>;
    async fn membership_age_days(&self, guild_id: u64, user_id: u64) -> Result<u32, AppError>;
}

/// Why a candidate was rejected. `Display` renders the stable reason code
/// the command layer keys its copy off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    HostCannotEnter,
    NeedLevel(u32),
    NeedRole,
    AccountTooNew(u32),
    ServerTooNew(u32),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostCannotEnter => write!(f, "host_cannot_enter"),
            Self::NeedLevel(level) => write!(f, "need_level_{}", level),
            Self::NeedRole => write!(f, "need_role"),
            Self::AccountTooNew(days) => write!(f, "account_too_new_{}", days),
            Self::ServerTooNew(days) => write!(f, "server_too_new_{}", days),
        }
    }
}

impl RejectionReason {
    /// Human-readable explanation, used for the rejection DM.
    pub fn message(&self) -> String {
        match self {
            Self::HostCannotEnter => "The host cannot enter their own giveaway.".to_string(),
            Self::NeedLevel(level) => {
                format!("You need to be at least level {} to enter.", level)
            }
            Self::NeedRole => "You are missing a role required to enter.".to_string(),
            Self::AccountTooNew(days) => {
                format!("Your account must be at least {} days old to enter.", days)
            }
            Self::ServerTooNew(days) => format!(
                "You must have been a member of this server for at least {} days to enter.",
                days
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityResult {
    Eligible,
    Rejected(RejectionReason),
}

pub struct EligibilityEvaluator {
    /// None means no leveling backend is wired; level requirements then
    /// reject every candidate rather than silently waving them through a
    /// criterion the host explicitly configured.
    level: Option<Arc<dyn LevelLookup>>,
    membership: Arc<dyn MembershipLookup>,
}

impl EligibilityEvaluator {
    pub fn new(level: Option<Arc<dyn LevelLookup>>, membership: Arc<dyn MembershipLookup>) -> Self {
        Self { level, membership }
    }

    /// Evaluates a candidate against a giveaway's requirement set.
    ///
    /// Checks run in a fixed order and the first failure wins. Lookups are
    /// only consulted for criteria the giveaway actually configures.
    ///
    /// # Returns
    /// - `Ok(EligibilityResult)`: Eligible, or rejected with a reason
    /// - `Err(AppError)`: A lookup failed
    pub async fn check(
        &self,
        user_id: u64,
        giveaway: &Giveaway,
    ) -> Result<EligibilityResult, AppError> {
        let requirements = &giveaway.requirements;

        if user_id == giveaway.host_id && !giveaway.settings.allow_host_entry {
            return Ok(EligibilityResult::Rejected(RejectionReason::HostCannotEnter));
        }

        if let Some(min_level) = requirements.min_level {
            let level = match &self.level {
                Some(lookup) => lookup.level(giveaway.guild_id, user_id).await?,
                None => 0,
            };
            if level < min_level {
                return Ok(EligibilityResult::Rejected(RejectionReason::NeedLevel(
                    min_level,
                )));
            }
        }

        if !requirements.required_roles.is_empty() {
            let roles = self
                .membership
                .role_ids(giveaway.guild_id, user_id)
                .await?;
            let holds_any = requirements
                .required_roles
                .iter()
                .any(|required| roles.contains(required));
            if !holds_any {
                return Ok(EligibilityResult::Rejected(RejectionReason::NeedRole));
            }
        }

        if let Some(min_days) = requirements.min_account_age_days {
            let age = self.membership.account_age_days(user_id).await?;
            if age < min_days {
                return Ok(EligibilityResult::Rejected(RejectionReason::AccountTooNew(
                    min_days,
                )));
            }
        }

        if let Some(min_days) = requirements.min_membership_age_days {
            let age = self
                .membership
                .membership_age_days(giveaway.guild_id, user_id)
                .await?;
            if age < min_days {
                return Ok(EligibilityResult::Rejected(RejectionReason::ServerTooNew(
                    min_days,
                )));
            }
        }

        Ok(EligibilityResult::Eligible)
    }
}

/// Membership lookup backed by the Discord API.
///
/// Account age derives from the snowflake creation timestamp; membership
/// age from the member's `joined_at`. A member record without `joined_at`
/// counts as age zero.
pub struct DiscordMembershipLookup {
    http: Arc<serenity::http::Http>,
}

impl DiscordMembershipLookup {
    pub fn new(http: Arc<serenity::http::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MembershipLookup for DiscordMembershipLookup {
    async fn role_ids(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AppError> {
        let member = self
            .http
            .get_member(guild_id.into(), user_id.into())
            .await?;

        Ok(member.roles.iter().map(|role| role.get()).collect())
    }

    async fn account_age_days(&self, user_id: u64) -> Result<u32, AppError> {
        let created = serenity::all::UserId::new(user_id).created_at();
        let age = chrono::Utc::now().signed_duration_since(created.to_utc());

        Ok(age.num_days().max(0) as u32)
    }

    async fn membership_age_days(&self, guild_id: u64, user_id: u64) -> Result<u32, AppError> {
        let member = self
            .http
            .get_member(guild_id.into(), user_id.into())
            .await?;

        let days = member
            .joined_at
            .map(|joined| {
                chrono::Utc::now()
                    .signed_duration_since(joined.to_utc())
                    .num_days()
                    .max(0)
            })
            .unwrap_or(0);

        Ok(days as u32)
    }
}
