//! Embed and message-content builders for giveaway announcements.
//!
//! Everything in here is a pure function of the giveaway data so the
//! rendered copy can be unit tested without touching Discord.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::model::{
    giveaway::{CreateGiveawayParams, Giveaway, Requirements},
    winner::Winner,
};

pub const COLOR_ACTIVE: u32 = 0x3498db;
pub const COLOR_ENDED: u32 = 0x2ecc71;
pub const COLOR_CANCELLED: u32 = 0x95a5a6;
pub const COLOR_REROLL: u32 = 0xf39c12;

/// The reaction users click to enter.
pub const ENTRY_EMOJI: &str = "\u{1F389}";

/// Renders the requirement set as embed field lines. Empty when the
/// giveaway has no requirements.
pub fn requirement_lines(requirements: &Requirements) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(level) = requirements.min_level {
        lines.push(format!("Level {} or higher", level));
    }
    if !requirements.required_roles.is_empty() {
        let roles = requirements
            .required_roles
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Any of: {}", roles));
    }
    if let Some(days) = requirements.min_account_age_days {
        lines.push(format!("Account at least {} days old", days));
    }
    if let Some(days) = requirements.min_membership_age_days {
        lines.push(format!("Server member for at least {} days", days));
    }

    lines
}

fn base_embed(
    prize: &str,
    description: Option<&str>,
    winners_count: i32,
    host_id: u64,
    requirements: &Requirements,
) -> CreateEmbed {
    let mut body = format!(
        "React with {} to enter!\nHosted by <@{}>",
        ENTRY_EMOJI, host_id
    );
    if let Some(description) = description {
        body = format!("{}\n\n{}", description, body);
    }

    let mut embed = CreateEmbed::new()
        .title(format!("{} {}", ENTRY_EMOJI, prize))
        .description(body)
        .field("Winners", winners_count.to_string(), true);

    let requirement_lines = requirement_lines(requirements);
    if !requirement_lines.is_empty() {
        embed = embed.field("Requirements", requirement_lines.join("\n"), false);
    }

    embed
}

/// Embed for the initial announcement, built before the giveaway row
/// exists.
pub fn announcement_embed(params: &CreateGiveawayParams) -> CreateEmbed {
    base_embed(
        &params.prize,
        params.description.as_deref(),
        params.winners_count,
        params.host_id,
        &params.requirements,
    )
    .field("Ends", format!("<t:{}:R>", params.end_time.timestamp()), true)
    .color(COLOR_ACTIVE)
}

/// Refreshed embed for a still-active giveaway after an edit.
pub fn active_embed(giveaway: &Giveaway) -> CreateEmbed {
    base_embed(
        &giveaway.prize,
        giveaway.description.as_deref(),
        giveaway.winners_count,
        giveaway.host_id,
        &giveaway.requirements,
    )
    .field(
        "Ends",
        format!("<t:{}:R>", giveaway.end_time.timestamp()),
        true,
    )
    .field("Entries", giveaway.entries_count.to_string(), true)
    .color(COLOR_ACTIVE)
}

/// Terminal rendering of the announcement once the giveaway has ended.
pub fn ended_embed(giveaway: &Giveaway, winners: &[Winner]) -> CreateEmbed {
    let winner_line = if winners.is_empty() {
        "No valid entries".to_string()
    } else {
        mention_list(winners)
    };

    CreateEmbed::new()
        .title(format!("{} {} (Ended)", ENTRY_EMOJI, giveaway.prize))
        .description(format!(
            "Hosted by <@{}>\nEntries: {}",
            giveaway.host_id, giveaway.entries_count
        ))
        .field("Winners", winner_line, false)
        .footer(CreateEmbedFooter::new("Giveaway ended"))
        .color(COLOR_ENDED)
}

/// Terminal rendering of the announcement for a cancelled giveaway.
pub fn cancelled_embed(giveaway: &Giveaway) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} (Cancelled)", giveaway.prize))
        .description(format!(
            "The giveaway for **{}** hosted by <@{}> was cancelled. No winners were drawn.",
            giveaway.prize, giveaway.host_id
        ))
        .footer(CreateEmbedFooter::new("Giveaway cancelled"))
        .color(COLOR_CANCELLED)
}

/// Mention list for a draw's winners.
pub fn mention_list(winners: &[Winner]) -> String {
    winners
        .iter()
        .map(|winner| format!("<@{}>", winner.user_id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Public result message for the initial draw, honoring the ping setting.
pub fn result_content(giveaway: &Giveaway, winners: &[Winner]) -> String {
    if giveaway.settings.ping_winners {
        format!(
            "{} Congratulations {}! You won **{}**!",
            ENTRY_EMOJI,
            mention_list(winners),
            giveaway.prize
        )
    } else {
        format!(
            "{} The giveaway for **{}** has ended! {} winner{} drawn.",
            ENTRY_EMOJI,
            giveaway.prize,
            winners.len(),
            if winners.len() == 1 { " was" } else { "s were" }
        )
    }
}

/// Distinct copy for the zero-entries case; no draw happened.
pub fn no_winners_content(giveaway: &Giveaway) -> String {
    format!(
        "The giveaway for **{}** has ended, but nobody entered. No winners could be drawn.",
        giveaway.prize
    )
}

/// Public message for a reroll draw.
pub fn reroll_content(giveaway: &Giveaway, winners: &[Winner]) -> String {
    if giveaway.settings.ping_winners {
        format!(
            "{} The giveaway for **{}** was rerolled: congratulations {}!",
            ENTRY_EMOJI,
            giveaway.prize,
            mention_list(winners)
        )
    } else {
        format!(
            "{} The giveaway for **{}** was rerolled: {} new winner{} drawn.",
            ENTRY_EMOJI,
            giveaway.prize,
            winners.len(),
            if winners.len() == 1 { " was" } else { "s were" }
        )
    }
}

/// Direct notification sent to each winner when `dm_winners` is set.
pub fn winner_dm_content(giveaway: &Giveaway) -> String {
    format!(
        "{} You won **{}**! Contact the host <@{}> to claim your prize.",
        ENTRY_EMOJI, giveaway.prize, giveaway.host_id
    )
}
