use chrono::{DateTime, Utc};

/// A user selected in one draw of a giveaway.
///
/// `draw` 0 is the initial end draw; each reroll increments it. `prize` is
/// the snapshot taken at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub id: i32,
    pub user_id: u64,
    pub draw: i32,
    pub prize: String,
    pub won_at: DateTime<Utc>,
    pub claimed: bool,
    pub notified: bool,
}

impl From<entity::giveaway_winner::Model> for Winner {
    fn from(model: entity::giveaway_winner::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id as u64,
            draw: model.draw,
            prize: model.prize,
            won_at: model.won_at,
            claimed: model.claimed,
            notified: model.notified,
        }
    }
}
