pub mod giveaway;
pub mod giveaway_entry;
pub mod giveaway_winner;
pub mod prelude;
