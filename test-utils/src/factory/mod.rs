//! Factory modules for creating test entities.
//!
//! Each factory provides a builder with sensible defaults plus a shorthand
//! `create_*` function for the common case.

pub mod giveaway;
pub mod giveaway_entry;
pub mod giveaway_winner;
pub mod helpers;
