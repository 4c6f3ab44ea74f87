//! Domain models and operation parameter types.
//!
//! These types sit between the data layer (SeaORM entities) and the service
//! layer. Discord snowflakes are `u64` here; the repositories convert to the
//! signed storage representation at the database boundary.

pub mod entry;
pub mod giveaway;
pub mod statistics;
pub mod winner;
