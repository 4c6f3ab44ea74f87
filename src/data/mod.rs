//! Database repository layer for the giveaway engine.
//!
//! Repositories handle all database operations for the three persisted
//! collections (giveaway, entry, winner). They use SeaORM entity models
//! internally and return domain models to the service layer. Counter
//! mutations on `entries_count` are expressed as atomic column expressions
//! at the store, never read-modify-write in application code.

pub mod entry;
pub mod giveaway;
pub mod winner;

#[cfg(test)]
mod test;
