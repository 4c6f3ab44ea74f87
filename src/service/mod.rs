//! Service layer for the giveaway engine.
//!
//! Services sit between the callers (command layer, gateway event worker,
//! expiry scheduler) and the data layer. They own the business rules: the
//! giveaway state machine, eligibility evaluation, entry tracking, winner
//! selection, and Discord notification fan-out.

pub mod eligibility;
pub mod entry_tracker;
pub mod giveaway;
pub mod notification;
pub mod statistics;
pub mod winner_selector;
