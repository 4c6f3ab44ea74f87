pub use super::giveaway::Entity as Giveaway;
pub use super::giveaway_entry::Entity as GiveawayEntry;
pub use super::giveaway_winner::Entity as GiveawayWinner;
