mod giveaway;
