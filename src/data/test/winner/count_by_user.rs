use super::*;
use test_utils::factory::giveaway::GiveawayFactory;

/// Tests counting a user's wins across a guild's giveaways.
///
/// Expected: joins through the giveaway table and respects the guild
#[tokio::test]
async fn counts_wins_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let in_guild_a = GiveawayFactory::new(db).guild_id(1).build().await?;
    let also_guild_a = GiveawayFactory::new(db).guild_id(1).build().await?;
    let in_guild_b = GiveawayFactory::new(db).guild_id(2).build().await?;

    factory::giveaway_winner::create_winner(db, in_guild_a.id, 42, 0).await?;
    factory::giveaway_winner::create_winner(db, also_guild_a.id, 42, 0).await?;
    factory::giveaway_winner::create_winner(db, in_guild_b.id, 42, 0).await?;

    let repo = WinnerRepository::new(db);

    assert_eq!(repo.count_by_user(1, 42).await?, 2);
    assert_eq!(repo.count_by_user(2, 42).await?, 1);
    assert_eq!(repo.count_by_user(1, 77).await?, 0);

    Ok(())
}
