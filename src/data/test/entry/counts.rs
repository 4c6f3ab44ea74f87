use super::*;
use test_utils::factory::giveaway::GiveawayFactory;

/// Tests counting a user's entries across a guild's giveaways.
///
/// Expected: joins through the giveaway table and respects the guild
#[tokio::test]
async fn counts_entries_by_user_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let in_guild_a = GiveawayFactory::new(db).guild_id(1).build().await?;
    let also_guild_a = GiveawayFactory::new(db).guild_id(1).build().await?;
    let in_guild_b = GiveawayFactory::new(db).guild_id(2).build().await?;

    factory::giveaway_entry::create_entry(db, in_guild_a.id, 42).await?;
    factory::giveaway_entry::create_entry(db, also_guild_a.id, 42).await?;
    factory::giveaway_entry::create_entry(db, in_guild_b.id, 42).await?;
    factory::giveaway_entry::create_entry(db, in_guild_a.id, 77).await?;

    let repo = EntryRepository::new(db);

    assert_eq!(repo.count_by_user(1, 42).await?, 2);
    assert_eq!(repo.count_by_user(2, 42).await?, 1);
    assert_eq!(repo.count_by_user(1, 99).await?, 0);

    Ok(())
}

/// Tests the guild-wide entry count used by statistics.
///
/// Expected: entries under giveaways created before the window are excluded
#[tokio::test]
async fn counts_guild_entries_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recent = GiveawayFactory::new(db).guild_id(1).build().await?;
    factory::giveaway_entry::create_entries(db, recent.id, 3).await?;

    let repo = EntryRepository::new(db);

    assert_eq!(
        repo.count_in_guild_since(1, Utc::now() - Duration::days(7))
            .await?,
        3
    );
    assert_eq!(
        repo.count_in_guild_since(1, Utc::now() + Duration::hours(1))
            .await?,
        0
    );
    assert_eq!(
        repo.count_in_guild_since(2, Utc::now() - Duration::days(7))
            .await?,
        0
    );

    Ok(())
}
