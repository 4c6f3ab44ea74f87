use super::*;
use test_utils::factory::giveaway::GiveawayFactory;

/// Tests listing a guild's giveaways newest first with a limit.
///
/// Expected: only the guild's giveaways, capped at the limit
#[tokio::test]
async fn lists_guild_giveaways_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        GiveawayFactory::new(db).guild_id(1).build().await?;
    }
    GiveawayFactory::new(db).guild_id(2).build().await?;

    let repo = GiveawayRepository::new(db);
    let listed = repo.list_by_guild(1, None, 2).await?;

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|g| g.guild_id == 1));

    Ok(())
}

/// Tests the optional status filter.
///
/// Expected: only giveaways of the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiveawayFactory::new(db).guild_id(1).build().await?;
    let ended = GiveawayFactory::new(db)
        .guild_id(1)
        .status(GiveawayStatus::Ended)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let listed = repo
        .list_by_guild(1, Some(GiveawayStatus::Ended), 10)
        .await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, ended.id);

    Ok(())
}

/// Tests listing active giveaways ordered by the soonest deadline.
///
/// Expected: active giveaways only, in ascending end-time order
#[tokio::test]
async fn lists_active_soonest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = GiveawayFactory::new(db)
        .guild_id(1)
        .end_time(Utc::now() + Duration::hours(3))
        .build()
        .await?;
    let sooner = GiveawayFactory::new(db)
        .guild_id(1)
        .end_time(Utc::now() + Duration::hours(1))
        .build()
        .await?;
    GiveawayFactory::new(db)
        .guild_id(1)
        .status(GiveawayStatus::Cancelled)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let listed = repo.list_active(1).await?;

    assert_eq!(
        listed.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![sooner.id, later.id]
    );

    Ok(())
}

/// Tests the statistics count helpers.
///
/// Expected: counts respect the window start, status filter, and host
#[tokio::test]
async fn counts_since_and_by_host() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiveawayFactory::new(db).guild_id(1).host_id(7).build().await?;
    GiveawayFactory::new(db)
        .guild_id(1)
        .host_id(7)
        .status(GiveawayStatus::Ended)
        .build()
        .await?;
    GiveawayFactory::new(db).guild_id(2).host_id(7).build().await?;

    let repo = GiveawayRepository::new(db);
    let since = Utc::now() - Duration::days(30);

    assert_eq!(repo.count_since(1, since, None).await?, 2);
    assert_eq!(
        repo.count_since(1, since, Some(GiveawayStatus::Ended)).await?,
        1
    );
    assert_eq!(repo.count_since(1, Utc::now() + Duration::hours(1), None).await?, 0);
    assert_eq!(repo.count_hosted_by_user(1, 7).await?, 2);
    assert_eq!(repo.count_hosted_by_user(1, 8).await?, 0);

    Ok(())
}
