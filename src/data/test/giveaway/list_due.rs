use super::*;
use test_utils::factory::giveaway::GiveawayFactory;

/// Tests that only active giveaways past their end time are listed.
///
/// Expected: due active giveaway listed; future and ended ones excluded
#[tokio::test]
async fn lists_only_due_active_giveaways() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let due = GiveawayFactory::new(db)
        .end_time(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let _future = GiveawayFactory::new(db)
        .end_time(Utc::now() + Duration::hours(1))
        .build()
        .await?;
    let _already_ended = GiveawayFactory::new(db)
        .status(GiveawayStatus::Ended)
        .end_time(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let listed = repo.list_due(Utc::now()).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, due.id);

    Ok(())
}

/// Tests that due giveaways are returned across guilds, oldest deadline
/// first.
///
/// Expected: both guilds' due giveaways in end-time order
#[tokio::test]
async fn spans_guilds_in_end_time_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = GiveawayFactory::new(db)
        .guild_id(1)
        .end_time(Utc::now() - Duration::minutes(1))
        .build()
        .await?;
    let earlier = GiveawayFactory::new(db)
        .guild_id(2)
        .end_time(Utc::now() - Duration::minutes(10))
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let listed = repo.list_due(Utc::now()).await?;

    assert_eq!(
        listed.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![earlier.id, later.id]
    );

    Ok(())
}
