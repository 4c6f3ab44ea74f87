use super::*;

/// Tests fetching a giveaway by its (guild, message) pair.
///
/// Expected: Ok(Some) for the stored pair
#[tokio::test]
async fn finds_by_guild_and_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let created = repo.create(params(100, 500)).await?;

    let found = repo.get_by_message(100, 500).await?;

    assert_eq!(found.map(|g| g.id), Some(created.id));

    Ok(())
}

/// Tests that the message id alone is not enough; the guild must match too.
///
/// Expected: Ok(None) for the same message id under a different guild
#[tokio::test]
async fn requires_matching_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    repo.create(params(100, 500)).await?;

    assert!(repo.get_by_message(999, 500).await?.is_none());
    assert!(repo.get_by_message(100, 999).await?.is_none());

    Ok(())
}
