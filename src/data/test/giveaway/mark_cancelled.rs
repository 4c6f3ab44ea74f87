use super::*;

/// Tests the Active -> Cancelled transition.
///
/// Expected: Ok(true) with status Cancelled and `ended_at` stamped
#[tokio::test]
async fn cancels_active_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    assert!(repo.mark_cancelled(giveaway.id).await?);

    let reloaded = repo.get_by_message(100, 500).await?.unwrap();
    assert_eq!(reloaded.status, GiveawayStatus::Cancelled);
    assert!(reloaded.ended_at.is_some());

    Ok(())
}

/// Tests the status guard: an ended giveaway cannot be cancelled.
///
/// Expected: Ok(false) with status unchanged
#[tokio::test]
async fn cannot_cancel_ended_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    assert!(repo.mark_ended(giveaway.id, "Test prize", &[]).await?);
    assert!(!repo.mark_cancelled(giveaway.id).await?);

    let reloaded = repo.get_by_message(100, 500).await?.unwrap();
    assert_eq!(reloaded.status, GiveawayStatus::Ended);

    Ok(())
}
