use super::*;

/// Tests the Active -> Ended transition with a winner draw.
///
/// Verifies the status guard passes, `ended_at` is stamped, and the draw-0
/// winner rows are written in the same transaction.
///
/// Expected: Ok(true) with winner rows present
#[tokio::test]
async fn ends_active_giveaway_and_records_draw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    let ended = repo.mark_ended(giveaway.id, "Test prize", &[11, 22]).await?;
    assert!(ended);

    let reloaded = repo.get_by_message(100, 500).await?.unwrap();
    assert_eq!(reloaded.status, GiveawayStatus::Ended);
    assert!(reloaded.ended_at.is_some());

    let winners = entity::prelude::GiveawayWinner::find()
        .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway.id))
        .all(db)
        .await?;
    assert_eq!(winners.len(), 2);
    assert!(winners.iter().all(|w| w.draw == 0));
    assert!(winners.iter().all(|w| w.prize == "Test prize"));

    Ok(())
}

/// Tests ending with an empty draw (nobody entered).
///
/// Expected: Ok(true) and zero winner rows
#[tokio::test]
async fn ends_with_no_winners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    assert!(repo.mark_ended(giveaway.id, "Test prize", &[]).await?);

    let winner_count = entity::prelude::GiveawayWinner::find()
        .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway.id))
        .count(db)
        .await?;
    assert_eq!(winner_count, 0);

    Ok(())
}

/// Tests the status guard against a double end.
///
/// The second call must see the giveaway already Ended, write nothing, and
/// report the lost race.
///
/// Expected: second call Ok(false), winner rows unchanged
#[tokio::test]
async fn second_end_loses_the_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    assert!(repo.mark_ended(giveaway.id, "Test prize", &[11]).await?);
    assert!(!repo.mark_ended(giveaway.id, "Test prize", &[99]).await?);

    let winners = entity::prelude::GiveawayWinner::find()
        .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway.id))
        .all(db)
        .await?;
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].user_id, 11);

    Ok(())
}

/// Tests that a cancelled giveaway cannot be ended.
///
/// Expected: Ok(false) and status stays Cancelled
#[tokio::test]
async fn cannot_end_cancelled_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    assert!(repo.mark_cancelled(giveaway.id).await?);
    assert!(!repo.mark_ended(giveaway.id, "Test prize", &[11]).await?);

    let reloaded = repo.get_by_message(100, 500).await?.unwrap();
    assert_eq!(reloaded.status, GiveawayStatus::Cancelled);

    Ok(())
}
