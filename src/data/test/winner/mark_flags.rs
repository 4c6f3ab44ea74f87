use super::*;
use sea_orm::EntityTrait;

/// Tests setting the notified and claimed flags independently.
///
/// Expected: each flag set on its own row without touching the other
#[tokio::test]
async fn sets_notified_and_claimed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;
    let winner = factory::giveaway_winner::create_winner(db, giveaway.id, 11, 0).await?;

    let repo = WinnerRepository::new(db);
    repo.mark_notified(winner.id).await?;

    let reloaded = entity::prelude::GiveawayWinner::find_by_id(winner.id)
        .one(db)
        .await?
        .unwrap();
    assert!(reloaded.notified);
    assert!(!reloaded.claimed);

    repo.mark_claimed(winner.id).await?;

    let reloaded = entity::prelude::GiveawayWinner::find_by_id(winner.id)
        .one(db)
        .await?
        .unwrap();
    assert!(reloaded.claimed);

    Ok(())
}

/// Tests marking a winner row that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    let result = repo.mark_notified(999_999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
