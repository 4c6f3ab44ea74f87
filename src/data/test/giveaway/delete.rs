use super::*;

/// Tests deleting a giveaway and its dependents.
///
/// Entry and winner rows reference the giveaway with ON DELETE CASCADE, so
/// deleting the parent must remove them too.
///
/// Expected: Ok with giveaway, entries, and winners all gone
#[tokio::test]
async fn deletes_giveaway_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    factory::giveaway_entry::create_entries(db, giveaway.id, 3).await?;
    factory::giveaway_winner::create_winner(db, giveaway.id, 11, 0).await?;

    repo.delete(giveaway.id).await?;

    assert!(repo.get_by_message(100, 500).await?.is_none());

    let entry_count = entity::prelude::GiveawayEntry::find()
        .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway.id))
        .count(db)
        .await?;
    let winner_count = entity::prelude::GiveawayWinner::find()
        .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway.id))
        .count(db)
        .await?;

    assert_eq!(entry_count, 0);
    assert_eq!(winner_count, 0);

    Ok(())
}

/// Tests that deleting a missing giveaway is a no-op.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_missing_giveaway_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiveawayRepository::new(db).delete(999_999).await?;

    Ok(())
}
