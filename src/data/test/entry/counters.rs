use super::*;
use sea_orm::EntityTrait;

async fn entries_count(db: &sea_orm::DatabaseConnection, id: i32) -> Result<i32, DbErr> {
    Ok(entity::prelude::Giveaway::find_by_id(id)
        .one(db)
        .await?
        .map(|g| g.entries_count)
        .unwrap_or(-1))
}

/// Tests the atomic counter increment.
///
/// Expected: counter reflects every increment
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = EntryRepository::new(db);
    repo.increment_count(giveaway.id).await?;
    repo.increment_count(giveaway.id).await?;

    assert_eq!(entries_count(db, giveaway.id).await?, 2);

    Ok(())
}

/// Tests the floored decrement.
///
/// A decrement at zero must not apply and must report the floor; the
/// counter never goes negative.
///
/// Expected: Ok(true) down to zero, then Ok(false) with counter at zero
#[tokio::test]
async fn decrement_floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = EntryRepository::new(db);
    repo.increment_count(giveaway.id).await?;

    assert!(repo.decrement_count(giveaway.id).await?);
    assert!(!repo.decrement_count(giveaway.id).await?);
    assert_eq!(entries_count(db, giveaway.id).await?, 0);

    Ok(())
}

/// Tests that interleaved adjustments converge on the row count.
///
/// Expected: counter equals live entries after a mixed sequence
#[tokio::test]
async fn counter_converges_with_row_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;
    let repo = EntryRepository::new(db);

    let users = factory::giveaway_entry::create_entries(db, giveaway.id, 3).await?;
    for _ in 0..3 {
        repo.increment_count(giveaway.id).await?;
    }

    repo.remove(giveaway.id, users[1] as u64).await?;
    repo.decrement_count(giveaway.id).await?;

    assert_eq!(
        entries_count(db, giveaway.id).await? as u64,
        repo.count(giveaway.id).await?
    );

    Ok(())
}
