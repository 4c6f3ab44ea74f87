use super::*;

/// Tests inserting an entry row.
///
/// Expected: Ok with the entry visible through `exists`
#[tokio::test]
async fn adds_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = EntryRepository::new(db);
    let entry = repo.add(giveaway.id, 42).await?;

    assert_eq!(entry.user_id, 42);
    assert!(repo.exists(giveaway.id, 42).await?);
    assert!(!repo.exists(giveaway.id, 43).await?);

    Ok(())
}

/// Tests the foreign key constraint on giveaway_id.
///
/// Expected: Err(DbErr) for a nonexistent giveaway
#[tokio::test]
async fn fails_for_nonexistent_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntryRepository::new(db);
    let result = repo.add(999_999, 42).await;

    assert!(result.is_err());

    Ok(())
}
