use super::*;

/// Tests a partial update touching only the prize.
///
/// Expected: Ok with prize changed and the other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    let updated = repo
        .update_fields(
            giveaway.id,
            UpdateGiveawayParams {
                prize: Some("Better prize".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.prize, "Better prize");
    assert_eq!(updated.end_time, giveaway.end_time);
    assert_eq!(updated.description, giveaway.description);

    Ok(())
}

/// Tests clearing the description with the `Some(None)` form.
///
/// Expected: Ok with description removed
#[tokio::test]
async fn clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut create = params(100, 500);
    create.description = Some("Old description".to_string());

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(create).await?;

    let updated = repo
        .update_fields(
            giveaway.id,
            UpdateGiveawayParams {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.description.is_none());

    Ok(())
}

/// Tests extending the end time.
///
/// Expected: Ok with the new end time stored
#[tokio::test]
async fn updates_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    let new_end = Utc::now() + Duration::hours(6);
    let updated = repo
        .update_fields(
            giveaway.id,
            UpdateGiveawayParams {
                end_time: Some(new_end),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.end_time, new_end);

    Ok(())
}

/// Tests updating a giveaway that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let result = repo
        .update_fields(
            999_999,
            UpdateGiveawayParams {
                prize: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
