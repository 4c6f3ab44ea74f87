use super::*;

/// Tests creating a giveaway with no requirements.
///
/// Verifies that the repository stores the giveaway in Active status with a
/// zeroed entry counter and no requirement fields set.
///
/// Expected: Ok with giveaway created
#[tokio::test]
async fn creates_giveaway_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(params(100, 500)).await?;

    assert_eq!(giveaway.guild_id, 100);
    assert_eq!(giveaway.message_id, 500);
    assert_eq!(giveaway.status, GiveawayStatus::Active);
    assert_eq!(giveaway.entries_count, 0);
    assert!(giveaway.requirements.is_empty());
    assert!(giveaway.ended_at.is_none());

    Ok(())
}

/// Tests that requirements round-trip through storage.
///
/// Verifies that the role list survives JSON serialization and the numeric
/// criteria come back as configured.
///
/// Expected: Ok with all requirement fields preserved
#[tokio::test]
async fn preserves_requirements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut create = params(100, 500);
    create.requirements = Requirements {
        min_level: Some(5),
        required_roles: vec![111, 222],
        min_account_age_days: Some(30),
        min_membership_age_days: Some(7),
    };

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(create).await?;

    assert_eq!(giveaway.requirements.min_level, Some(5));
    assert_eq!(giveaway.requirements.required_roles, vec![111, 222]);
    assert_eq!(giveaway.requirements.min_account_age_days, Some(30));
    assert_eq!(giveaway.requirements.min_membership_age_days, Some(7));

    Ok(())
}

/// Tests that non-default settings flags are stored as given.
///
/// Expected: Ok with settings preserved
#[tokio::test]
async fn preserves_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut create = params(100, 500);
    create.settings = GiveawaySettings {
        allow_host_entry: true,
        ping_winners: false,
        dm_winners: false,
    };

    let repo = GiveawayRepository::new(db);
    let giveaway = repo.create(create).await?;

    assert!(giveaway.settings.allow_host_entry);
    assert!(!giveaway.settings.ping_winners);
    assert!(!giveaway.settings.dm_winners);

    Ok(())
}
