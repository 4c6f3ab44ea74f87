use super::*;

/// Tests appending a reroll draw.
///
/// Expected: Ok with the draw ordinal and prize snapshot on every row
#[tokio::test]
async fn records_reroll_draw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = WinnerRepository::new(db);
    let winners = repo.add_draw(giveaway.id, &[11, 22], 1, "Snapshot").await?;

    assert_eq!(winners.len(), 2);
    assert!(winners.iter().all(|w| w.draw == 1));
    assert!(winners.iter().all(|w| w.prize == "Snapshot"));
    assert!(winners.iter().all(|w| !w.notified && !w.claimed));

    Ok(())
}

/// Tests listing winners across draws in draw order.
///
/// Expected: draw-0 rows first, then the reroll rows
#[tokio::test]
async fn lists_winners_in_draw_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_giveaway_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::giveaway::create_giveaway(db).await?;

    let repo = WinnerRepository::new(db);
    repo.add_draw(giveaway.id, &[33], 1, "Prize").await?;
    factory::giveaway_winner::create_winner(db, giveaway.id, 11, 0).await?;

    let listed = repo.list(giveaway.id).await?;

    assert_eq!(
        listed.iter().map(|w| (w.draw, w.user_id)).collect::<Vec<_>>(),
        vec![(0, 11), (1, 33)]
    );

    Ok(())
}
