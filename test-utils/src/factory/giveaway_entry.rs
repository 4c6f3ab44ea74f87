//! Giveaway entry factory for creating test entry entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an entry for the given giveaway and user.
///
/// # Arguments
/// - `db` - Database connection
/// - `giveaway_id` - Giveaway the entry belongs to
/// - `user_id` - Entering user's Discord id
///
/// # Returns
/// - `Ok(entity::giveaway_entry::Model)` - Created entry entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_entry(
    db: &DatabaseConnection,
    giveaway_id: i32,
    user_id: i64,
) -> Result<entity::giveaway_entry::Model, DbErr> {
    entity::giveaway_entry::ActiveModel {
        id: ActiveValue::NotSet,
        giveaway_id: ActiveValue::Set(giveaway_id),
        user_id: ActiveValue::Set(user_id),
        entered_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates entries for `count` distinct users, returning their user ids.
///
/// User ids are unique across the test process so the same giveaway can be
/// populated repeatedly without collisions.
///
/// # Arguments
/// - `db` - Database connection
/// - `giveaway_id` - Giveaway to populate
/// - `count` - Number of entries to create
///
/// # Returns
/// - `Ok(Vec<i64>)` - User ids of the created entries, in entry order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_entries(
    db: &DatabaseConnection,
    giveaway_id: i32,
    count: usize,
) -> Result<Vec<i64>, DbErr> {
    let mut user_ids = Vec::with_capacity(count);

    for _ in 0..count {
        let user_id = 100_000 + next_id() as i64;
        create_entry(db, giveaway_id, user_id).await?;
        user_ids.push(user_id);
    }

    Ok(user_ids)
}
