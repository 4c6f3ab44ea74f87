//! Giveaway winner factory for creating test winner entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a winner row for the given giveaway, user and draw.
///
/// # Arguments
/// - `db` - Database connection
/// - `giveaway_id` - Giveaway the winner belongs to
/// - `user_id` - Winning user's Discord id
/// - `draw` - Draw ordinal (0 for the initial end, 1.. for rerolls)
///
/// # Returns
/// - `Ok(entity::giveaway_winner::Model)` - Created winner entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_winner(
    db: &DatabaseConnection,
    giveaway_id: i32,
    user_id: i64,
    draw: i32,
) -> Result<entity::giveaway_winner::Model, DbErr> {
    entity::giveaway_winner::ActiveModel {
        id: ActiveValue::NotSet,
        giveaway_id: ActiveValue::Set(giveaway_id),
        user_id: ActiveValue::Set(user_id),
        draw: ActiveValue::Set(draw),
        prize: ActiveValue::Set("Test prize".to_string()),
        won_at: ActiveValue::Set(Utc::now()),
        claimed: ActiveValue::Set(false),
        notified: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}
