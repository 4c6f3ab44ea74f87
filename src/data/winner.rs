use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::winner::Winner;

pub struct WinnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WinnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the winners of one reroll draw.
    ///
    /// Draw-0 rows are written by `GiveawayRepository::mark_ended` inside
    /// the end transaction; this method appends the rows for subsequent
    /// draws.
    ///
    /// # Arguments
    /// - `giveaway_id`: Giveaway ID
    /// - `user_ids`: Users selected in this draw (no duplicates)
    /// - `draw`: Draw ordinal (1.. for rerolls)
    /// - `prize`: Prize snapshot at draw time
    pub async fn add_draw(
        &self,
        giveaway_id: i32,
        user_ids: &[u64],
        draw: i32,
        prize: &str,
    ) -> Result<Vec<Winner>, DbErr> {
        let now = Utc::now();
        let mut winners = Vec::with_capacity(user_ids.len());

        for user_id in user_ids {
            let model = entity::giveaway_winner::ActiveModel {
                giveaway_id: ActiveValue::Set(giveaway_id),
                user_id: ActiveValue::Set(*user_id as i64),
                draw: ActiveValue::Set(draw),
                prize: ActiveValue::Set(prize.to_string()),
                won_at: ActiveValue::Set(now),
                claimed: ActiveValue::Set(false),
                notified: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            winners.push(model.into());
        }

        Ok(winners)
    }

    /// Lists all winner rows for a giveaway across every draw, in draw
    /// order.
    pub async fn list(&self, giveaway_id: i32) -> Result<Vec<Winner>, DbErr> {
        let models = entity::prelude::GiveawayWinner::find()
            .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway_id))
            .order_by_asc(entity::giveaway_winner::Column::Draw)
            .order_by_asc(entity::giveaway_winner::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Lists the distinct user ids that have won a giveaway in any draw.
    /// This is the reroll exclusion set.
    pub async fn user_ids(&self, giveaway_id: i32) -> Result<Vec<u64>, DbErr> {
        let ids: Vec<i64> = entity::prelude::GiveawayWinner::find()
            .select_only()
            .column(entity::giveaway_winner::Column::UserId)
            .distinct()
            .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().map(|id| id as u64).collect())
    }

    /// Gets the highest draw ordinal recorded for a giveaway.
    ///
    /// # Returns
    /// - `Ok(Some(draw))`: At least one draw exists
    /// - `Ok(None)`: No winners recorded yet
    pub async fn latest_draw(&self, giveaway_id: i32) -> Result<Option<i32>, DbErr> {
        let model = entity::prelude::GiveawayWinner::find()
            .filter(entity::giveaway_winner::Column::GiveawayId.eq(giveaway_id))
            .order_by_desc(entity::giveaway_winner::Column::Draw)
            .one(self.db)
            .await?;

        Ok(model.map(|m| m.draw))
    }

    /// Marks a winner row as directly notified.
    pub async fn mark_notified(&self, winner_id: i32) -> Result<(), DbErr> {
        let model = entity::prelude::GiveawayWinner::find_by_id(winner_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Winner {} not found",
                winner_id
            )))?;

        let mut active_model: entity::giveaway_winner::ActiveModel = model.into();
        active_model.notified = ActiveValue::Set(true);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Marks a winner row as having claimed the prize.
    pub async fn mark_claimed(&self, winner_id: i32) -> Result<(), DbErr> {
        let model = entity::prelude::GiveawayWinner::find_by_id(winner_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Winner {} not found",
                winner_id
            )))?;

        let mut active_model: entity::giveaway_winner::ActiveModel = model.into();
        active_model.claimed = ActiveValue::Set(true);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Counts wins for a user across all giveaways in a guild.
    pub async fn count_by_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::GiveawayWinner::find()
            .join(
                JoinType::InnerJoin,
                entity::giveaway_winner::Relation::Giveaway.def(),
            )
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway_winner::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await
    }
}
