use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::model::giveaway::{
    CreateGiveawayParams, Giveaway, GiveawayStatus, UpdateGiveawayParams,
};

pub struct GiveawayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new giveaway in Active status.
    ///
    /// # Arguments
    /// - `params`: Creation parameters including the already-posted
    ///   announcement message id
    ///
    /// # Returns
    /// - `Ok(Giveaway)`: The created giveaway
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateGiveawayParams) -> Result<Giveaway, DbErr> {
        let required_role_ids = if params.requirements.required_roles.is_empty() {
            None
        } else {
            serde_json::to_string(&params.requirements.required_roles).ok()
        };

        let model = entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id as i64),
            channel_id: ActiveValue::Set(params.channel_id as i64),
            message_id: ActiveValue::Set(params.message_id as i64),
            host_id: ActiveValue::Set(params.host_id as i64),
            prize: ActiveValue::Set(params.prize),
            description: ActiveValue::Set(params.description),
            winners_count: ActiveValue::Set(params.winners_count),
            status: ActiveValue::Set(GiveawayStatus::Active),
            entries_count: ActiveValue::Set(0),
            min_level: ActiveValue::Set(params.requirements.min_level.map(|l| l as i32)),
            required_role_ids: ActiveValue::Set(required_role_ids),
            min_account_age_days: ActiveValue::Set(
                params.requirements.min_account_age_days.map(|d| d as i32),
            ),
            min_membership_age_days: ActiveValue::Set(
                params.requirements.min_membership_age_days.map(|d| d as i32),
            ),
            allow_host_entry: ActiveValue::Set(params.settings.allow_host_entry),
            ping_winners: ActiveValue::Set(params.settings.ping_winners),
            dm_winners: ActiveValue::Set(params.settings.dm_winners),
            created_at: ActiveValue::Set(Utc::now()),
            end_time: ActiveValue::Set(params.end_time),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.into())
    }

    /// Gets a giveaway by its announcement message.
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))`: The giveaway
    /// - `Ok(None)`: No giveaway for this (guild, message) pair
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_message(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Option<Giveaway>, DbErr> {
        let model = entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway::Column::MessageId.eq(message_id as i64))
            .one(self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    /// Lists all active giveaways for a guild, soonest-ending first.
    pub async fn list_active(&self, guild_id: u64) -> Result<Vec<Giveaway>, DbErr> {
        let models = entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway::Column::Status.eq(GiveawayStatus::Active))
            .order_by_asc(entity::giveaway::Column::EndTime)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Lists giveaways for a guild, newest first, optionally filtered by
    /// status.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `status`: Optional status filter
    /// - `limit`: Maximum number of giveaways to return
    pub async fn list_by_guild(
        &self,
        guild_id: u64,
        status: Option<GiveawayStatus>,
        limit: u64,
    ) -> Result<Vec<Giveaway>, DbErr> {
        let mut query = entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64));

        if let Some(status) = status {
            query = query.filter(entity::giveaway::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(entity::giveaway::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Lists active giveaways across all guilds whose end time has passed.
    ///
    /// This is the expiry scheduler's poll query.
    pub async fn list_due(&self, now: DateTime<Utc>) -> Result<Vec<Giveaway>, DbErr> {
        let models = entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::Status.eq(GiveawayStatus::Active))
            .filter(entity::giveaway::Column::EndTime.lte(now))
            .order_by_asc(entity::giveaway::Column::EndTime)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Applies a partial update to a giveaway's prize, description, or end
    /// time. Status and counters are never touched here; callers enforce the
    /// Active-only rule before calling.
    ///
    /// # Returns
    /// - `Ok(Giveaway)`: The updated giveaway
    /// - `Err(DbErr::RecordNotFound)`: No such giveaway
    pub async fn update_fields(
        &self,
        id: i32,
        params: UpdateGiveawayParams,
    ) -> Result<Giveaway, DbErr> {
        let model = entity::prelude::Giveaway::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Giveaway {} not found", id)))?;

        let mut active_model: entity::giveaway::ActiveModel = model.into();

        if let Some(prize) = params.prize {
            active_model.prize = ActiveValue::Set(prize);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(end_time) = params.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }

        let updated = active_model.update(self.db).await?;

        Ok(updated.into())
    }

    /// Transitions a giveaway to Ended and records the initial draw.
    ///
    /// The status change and the draw-0 winner rows are written in one
    /// transaction, guarded on the current status still being Active. A
    /// concurrent end (or a cancel that won the race) makes the guard fail
    /// and nothing is written.
    ///
    /// # Arguments
    /// - `id`: Giveaway ID
    /// - `prize`: Prize snapshot copied onto each winner row
    /// - `winner_ids`: Users selected in the initial draw (may be empty)
    ///
    /// # Returns
    /// - `Ok(true)`: The giveaway transitioned to Ended
    /// - `Ok(false)`: The giveaway was no longer Active; nothing written
    /// - `Err(DbErr)`: Database error (transaction rolled back)
    pub async fn mark_ended(
        &self,
        id: i32,
        prize: &str,
        winner_ids: &[u64],
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let update = entity::prelude::Giveaway::update_many()
            .set(entity::giveaway::ActiveModel {
                status: ActiveValue::Set(GiveawayStatus::Ended),
                ended_at: ActiveValue::Set(Some(now)),
                ..Default::default()
            })
            .filter(entity::giveaway::Column::Id.eq(id))
            .filter(entity::giveaway::Column::Status.eq(GiveawayStatus::Active))
            .exec(&txn)
            .await?;

        if update.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        if !winner_ids.is_empty() {
            let rows = winner_ids
                .iter()
                .map(|user_id| entity::giveaway_winner::ActiveModel {
                    giveaway_id: ActiveValue::Set(id),
                    user_id: ActiveValue::Set(*user_id as i64),
                    draw: ActiveValue::Set(0),
                    prize: ActiveValue::Set(prize.to_string()),
                    won_at: ActiveValue::Set(now),
                    claimed: ActiveValue::Set(false),
                    notified: ActiveValue::Set(false),
                    ..Default::default()
                });

            entity::prelude::GiveawayWinner::insert_many(rows)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Transitions a giveaway to Cancelled, guarded on Active status.
    ///
    /// # Returns
    /// - `Ok(true)`: The giveaway transitioned to Cancelled
    /// - `Ok(false)`: The giveaway was no longer Active
    pub async fn mark_cancelled(&self, id: i32) -> Result<bool, DbErr> {
        let update = entity::prelude::Giveaway::update_many()
            .set(entity::giveaway::ActiveModel {
                status: ActiveValue::Set(GiveawayStatus::Cancelled),
                ended_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::giveaway::Column::Id.eq(id))
            .filter(entity::giveaway::Column::Status.eq(GiveawayStatus::Active))
            .exec(self.db)
            .await?;

        Ok(update.rows_affected > 0)
    }

    /// Deletes a giveaway. Entry and winner rows are removed by the foreign
    /// key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Giveaway::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts giveaways for a guild created after `since`, optionally
    /// filtered by status.
    pub async fn count_since(
        &self,
        guild_id: u64,
        since: DateTime<Utc>,
        status: Option<GiveawayStatus>,
    ) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        let mut query = entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway::Column::CreatedAt.gte(since));

        if let Some(status) = status {
            query = query.filter(entity::giveaway::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    /// Counts giveaways hosted by a user in a guild.
    pub async fn count_hosted_by_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway::Column::HostId.eq(user_id as i64))
            .count(self.db)
            .await
    }
}
