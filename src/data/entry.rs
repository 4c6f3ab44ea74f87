use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::model::entry::Entry;

pub struct EntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an entry row. Callers (the entry tracker) check for an
    /// existing entry first; the composite unique index is the backstop.
    pub async fn add(&self, giveaway_id: i32, user_id: u64) -> Result<Entry, DbErr> {
        let model = entity::giveaway_entry::ActiveModel {
            giveaway_id: ActiveValue::Set(giveaway_id),
            user_id: ActiveValue::Set(user_id as i64),
            entered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.into())
    }

    /// Removes a user's entry.
    ///
    /// # Returns
    /// - `Ok(true)`: An entry existed and was deleted
    /// - `Ok(false)`: No entry to delete
    pub async fn remove(&self, giveaway_id: i32, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::GiveawayEntry::delete_many()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .filter(entity::giveaway_entry::Column::UserId.eq(user_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user has an entry in a giveaway.
    pub async fn exists(&self, giveaway_id: i32, user_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::GiveawayEntry::find()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .filter(entity::giveaway_entry::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists all entries for a giveaway in entry order.
    pub async fn list(&self, giveaway_id: i32) -> Result<Vec<Entry>, DbErr> {
        let models = entity::prelude::GiveawayEntry::find()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .order_by_asc(entity::giveaway_entry::Column::EnteredAt)
            .order_by_asc(entity::giveaway_entry::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Lists the user ids entered in a giveaway. This is the winner draw
    /// pool.
    pub async fn user_ids(&self, giveaway_id: i32) -> Result<Vec<u64>, DbErr> {
        let ids: Vec<i64> = entity::prelude::GiveawayEntry::find()
            .select_only()
            .column(entity::giveaway_entry::Column::UserId)
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .order_by_asc(entity::giveaway_entry::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().map(|id| id as u64).collect())
    }

    /// Counts entry rows for a giveaway. This is the source of truth the
    /// denormalized `entries_count` converges to.
    pub async fn count(&self, giveaway_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GiveawayEntry::find()
            .filter(entity::giveaway_entry::Column::GiveawayId.eq(giveaway_id))
            .count(self.db)
            .await
    }

    /// Counts how many giveaways in a guild a user has entered.
    pub async fn count_by_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::GiveawayEntry::find()
            .join(
                JoinType::InnerJoin,
                entity::giveaway_entry::Relation::Giveaway.def(),
            )
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway_entry::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await
    }

    /// Counts entries across all giveaways in a guild created after
    /// `since`. Feeds guild statistics.
    pub async fn count_in_guild_since(
        &self,
        guild_id: u64,
        since: chrono::DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::GiveawayEntry::find()
            .join(
                JoinType::InnerJoin,
                entity::giveaway_entry::Relation::Giveaway.def(),
            )
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Atomically increments a giveaway's cached entry counter.
    ///
    /// Expressed as `entries_count = entries_count + 1` at the store so
    /// concurrent entry events never lose an update.
    pub async fn increment_count(&self, giveaway_id: i32) -> Result<(), DbErr> {
        entity::prelude::Giveaway::update_many()
            .col_expr(
                entity::giveaway::Column::EntriesCount,
                Expr::col(entity::giveaway::Column::EntriesCount).add(1),
            )
            .filter(entity::giveaway::Column::Id.eq(giveaway_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Atomically decrements a giveaway's cached entry counter, floored at
    /// zero.
    ///
    /// # Returns
    /// - `Ok(true)`: Counter decremented
    /// - `Ok(false)`: Counter was already zero; callers log the
    ///   inconsistency instead of letting the counter go negative
    pub async fn decrement_count(&self, giveaway_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Giveaway::update_many()
            .col_expr(
                entity::giveaway::Column::EntriesCount,
                Expr::col(entity::giveaway::Column::EntriesCount).sub(1),
            )
            .filter(entity::giveaway::Column::Id.eq(giveaway_id))
            .filter(entity::giveaway::Column::EntriesCount.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
