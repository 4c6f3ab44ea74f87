use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A user selected in a specific draw of a giveaway.
///
/// `draw` is 0 for the initial end draw and increments for each reroll. A
/// user may win across distinct draws but never twice within the same draw.
/// `prize` is snapshotted at draw time so later prize edits do not rewrite
/// history.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "giveaway_winner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub giveaway_id: i32,
    pub user_id: i64,
    pub draw: i32,
    pub prize: String,
    pub won_at: DateTime<Utc>,
    pub claimed: bool,
    pub notified: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::giveaway::Entity",
        from = "Column::GiveawayId",
        to = "super::giveaway::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Giveaway,
}

impl Related<super::giveaway::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Giveaway.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
