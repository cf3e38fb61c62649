use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// A draftable player. Reference data: written once by the seeder, read-only afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub rank_overall: i32,
    pub rank_position: i32,
    #[sea_orm(column_type = "Double")]
    pub projected_points: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::draft_pick::Entity")]
    DraftPick,
}

impl Related<super::draft_pick::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPick.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
