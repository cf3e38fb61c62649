use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::player;

/// One selection in a draft. Nothing prevents two picks in the same draft
/// from naming the same player.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "draft_pick")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub draft_id: i32,
    pub round_num: i32,
    pub pick_num: i32,
    pub team_num: i32,
    pub player_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Fetch the picked player by id.
    ///
    /// Returns `None` when the pick has no player or the player row is gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup query fails.
    pub async fn find_player<C>(&self, db: &C) -> Result<Option<player::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        match self.player_id {
            Some(id) => player::Entity::find_by_id(id).one(db).await,
            None => Ok(None),
        }
    }
}
