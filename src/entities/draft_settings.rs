use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Format and roster-slot configuration for a draft.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "draft_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub draft_type: String,
    pub num_teams: i32,
    pub draft_position: Option<i32>,
    /// 0 or 1; see [`Model::random_position`].
    pub is_random_position: i32,
    pub qb_count: i32,
    pub rb_count: i32,
    pub wr_count: i32,
    pub te_count: i32,
    pub flex_count: i32,
    pub def_count: i32,
    pub k_count: i32,
    pub bench_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the user's draft slot is assigned at random.
    #[must_use]
    pub const fn random_position(&self) -> bool {
        self.is_random_position != 0
    }

    /// Total roster size: every starting slot plus the bench.
    #[must_use]
    pub const fn roster_size(&self) -> i32 {
        self.qb_count
            + self.rb_count
            + self.wr_count
            + self.te_count
            + self.flex_count
            + self.def_count
            + self.k_count
            + self.bench_count
    }
}
