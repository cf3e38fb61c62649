use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Deserialize;

use crate::{
    entities::{Position, player},
    error::AppError,
    state::AppState,
};

/// Player lookup router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/players", get(list_players))
        .route("/positions", get(list_positions))
}

#[derive(Debug, Deserialize)]
struct PlayersQuery {
    position: Option<String>,
}

/// `GET /players` — List players, optionally restricted to one position.
///
/// An empty `position` is treated as absent. A value that is not a known position code
/// cannot match any row, so it yields an empty list rather than an error.
async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<PlayersQuery>,
) -> Result<Json<Vec<player::Model>>, AppError> {
    let mut find = player::Entity::find();

    if let Some(raw) = query.position.as_deref().filter(|p| !p.is_empty()) {
        let Some(position) = Position::from_code(raw) else {
            tracing::debug!(position = raw, "Unknown position filter");
            return Ok(Json(Vec::new()));
        };
        find = find.filter(player::Column::Position.eq(position));
    }

    let players = find
        .order_by_asc(player::Column::RankOverall)
        .order_by_asc(player::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(players))
}

/// `GET /positions` — Distinct positions present in the player table.
async fn list_positions(State(state): State<AppState>) -> Result<Json<Vec<Position>>, AppError> {
    let mut positions: Vec<Position> = player::Entity::find()
        .select_only()
        .column(player::Column::Position)
        .distinct()
        .into_tuple()
        .all(&state.db)
        .await?;

    positions.sort_unstable();

    Ok(Json(positions))
}
