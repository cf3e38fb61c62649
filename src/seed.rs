//! One-shot population of the `player` table with reference data.

use sea_orm::{
    ActiveValue::{NotSet, Set},
    ConnectionTrait, DatabaseBackend, DbErr, EntityTrait, PaginatorTrait, TransactionTrait,
};

use crate::entities::{Position, player};

/// A single reference player.
struct SeedPlayer {
    name: &'static str,
    team: &'static str,
    position: Position,
    rank_overall: i32,
    rank_position: i32,
    projected_points: f64,
}

#[rustfmt::skip]
const PLAYERS: &[SeedPlayer] = &[
    // Quarterbacks
    SeedPlayer { name: "Patrick Mahomes",     team: "KC",  position: Position::Qb,  rank_overall: 1,  rank_position: 1, projected_points: 402.5 },
    SeedPlayer { name: "Josh Allen",          team: "BUF", position: Position::Qb,  rank_overall: 2,  rank_position: 2, projected_points: 398.2 },
    SeedPlayer { name: "Jalen Hurts",         team: "PHI", position: Position::Qb,  rank_overall: 3,  rank_position: 3, projected_points: 387.1 },
    SeedPlayer { name: "Lamar Jackson",       team: "BAL", position: Position::Qb,  rank_overall: 4,  rank_position: 4, projected_points: 376.8 },
    SeedPlayer { name: "Joe Burrow",          team: "CIN", position: Position::Qb,  rank_overall: 5,  rank_position: 5, projected_points: 365.3 },
    // Running backs
    SeedPlayer { name: "Christian McCaffrey", team: "SF",  position: Position::Rb,  rank_overall: 6,  rank_position: 1, projected_points: 340.7 },
    SeedPlayer { name: "Saquon Barkley",      team: "PHI", position: Position::Rb,  rank_overall: 7,  rank_position: 2, projected_points: 325.9 },
    SeedPlayer { name: "Bijan Robinson",      team: "ATL", position: Position::Rb,  rank_overall: 8,  rank_position: 3, projected_points: 318.6 },
    SeedPlayer { name: "Breece Hall",         team: "NYJ", position: Position::Rb,  rank_overall: 9,  rank_position: 4, projected_points: 310.2 },
    SeedPlayer { name: "Jahmyr Gibbs",        team: "DET", position: Position::Rb,  rank_overall: 10, rank_position: 5, projected_points: 302.5 },
    // Wide receivers
    SeedPlayer { name: "CeeDee Lamb",         team: "DAL", position: Position::Wr,  rank_overall: 11, rank_position: 1, projected_points: 295.4 },
    SeedPlayer { name: "Justin Jefferson",    team: "MIN", position: Position::Wr,  rank_overall: 12, rank_position: 2, projected_points: 290.8 },
    SeedPlayer { name: "Tyreek Hill",         team: "MIA", position: Position::Wr,  rank_overall: 13, rank_position: 3, projected_points: 284.6 },
    SeedPlayer { name: "Ja'Marr Chase",       team: "CIN", position: Position::Wr,  rank_overall: 14, rank_position: 4, projected_points: 278.3 },
    SeedPlayer { name: "Amon-Ra St. Brown",   team: "DET", position: Position::Wr,  rank_overall: 15, rank_position: 5, projected_points: 270.1 },
    // Tight ends
    SeedPlayer { name: "Travis Kelce",        team: "KC",  position: Position::Te,  rank_overall: 16, rank_position: 1, projected_points: 262.7 },
    SeedPlayer { name: "Mark Andrews",        team: "BAL", position: Position::Te,  rank_overall: 17, rank_position: 2, projected_points: 254.9 },
    SeedPlayer { name: "T.J. Hockenson",      team: "MIN", position: Position::Te,  rank_overall: 18, rank_position: 3, projected_points: 247.3 },
    SeedPlayer { name: "Dallas Goedert",      team: "PHI", position: Position::Te,  rank_overall: 19, rank_position: 4, projected_points: 240.5 },
    SeedPlayer { name: "George Kittle",       team: "SF",  position: Position::Te,  rank_overall: 20, rank_position: 5, projected_points: 234.8 },
    // Defenses
    SeedPlayer { name: "San Francisco 49ers", team: "SF",  position: Position::Def, rank_overall: 21, rank_position: 1, projected_points: 160.5 },
    SeedPlayer { name: "Dallas Cowboys",      team: "DAL", position: Position::Def, rank_overall: 22, rank_position: 2, projected_points: 155.2 },
    SeedPlayer { name: "Philadelphia Eagles", team: "PHI", position: Position::Def, rank_overall: 23, rank_position: 3, projected_points: 151.8 },
    SeedPlayer { name: "New York Jets",       team: "NYJ", position: Position::Def, rank_overall: 24, rank_position: 4, projected_points: 148.3 },
    SeedPlayer { name: "Buffalo Bills",       team: "BUF", position: Position::Def, rank_overall: 25, rank_position: 5, projected_points: 145.1 },
    // Kickers
    SeedPlayer { name: "Justin Tucker",       team: "BAL", position: Position::K,   rank_overall: 26, rank_position: 1, projected_points: 140.8 },
    SeedPlayer { name: "Harrison Butker",     team: "KC",  position: Position::K,   rank_overall: 27, rank_position: 2, projected_points: 137.4 },
    SeedPlayer { name: "Evan McPherson",      team: "CIN", position: Position::K,   rank_overall: 28, rank_position: 3, projected_points: 134.9 },
    SeedPlayer { name: "Jake Elliott",        team: "PHI", position: Position::K,   rank_overall: 29, rank_position: 4, projected_points: 132.6 },
    SeedPlayer { name: "Tyler Bass",          team: "BUF", position: Position::K,   rank_overall: 30, rank_position: 5, projected_points: 130.2 },
];

/// Result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already had rows; nothing was written.
    Skipped { existing: u64 },
    /// The table was empty and the reference players were inserted.
    Inserted { count: usize },
}

/// Number of reference players written into an empty table.
#[must_use]
pub const fn reference_player_count() -> usize {
    PLAYERS.len()
}

/// Populate the `player` table unless it already holds rows.
///
/// The emptiness check and the inserts share one transaction. On `PostgreSQL` the table is
/// locked first, so two concurrent seeders cannot both observe an empty table; `SQLite`
/// serializes writers on its own.
///
/// # Errors
///
/// Propagates any database error; a failed insert rolls the whole batch back.
pub async fn seed_players<C>(db: &C) -> Result<SeedOutcome, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    if txn.get_database_backend() == DatabaseBackend::Postgres {
        txn.execute_unprepared("LOCK TABLE player IN SHARE ROW EXCLUSIVE MODE").await?;
    }

    let existing = player::Entity::find().count(&txn).await?;
    if existing > 0 {
        txn.rollback().await?;
        tracing::info!(existing, "Player table already populated, skipping seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let rows = PLAYERS.iter().map(|p| player::ActiveModel {
        id: NotSet,
        name: Set(p.name.to_string()),
        team: Set(p.team.to_string()),
        position: Set(p.position),
        rank_overall: Set(p.rank_overall),
        rank_position: Set(p.rank_position),
        projected_points: Set(p.projected_points),
    });

    player::Entity::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(count = PLAYERS.len(), "Seeded reference players");

    Ok(SeedOutcome::Inserted {
        count: PLAYERS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_five_players_per_position() {
        for position in Position::ALL {
            let count = PLAYERS.iter().filter(|p| p.position == position).count();
            assert_eq!(count, 5, "{position}");
        }
        assert_eq!(reference_player_count(), 30);
    }

    #[test]
    fn test_overall_ranks_are_unique_and_contiguous() {
        let ranks: HashSet<i32> = PLAYERS.iter().map(|p| p.rank_overall).collect();
        assert_eq!(ranks, (1..=30).collect());
    }

    #[test]
    fn test_projections_descend_within_position() {
        for position in Position::ALL {
            let points: Vec<f64> = PLAYERS
                .iter()
                .filter(|p| p.position == position)
                .map(|p| p.projected_points)
                .collect();
            assert!(points.windows(2).all(|w| w[0] > w[1]), "{position}");
        }
    }
}
