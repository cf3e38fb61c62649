mod common;

use draft_sim_api::entities::{Position, player};
use draft_sim_api::seed::{self, SeedOutcome};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

#[tokio::test]
async fn seeding_empty_table_inserts_reference_players() {
    let db = common::migrated_db().await;

    let outcome = seed::seed_players(&db).await.ok();

    assert_eq!(outcome, Some(SeedOutcome::Inserted { count: 30 }));
    assert_eq!(player::Entity::find().count(&db).await.unwrap_or_default(), 30);
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let db = common::migrated_db().await;

    seed::seed_players(&db).await.ok();
    let second = seed::seed_players(&db).await.ok();

    assert_eq!(second, Some(SeedOutcome::Skipped { existing: 30 }));
    assert_eq!(player::Entity::find().count(&db).await.unwrap_or_default(), 30);
}

#[tokio::test]
async fn seeding_skips_any_populated_table() {
    let db = common::migrated_db().await;

    player::Entity::insert(player::ActiveModel {
        name: Set("Practice Squad".to_string()),
        team: Set("FA".to_string()),
        position: Set(Position::K),
        rank_overall: Set(99),
        rank_position: Set(99),
        projected_points: Set(1.0),
        ..Default::default()
    })
    .exec(&db)
    .await
    .ok();

    let outcome = seed::seed_players(&db).await.ok();

    assert_eq!(outcome, Some(SeedOutcome::Skipped { existing: 1 }));
}

#[tokio::test]
async fn seeded_rows_round_trip_positions() {
    let db = common::seeded_db().await;

    for position in Position::ALL {
        let rows = player::Entity::find()
            .filter(player::Column::Position.eq(position))
            .all(&db)
            .await
            .unwrap_or_default();
        assert_eq!(rows.len(), 5, "{position}");
        assert!(rows.iter().all(|p| p.position == position));
    }
}

#[tokio::test]
async fn seeding_without_schema_fails() {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    assert!(seed::seed_players(&db).await.is_err());
}

#[tokio::test]
async fn concurrent_seeders_insert_once() {
    use draft_sim_api::config::PoolSettings;
    use migration::{Migrator, MigratorTrait};

    // One pooled connection: whichever seeder opens its transaction first holds it.
    let pool = PoolSettings {
        max_connections: 1,
        min_connections: 1,
        ..PoolSettings::default()
    };
    let db = draft_sim_api::db::connect("sqlite::memory:", &pool)
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();

    let (first, second) = tokio::join!(seed::seed_players(&db), seed::seed_players(&db));
    let mut outcomes = vec![first.ok(), second.ok()];
    outcomes.sort_by_key(|o| matches!(o, Some(SeedOutcome::Skipped { .. })));

    assert_eq!(
        outcomes,
        vec![
            Some(SeedOutcome::Inserted { count: 30 }),
            Some(SeedOutcome::Skipped { existing: 30 }),
        ]
    );
    assert_eq!(player::Entity::find().count(&db).await.unwrap_or_default(), 30);
}
