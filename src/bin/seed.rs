//! Create the schema and load the reference players, then exit.

use migration::{Migrator, MigratorTrait};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use draft_sim_api::config::Config;
use draft_sim_api::seed::{self, SeedOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let level = &config.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("draft_sim_api={level},seed={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = draft_sim_api::db::connect(&config.database_url, &config.pool).await?;
    Migrator::up(&db, None).await?;

    match seed::seed_players(&db).await? {
        SeedOutcome::Skipped { existing } => {
            tracing::info!("Database already contains {existing} players, nothing to do");
        }
        SeedOutcome::Inserted { count } => {
            tracing::info!("Added {count} players to the database");
        }
    }

    Ok(())
}
