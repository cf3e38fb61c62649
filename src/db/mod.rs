use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::PoolSettings;

/// Open the connection pool.
///
/// Every query acquires a pooled connection for its duration, so `pool.acquire_timeout`
/// bounds how long a request can wait on a saturated database and `pool.connect_timeout`
/// how long it can wait on an unreachable one.
///
/// # Errors
///
/// Returns an error if the pool cannot be opened within the connect timeout.
pub async fn connect(
    database_url: &str,
    pool: &PoolSettings,
) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .connect_timeout(pool.connect_timeout)
        .acquire_timeout(pool.acquire_timeout)
        .sqlx_logging(false);

    tracing::debug!(
        max_connections = pool.max_connections,
        min_connections = pool.min_connections,
        acquire_timeout_ms = pool.acquire_timeout.as_millis(),
        "Opening database pool"
    );

    Ok(Database::connect(opts).await?)
}
