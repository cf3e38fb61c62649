use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pool: PoolSettings,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub frontend_url: String,
    pub seed_on_startup: bool,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Connection parameters used when `DATABASE_URL` is not given directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseParts {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub name: String,
}

impl DatabaseParts {
    /// Compose a `PostgreSQL` connection string.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Connection pool bounds. The timeouts cap how long a request waits on the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from
    /// `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`, each of which has a
    /// local-development default.
    ///
    /// Pool bounds: `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`, `DB_CONNECT_TIMEOUT_SECS`,
    /// `DB_ACQUIRE_TIMEOUT_SECS`.
    ///
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT` (or `PORT`), `ENVIRONMENT`,
    /// `LOG_LEVEL`, `FRONTEND_URL`, `SEED_ON_STARTUP`.
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_HOST`, `SERVER_PORT` / `PORT`, `SEED_ON_STARTUP` or a
    /// pool setting contain invalid values, or if the pool minimum exceeds its maximum.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            DatabaseParts {
                user: var_or("DB_USER", "admin"),
                password: var_or("DB_PASSWORD", "admin"),
                host: var_or("DB_HOST", "localhost"),
                port: var_or("DB_PORT", "5432"),
                name: var_or("DB_NAME", "nfl_sim"),
            }
            .url()
        });

        let pool = pool_settings(&lookup)?;

        let environment = match var_or("ENVIRONMENT", "development").as_str() {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let server_port = lookup("PORT")
            .or_else(|| lookup("SERVER_PORT"))
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = var_or("SERVER_HOST", default_host)
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = var_or("LOG_LEVEL", "info");
        let frontend_url = var_or("FRONTEND_URL", "http://localhost:3000");

        let seed_on_startup = match var_or("SEED_ON_STARTUP", "true").to_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            other => anyhow::bail!("SEED_ON_STARTUP must be a boolean, got {other:?}"),
        };

        Ok(Self {
            database_url,
            pool,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
            seed_on_startup,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn pool_settings<F>(lookup: &F) -> anyhow::Result<PoolSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let number = |key: &str, default: u64| -> anyhow::Result<u64> {
        lookup(key).map_or(Ok(default), |raw| {
            raw.parse::<u64>()
                .map_err(|_| anyhow::anyhow!("{key} must be a non-negative integer, got {raw:?}"))
        })
    };

    let defaults = PoolSettings::default();
    let max_connections = u32::try_from(number(
        "DB_MAX_CONNECTIONS",
        u64::from(defaults.max_connections),
    )?)?;
    let min_connections = u32::try_from(number(
        "DB_MIN_CONNECTIONS",
        u64::from(defaults.min_connections),
    )?)?;

    if max_connections == 0 {
        anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
    }
    if min_connections > max_connections {
        anyhow::bail!(
            "DB_MIN_CONNECTIONS ({min_connections}) exceeds DB_MAX_CONNECTIONS ({max_connections})"
        );
    }

    Ok(PoolSettings {
        max_connections,
        min_connections,
        connect_timeout: Duration::from_secs(number(
            "DB_CONNECT_TIMEOUT_SECS",
            defaults.connect_timeout.as_secs(),
        )?),
        acquire_timeout: Duration::from_secs(number(
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )?),
    })
}
