use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Read connection string. `DATABASE_READ_URL` wins over `DATABASE_URL`.
    pub database_url: String,
    pub host: String,
    pub port: u16,

    // Pool
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,

    // Runtime environment
    pub environment: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_READ_URL")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| var("DATABASE_URL").filter(|s| !s.trim().is_empty()))
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

        Ok(Self {
            database_url,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: var("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.into())
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT is not a valid port number: {e}"))?,

            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            db_acquire_timeout_secs: var("DB_ACQUIRE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),

            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
        })
    }

    /// Returns true when running with `ENVIRONMENT=production`.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
