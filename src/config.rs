// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// SQLite file backing the visitor key-value store.
    pub db_path: String,
    pub max_workers: usize,
    /// Latency of simulated login/registration.
    pub auth_delay: Duration,
    /// Replaces the embedded seed dataset when set.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "dormspace.sqlite3".to_string(),
            max_workers: 8,
            auth_delay: Duration::from_millis(500),
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment (after `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("DORMSPACE_ADDR") {
            cfg.addr = parse_var("DORMSPACE_ADDR", &v)?;
        }
        if let Some(v) = lookup("DORMSPACE_DB") {
            if v.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    var: "DORMSPACE_DB",
                    value: v,
                });
            }
            cfg.db_path = v;
        }
        if let Some(v) = lookup("DORMSPACE_WORKERS") {
            let n: usize = parse_var("DORMSPACE_WORKERS", &v)?;
            if n == 0 {
                return Err(ConfigError::Invalid {
                    var: "DORMSPACE_WORKERS",
                    value: v,
                });
            }
            cfg.max_workers = n;
        }
        if let Some(v) = lookup("DORMSPACE_AUTH_DELAY_MS") {
            let ms: u64 = parse_var("DORMSPACE_AUTH_DELAY_MS", &v)?;
            cfg.auth_delay = Duration::from_millis(ms);
        }
        cfg.seed_file = lookup("DORMSPACE_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(cfg)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
