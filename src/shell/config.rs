use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub sweep_interval: Duration,
    pub relay_interval: Duration,
    pub outbox_batch_size: usize,
    pub outbox_max_attempts: u32,
    pub commit_max_retries: u32,
    pub outbox_topic: String,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the process environment after merging an optional `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse(&lookup, "BIND_ADDR", "0.0.0.0:8080")?,
            sweep_interval: Duration::from_secs(parse_positive(
                &lookup,
                "SWEEP_INTERVAL_SECS",
                "60",
            )?),
            relay_interval: Duration::from_millis(parse_positive(
                &lookup,
                "OUTBOX_RELAY_INTERVAL_MS",
                "500",
            )?),
            outbox_batch_size: parse_positive(&lookup, "OUTBOX_BATCH_SIZE", "100")?,
            outbox_max_attempts: parse_positive(&lookup, "OUTBOX_MAX_ATTEMPTS", "5")?,
            commit_max_retries: parse(&lookup, "COMMIT_MAX_RETRIES", "5")?,
            outbox_topic: lookup("OUTBOX_TOPIC").unwrap_or_else(|| "bookings.v1".to_string()),
            seed_path: lookup("SEED_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

/// Timer periods and batch limits must be non-zero.
fn parse_positive<T: FromStr + PartialEq + Default>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}
