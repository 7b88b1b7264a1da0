use std::env;
use std::fmt;
use std::str::FromStr;
use anyhow::{Context, Result, bail};

/// How ids are assigned to newly created items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `id = current store length + 1`. Ids can repeat once items have been deleted.
    #[default]
    Length,
    /// `id = number of items ever created + 1`. Ids are never reused.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdStrategy::Length),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => bail!("expected one of: length, monotonic, got '{}'", other),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Length => f.write_str("length"),
            IdStrategy::Monotonic => f.write_str("monotonic"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let id_strategy = match env::var("ITEM_ID_STRATEGY") {
            Ok(raw) => raw
                .parse::<IdStrategy>()
                .context("ITEM_ID_STRATEGY is invalid")?,
            Err(_) => IdStrategy::default(),
        };

        Ok(Config {
            service_port,
            service_host,
            id_strategy,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Item id strategy: {}", self.id_strategy);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
