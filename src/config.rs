use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },

    #[error("Cannot read seed file {}: {source}", path.display())]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {} is not a JSON array: {source}", path.display())]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed file {}, entry {index}: {message}", path.display())]
    SeedEntry {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Reject order lines whose `dishId` is not a stored dish.
    pub verify_dish_references: bool,
    pub dishes_seed: Option<PathBuf>,
    pub orders_seed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            verify_dish_references: false,
            dishes_seed: None,
            orders_seed: None,
        }
    }
}

impl Config {
    /// Reads the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let verify_dish_references = match lookup("VERIFY_DISH_REFERENCES") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "VERIFY_DISH_REFERENCES",
                value: raw,
            })?,
            None => defaults.verify_dish_references,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            verify_dish_references,
            dishes_seed: lookup("DISHES_SEED").map(PathBuf::from),
            orders_seed: lookup("ORDERS_SEED").map(PathBuf::from),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
