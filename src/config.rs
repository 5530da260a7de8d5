use crate::error::{Error, Result};
use crate::utils::crypto::HashScheme;
use std::env;
use std::time::Duration;

const DEFAULT_MAX_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub hash_scheme: HashScheme,
    pub echo_password: bool,
}

impl Config {
    /// Reads the process environment; `.env` must already be loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hash_scheme = match get_env_or(&lookup, "PASSWORD_HASH_SCHEME", "bcrypt")?.as_str() {
            "bcrypt" => HashScheme::Bcrypt {
                cost: get_env_parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            },
            "argon2" => HashScheme::Argon2,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for PASSWORD_HASH_SCHEME: {} (expected bcrypt or argon2)",
                    other
                )))
            }
        };
        if let HashScheme::Bcrypt { cost } = hash_scheme {
            if !(4..=31).contains(&cost) {
                return Err(Error::Config(format!(
                    "Invalid value for BCRYPT_COST: {} (expected 4-31)",
                    cost
                )));
            }
        }

        let max_connections =
            get_env_parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(Error::Config(
                "Invalid value for DB_MAX_CONNECTIONS: must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url: get_env(&lookup, "DATABASE_URL")?,
            max_connections,
            acquire_timeout: Duration::from_secs(get_env_parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
            hash_scheme,
            echo_password: get_env_parse_or(&lookup, "ECHO_PASSWORD", true)?,
        })
    }
}

/// Log settings, read before anything else so errors can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let json = match get_env_or(&lookup, "LOG_FORMAT", "text")?.as_str() {
            "text" => false,
            "json" => true,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for LOG_FORMAT: {} (expected text or json)",
                    other
                )))
            }
        };

        Ok(Self {
            filter: get_env_or(&lookup, "RUST_LOG", "info")?,
            json,
        })
    }
}

fn get_env<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or<F>(lookup: &F, name: &str, default: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(lookup(name)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string()))
}

fn get_env_parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}
