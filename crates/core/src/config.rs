//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store and the
//! HTTP layer. Request handling never reads process environment variables.

use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_PORT};
use crate::{RecipeError, RecipeResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where recipes are persisted, parsed from a connection string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    /// `memory://`: process-local, lost on exit.
    Memory,
    /// `file://<dir>`: sharded JSON documents under `dir`.
    Files(PathBuf),
    /// `mongodb://…` or `mongodb+srv://…`: passed through to the driver untouched.
    Mongo(String),
}

impl FromStr for StoreLocation {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "memory://" || s == "memory" {
            return Ok(Self::Memory);
        }
        if let Some(dir) = s.strip_prefix("file://") {
            if dir.is_empty() {
                return Err(RecipeError::InvalidConfig(
                    "file:// connection string needs a directory".into(),
                ));
            }
            return Ok(Self::Files(PathBuf::from(dir)));
        }
        if s.starts_with("mongodb://") || s.starts_with("mongodb+srv://") {
            return Ok(Self::Mongo(s.to_owned()));
        }
        Err(RecipeError::InvalidConfig(format!(
            "unsupported connection string '{}' (expected memory://, file://<dir> or mongodb://)",
            s
        )))
    }
}

impl fmt::Display for StoreLocation {
    /// Never prints MongoDB credentials.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::Memory => f.write_str("memory://"),
            StoreLocation::Files(dir) => write!(f, "file://{}", dir.display()),
            StoreLocation::Mongo(_) => f.write_str("mongodb://…"),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    host: String,
    port: u16,
    store: StoreLocation,
}

impl CoreConfig {
    pub fn new(host: String, port: u16, store: StoreLocation) -> RecipeResult<Self> {
        if host.trim().is_empty() {
            return Err(RecipeError::InvalidConfig("host cannot be empty".into()));
        }

        Ok(Self { host, port, store })
    }

    /// Builds a configuration from optional raw values, applying defaults for absent or blank
    /// ones. The binary feeds this from `RECIPES_HOST`, `PORT` and `DATABASE_URL`.
    pub fn from_env_values(
        host: Option<String>,
        port: Option<String>,
        database_url: Option<String>,
    ) -> RecipeResult<Self> {
        let host = non_blank(host).unwrap_or_else(|| DEFAULT_HOST.into());
        let port = port_from_env_value(port)?;
        let store = non_blank(database_url)
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
            .parse()?;
        Self::new(host, port, store)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, ready for a TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store(&self) -> &StoreLocation {
        &self.store
    }
}

/// Parse the listen port from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PORT`].
pub fn port_from_env_value(value: Option<String>) -> RecipeResult<u16> {
    match non_blank(value) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .map_err(|e| RecipeError::InvalidConfig(format!("invalid PORT '{}': {}", v, e))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
