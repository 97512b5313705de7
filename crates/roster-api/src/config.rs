//! Configuration for the roster API server.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`ROSTER__SERVER__PORT`, ...)
//! 2. Config file (`roster.toml` by default), `[server]` section
//! 3. Defaults

use std::path::PathBuf;

use serde::Deserialize;

use roster_store::{Fixtures, StoreError};

use crate::error::Result;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (default: "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default: 3000).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `courses.json`, `students.json` and `grades.json`.
    /// The built-in fixture set is used when unset.
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fixtures_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load the `[server]` section from `{file_prefix}.toml` (optional) and
    /// `ROSTER__` environment variables, falling back to defaults.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("ROSTER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match cfg.get::<ServerConfig>("server") {
            Ok(c) => Ok(c),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Read the configured fixture set.
    pub fn fixtures(&self) -> std::result::Result<Fixtures, StoreError> {
        match &self.fixtures_dir {
            Some(dir) => Fixtures::from_dir(dir),
            None => Fixtures::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.fixtures_dir.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let config = ServerConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("roster.toml"),
            "[server]\nport = 4100\nfixtures_dir = \"/srv/fixtures\"\n",
        )
        .unwrap();

        let prefix = dir.path().join("roster");
        let config = ServerConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4100);
        assert_eq!(config.fixtures_dir, Some(PathBuf::from("/srv/fixtures")));
    }

    #[test]
    fn test_builtin_fixtures_when_unset() {
        let fixtures = ServerConfig::default().fixtures().unwrap();
        assert!(!fixtures.courses.is_empty());
    }
}
