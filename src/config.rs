//! Configuration management and validation.
//!
//! Provides the source locator handed to the record parser and the
//! serving parameters (bind address, static frontend, CORS origins).

use crate::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_SOURCE_PATH};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the tabular position source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocator(PathBuf);

impl SourceLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for SourceLocator {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH)
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for SourceLocator {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Global configuration for the buoy tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Position CSV read on every request
    pub source: SourceLocator,

    /// Address the HTTP server binds to
    pub bind_address: String,

    /// Directory with a built frontend, served for non-API paths
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origins (empty = any origin)
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceLocator::default(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: None,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Set the position source
    pub fn with_source(mut self, source: impl Into<SourceLocator>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the bind address
    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.bind_address = bind_address.into();
        self
    }

    /// Serve a static frontend from the given directory
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }

    /// Restrict CORS to the given origins
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Parse the bind address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            Error::configuration(format!(
                "Invalid bind address '{}': {}",
                self.bind_address, e
            ))
        })
    }

    /// Validate configuration for serving
    ///
    /// The source file itself is not checked here: it is opened per request
    /// and a missing file surfaces as `SourceUnavailable` at that point.
    pub fn validate(&self) -> Result<()> {
        if self.source.path().as_os_str().is_empty() {
            return Err(Error::configuration("Source path must not be empty"));
        }

        self.socket_addr()?;

        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Static directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        for origin in &self.cors_origins {
            if origin.trim().is_empty() {
                return Err(Error::configuration("CORS origin must not be empty"));
            }
        }

        debug!(
            "Configuration validated: source={}, bind={}",
            self.source, self.bind_address
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.path(), Path::new("positions.csv"));
        assert_eq!(config.bind_address, "127.0.0.1:5000");
        assert!(config.static_dir.is_none());
        assert!(config.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default()
            .with_source("/data/buoy.csv")
            .with_bind_address("0.0.0.0:8080")
            .with_static_dir(temp_dir.path())
            .with_cors_origins(vec!["http://localhost:5173".to_string()]);

        assert_eq!(config.source.to_string(), "/data/buoy.csv");
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = Config::default().with_bind_address("not-an-address");
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_missing_static_dir() {
        let config = Config::default().with_static_dir("/definitely/not/here");
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_empty_source_rejected() {
        let config = Config::default().with_source("");
        assert!(config.validate().is_err());
    }
}
