//! Server configuration file support.
//!
//! Settings are read from `sleepcalc.toml` when one is found, then
//! `HOST` / `PORT` from the environment override the file.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{CalcError, CalcResult};

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

/// Listen address settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// CORS settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Allow any origin, method and header.
    #[serde(default = "default_true")]
    pub permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            permissive: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(CalcError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| CalcError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| CalcError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from the first `sleepcalc.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when none exists.
    pub fn from_default_location() -> CalcResult<Self> {
        let search_paths = [
            PathBuf::from("sleepcalc.toml"),
            PathBuf::from("backend/sleepcalc.toml"),
            PathBuf::from("../sleepcalc.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `HOST` and `PORT` environment overrides.
    pub fn with_env_overrides(mut self) -> CalcResult<Self> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| CalcError::Config(format!("PORT must be a valid port number, got '{}'", port)))?;
        }
        Ok(self)
    }

    /// Default-location file plus environment overrides.
    pub fn load() -> CalcResult<Self> {
        Self::from_default_location()?.with_env_overrides()
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> CalcResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| CalcError::Config(format!("Invalid bind address: {}", e)))
    }
}
