//! Daemon connection settings and target resolution.
//!
//! The configured defaults come from a JSON file the daemon installer
//! writes; a `--remote` override replaces the host and optionally the
//! port. The loaded config is passed into the resolver explicitly;
//! there is no process-wide configuration state.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// Port the daemon's RPC listener uses unless configured otherwise.
pub const DEFAULT_RPC_PORT: u16 = 45015;

/// Address contacted when no remote override is given.
pub const DEFAULT_RPC_ADDRESS: &str = "127.0.0.1";

/// Errors from reading the config file.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The file is not valid config JSON.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "cannot read config file: {}", msg),
            ConfigError::Parse(msg) => write!(f, "invalid config file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Persisted daemon connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DaemonConfig {
    /// Address the daemon's RPC listener binds to.
    pub rpc_address: String,
    /// Port of the daemon's RPC listener.
    pub rpc_port: u16,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_address: DEFAULT_RPC_ADDRESS.to_string(),
            rpc_port: DEFAULT_RPC_PORT,
        }
    }
}

impl DaemonConfig {
    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        debug!("loaded daemon config from {}", path.display());
        Ok(config)
    }
}

/// Default config file location (`~/.config/sharemon/daemon.json`).
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("sharemon")
            .join("daemon.json")
    })
}

/// A parsed `--remote` override: hostname with an optional port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    pub host: String,
    pub port: Option<u16>,
}

impl RemoteSpec {
    /// clap value parser for `host[:port]`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty remote address".to_string());
        }
        match s.rsplit_once(':') {
            Some((host, port)) => {
                if host.is_empty() {
                    return Err(format!("missing hostname in '{}'", s));
                }
                let port = port
                    .parse::<u16>()
                    .map_err(|e| format!("invalid port in '{}': {}", s, e))?;
                Ok(Self {
                    host: host.to_string(),
                    port: Some(port),
                })
            }
            None => Ok(Self {
                host: s.to_string(),
                port: None,
            }),
        }
    }
}

/// The host/port the client will actually contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub host: String,
    pub port: u16,
}

impl RemoteTarget {
    /// Resolves the connection target: override host wins, missing
    /// pieces fall back to the configured defaults.
    pub fn resolve(remote: Option<&RemoteSpec>, config: &DaemonConfig) -> Self {
        match remote {
            Some(spec) => Self {
                host: spec.host.clone(),
                port: spec.port.unwrap_or(config.rpc_port),
            },
            None => Self {
                host: config.rpc_address.clone(),
                port: config.rpc_port,
            },
        }
    }
}

impl std::fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
