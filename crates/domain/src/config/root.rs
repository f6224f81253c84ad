use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::probe::ProbeConfig;
use super::resolver::ResolverConfig;
use super::server_list::ServerListConfig;
use super::speed::SpeedConfig;

const LOCAL_CONFIG_FILE: &str = "dns-unlocker.toml";
const CONFIG_DIR: &str = ".config/403unlocker";

/// Main configuration structure for DNS Unlocker
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Candidate and reachable server list locations
    #[serde(default)]
    pub servers: ServerListConfig,

    /// Reachability probe settings
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Speed evaluation settings
    #[serde(default)]
    pub speed: SpeedConfig,

    /// Upstream DNS query settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-unlocker.toml in current directory
    /// 3. ~/.config/403unlocker/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let user_config = default_config_dir().join("config.toml");

        let mut config = if let Some(path) = path {
            Self::from_file(Path::new(path))?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(Path::new(LOCAL_CONFIG_FILE))?
        } else if user_config.exists() {
            Self::from_file(&user_config)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.config_dir {
            self.servers.relocate(&dir);
        }
        if let Some(timeout) = overrides.timeout {
            self.speed.timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed.timeout == 0 {
            return Err(ConfigError::ZeroTimeout("speed.timeout"));
        }

        if self.probe.connect_timeout == 0 {
            return Err(ConfigError::ZeroTimeout("probe.connect_timeout"));
        }

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("resolver.query_timeout_ms"));
        }

        if self.probe.max_in_flight == Some(0) {
            return Err(ConfigError::ZeroWorkerCap);
        }

        if self.servers.candidates_file.trim().is_empty() {
            return Err(ConfigError::EmptyServerListPath("servers.candidates_file"));
        }
        if self.servers.reachable_file.trim().is_empty() {
            return Err(ConfigError::EmptyServerListPath("servers.reachable_file"));
        }

        match url::Url::parse(&self.servers.remote_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::InvalidRemoteUrl(
                    self.servers.remote_url.clone(),
                ))
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub config_dir: Option<String>,
    pub timeout: Option<u64>,
    pub log_level: Option<String>,
}

fn home_dir() -> Option<PathBuf> {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub(crate) fn default_config_dir() -> PathBuf {
    home_dir()
        .map(|home| home.join(CONFIG_DIR))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR))
}
