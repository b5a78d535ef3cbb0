use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::deletion::DEFAULT_LISTING_PATH;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server url \"{0}\": {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("invalid DASHPRUNE_TIMEOUT \"{0}\": expected whole seconds")]
    InvalidTimeout(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk shape of `config.toml`; every key is optional.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub listing_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: Url,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub listing_path: String,
}

impl Config {
    pub fn create(cli_url: Option<String>) -> Result<Self, ConfigError> {
        // 1) Config file (missing file is fine, a broken one is not)
        let file_cfg = load_file_config()?;

        // 2) Server url: CLI > env > file > default
        let raw_url = cli_url
            .or_else(|| env::var("DASHPRUNE_URL").ok())
            .or(file_cfg.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url =
            Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl(raw_url.clone(), e))?;

        // 3) Token: env > file
        let api_token = env::var("DASHPRUNE_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or(file_cfg.api_token);

        // 4) Timeout: env > file > default
        let env_timeout = match env::var("DASHPRUNE_TIMEOUT") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            _ => None,
        };
        let timeout_secs = env_timeout
            .or(file_cfg.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let listing_path = file_cfg
            .listing_path
            .unwrap_or_else(|| DEFAULT_LISTING_PATH.to_string());

        Ok(Config {
            server_url,
            api_token,
            timeout: Duration::from_secs(timeout_secs),
            listing_path,
        })
    }
}

pub fn config_file_path() -> PathBuf {
    // DASHPRUNE_CONFIG_DIR keeps tests away from the real config dir
    let cfg_dir = if let Ok(p) = env::var("DASHPRUNE_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    cfg_dir.join("dashprune").join("config.toml")
}

pub fn load_file_config() -> Result<FileConfig, ConfigError> {
    read_file_config(&config_file_path())
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            warn!(path = %path.display(), "config file unreadable");
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str::<FileConfig>(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
