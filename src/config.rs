
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use home::home_dir;
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use thiserror::Error;
use toml;

use crate::models::game::GameId;

const PLACEHOLDER_APPLICATION_ID: &str = "your_discord_application_id";
const PLACEHOLDER_API_KEY: &str = "your_steam_api_key";
const PLACEHOLDER_STEAM_ID: &str = "your_steam_id";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Could not parse config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("Could not write config file {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("Invalid setting in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Could not determine home dir")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub discord: Discord,
    pub steam: Steam,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Discord {
    pub application_id: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Steam {
    pub api_key: String,
    pub id: String,
}

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Settings {
    #[serde_inline_default(false)]
    pub autostart: bool,
    #[serde_inline_default(true)]
    pub show_invite_button: bool,
    #[serde_inline_default(true)]
    pub show_all_games: bool,
    /// Empty means no restriction
    #[serde(default)]
    pub allowed_games: Vec<GameId>,
    #[serde_inline_default(15)]
    pub poll_interval_secs: u64,
    #[serde_inline_default(10)]
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            autostart: false,
            show_invite_button: true,
            show_all_games: true,
            allowed_games: vec![],
            poll_interval_secs: 15,
            request_timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.poll_interval_secs == 0 {
            return Err("poll_interval_secs must be at least 1".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Whether presence may be shown for this game, honouring the allow-list
    pub fn is_game_allowed(&self, id: Option<GameId>) -> bool {
        if self.show_all_games || self.allowed_games.is_empty() {
            return true;
        }
        id.map(|id| self.allowed_games.contains(&id)).unwrap_or(false)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read { path: path.to_owned(), source: e })?;

        let conf: Config = toml::from_str(&raw)
            .map_err(|e| ConfigError::Parse { path: path.to_owned(), source: e })?;

        conf.settings
            .validate()
            .map_err(|reason| ConfigError::Invalid { path: path.to_owned(), reason: reason })?;

        Ok(conf)
    }

    fn template() -> Config {
        Config {
            discord: Discord { application_id: PLACEHOLDER_APPLICATION_ID.to_string() },
            steam: Steam {
                api_key: PLACEHOLDER_API_KEY.to_string(),
                id: PLACEHOLDER_STEAM_ID.to_string(),
            },
            settings: Settings::default(),
        }
    }

    /// Write a config with placeholder credentials, for first-run onboarding
    pub fn write_default_template(path: &Path) -> Result<()> {
        let raw = toml::to_string_pretty(&Config::template())?;
        let write_err = |e| ConfigError::Write { path: path.to_owned(), source: e };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, raw).map_err(write_err)
    }

    pub fn has_placeholders(&self) -> bool {
        self.discord.application_id == PLACEHOLDER_APPLICATION_ID
            || self.steam.api_key == PLACEHOLDER_API_KEY
            || self.steam.id == PLACEHOLDER_STEAM_ID
    }
}

/// ~/.steam-presence/config.toml
pub fn default_path() -> Result<PathBuf> {
    let mut f = home_dir().ok_or(ConfigError::NoHomeDir)?;
    f.push(".steam-presence/config.toml");
    Ok(f)
}

/// Resolve an explicitly passed config file, falling back to the default location
pub fn resolve_path(path: Option<&PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.clone()),
        None => default_path(),
    }
}
