//! # drone-config
//!
//! Layered configuration loading for lairdrone using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LAIRDRONE_*` prefix, `__` as separator)
//! 2. Project-level `.lairdrone/config.toml`
//! 3. User-level `~/.config/lairdrone/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LAIRDRONE_GENERAL__PROJECT_ID` -> `general.project_id`,
//! `LAIRDRONE_EXTRACT__OS_WEIGHT` -> `extract.os_weight`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use drone_config::DroneConfig;
//!
//! let config = DroneConfig::load_with_dotenv().expect("config");
//! if config.general.is_configured() {
//!     println!("importing into {}", config.general.project_id);
//! }
//! ```

mod error;
mod extract;
mod general;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DroneConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

impl DroneConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns `ConfigError` when a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.extract.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".lairdrone/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LAIRDRONE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lairdrone").join("config.toml"))
    }
}
