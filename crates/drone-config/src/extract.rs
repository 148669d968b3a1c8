//! Knobs consumed by the extractors.

use drone_core::constants::{DEFAULT_HTTP_PORT, OS_WEIGHT};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_os_weight() -> u8 {
    OS_WEIGHT
}

const fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Weight given to nmap OS guesses, 0..=100.
    #[serde(default = "default_os_weight")]
    pub os_weight: u8,

    /// Port assumed for dirb targets whose URL implies none.
    #[serde(default = "default_http_port")]
    pub default_http_port: u16,
}

impl ExtractConfig {
    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.os_weight > 100 {
            return Err(ConfigError::InvalidValue {
                field: "extract.os_weight".into(),
                reason: format!("{} exceeds 100", self.os_weight),
            });
        }
        if self.default_http_port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extract.default_http_port".into(),
                reason: "port 0 is not addressable".into(),
            });
        }
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            os_weight: default_os_weight(),
            default_http_port: default_http_port(),
        }
    }
}
