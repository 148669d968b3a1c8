//! General drone configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Project id used when the caller does not name one.
    #[serde(default)]
    pub project_id: String,
}

impl GeneralConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!GeneralConfig::default().is_configured());
    }

    #[test]
    fn project_id_makes_it_configured() {
        let config = GeneralConfig {
            project_id: "proj-1".into(),
        };
        assert!(config.is_configured());
    }
}
