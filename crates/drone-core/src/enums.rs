//! Tool identifiers for provenance fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scanner that produced a command, OS guess, or note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Nmap,
    Dirb,
}

impl Tool {
    /// Return the string representation used in stored documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nmap => "nmap",
            Self::Dirb => "dirb",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        for tool in [Tool::Nmap, Tool::Dirb] {
            let json = serde_json::to_string(&tool).unwrap();
            assert_eq!(json, format!("\"{tool}\""));
        }
    }
}
