use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Note;

/// A port on a host. Only open ports survive extraction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Port {
    pub port: u16,
    /// `tcp`, `udp`, or whatever the scanner reported.
    pub protocol: String,
    /// False until the source explicitly reports the port open.
    pub alive: bool,
    pub service: String,
    pub product: String,
    pub notes: Vec<Note>,
}

impl Port {
    #[must_use]
    pub fn new(port: u16, protocol: impl Into<String>) -> Self {
        Self {
            port,
            protocol: protocol.into(),
            alive: false,
            service: String::new(),
            product: String::new(),
            notes: Vec::new(),
        }
    }
}
