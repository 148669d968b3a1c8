use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Tool;

/// One tool's guess at a host's operating system.
///
/// Guesses from different tools coexist on a host; they are weighed
/// against each other downstream.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Os {
    pub tool: Tool,
    pub weight: u8,
    pub fingerprint: String,
}

impl Os {
    #[must_use]
    pub fn new(tool: Tool, weight: u8, fingerprint: impl Into<String>) -> Self {
        Self {
            tool,
            weight,
            fingerprint: fingerprint.into(),
        }
    }
}
