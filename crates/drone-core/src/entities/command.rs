use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Tool;

/// Provenance of one extraction: which tool ran, and with what arguments.
///
/// `command` is the literal command line when the tool recorded it, a
/// reconstruction when it did not, and empty when neither was possible.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Command {
    pub tool: Tool,
    pub command: String,
}

impl Command {
    #[must_use]
    pub const fn new(tool: Tool) -> Self {
        Self {
            tool,
            command: String::new(),
        }
    }
}
