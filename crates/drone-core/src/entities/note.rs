use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Tool;

/// Free-form finding attached to a port, such as NSE script output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub content: String,
    pub last_modified_by: Tool,
}

impl Note {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Tool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            last_modified_by: author,
        }
    }
}
