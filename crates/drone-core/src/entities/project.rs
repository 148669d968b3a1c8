use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Command, Host};

/// Root of every extraction result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub project_id: String,
    pub commands: Vec<Command>,
    pub hosts: Vec<Host>,
}

impl Project {
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            commands: Vec::new(),
            hosts: Vec::new(),
        }
    }
}
