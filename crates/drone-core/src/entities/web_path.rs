use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::net::clean_path;

/// A path discovered on a web server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WebPath {
    /// Path with the scanned base URL removed.
    pub path: String,
    /// `path` with every non-alphanumeric character replaced by `_`.
    /// Lossy: distinct paths can share a `path_clean`.
    pub path_clean: String,
    pub port: u16,
    /// Kept as text because some codes are synthesized rather than observed.
    pub response_code: String,
    /// Set once a reviewer has processed the path.
    pub flag: bool,
}

impl WebPath {
    /// Build a record for `url` found under `base_url`.
    #[must_use]
    pub fn new(base_url: &str, url: &str, port: u16, response_code: impl Into<String>) -> Self {
        let (path, path_clean) = clean_path(base_url, url);
        Self {
            path,
            path_clean,
            port,
            response_code: response_code.into(),
            flag: false,
        }
    }
}
