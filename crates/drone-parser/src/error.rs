//! Parser error types for drone-parser.

use drone_core::errors::CoreError;

/// Errors that can occur while loading or extracting a scanner document.
///
/// Missing optional banners or elements are never errors; they resolve to
/// the model's defaults.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// Structural problems the XML reader does not catch on its own.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("dirb output has no URL_BASE banner")]
    MissingBaseUrl,

    #[error("dirb URL_BASE could not be resolved: {0}")]
    InvalidBaseUrl(#[source] CoreError),

    #[error("Unrecognized scanner output format")]
    UnknownFormat,

    /// `general.project_id` is empty and no project was named.
    #[error("No project id configured (set general.project_id)")]
    MissingProjectId,
}
