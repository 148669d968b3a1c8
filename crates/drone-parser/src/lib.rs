//! # drone-parser
//!
//! Normalizes scanner output into the lairdrone project graph.
//!
//! Supported dialects:
//! - **nmap grepable** (`-oG`): line-oriented host status and port tuples
//! - **nmap XML** (`-oX`): hosts, ports, NSE scripts, MAC addresses, OS matches
//! - **dirb** text output: discovered paths, with the command line rebuilt
//!   from option banners
//!
//! Every entry point takes a project id and a resource (a file path or the
//! document text itself) and returns a freshly built [`Project`]. Calls share
//! no state and can run on any thread. [`parse_configured`] takes the
//! project id and extraction settings from a loaded [`DroneConfig`].

pub mod assembler;
pub mod error;
pub mod extractors;
pub mod format;
mod resource;

pub use error::ParserError;
pub use extractors::{dirb, nmap_grep, nmap_xml};
pub use format::SourceFormat;
pub use resource::load_resource;

use drone_config::{DroneConfig, ExtractConfig};
use drone_core::entities::Project;

/// Detect the dialect of `resource` and parse it with default settings.
///
/// # Errors
/// Returns `ParserError::UnknownFormat` when the dialect cannot be detected,
/// or whatever the matching extractor returns.
pub fn parse(project: &str, resource: &str) -> Result<Project, ParserError> {
    parse_with(project, resource, &ExtractConfig::default())
}

/// Detect the dialect of `resource` and parse it.
///
/// # Errors
/// Returns `ParserError::UnknownFormat` when the dialect cannot be detected,
/// or whatever the matching extractor returns.
pub fn parse_with(
    project: &str,
    resource: &str,
    config: &ExtractConfig,
) -> Result<Project, ParserError> {
    let contents = load_resource(resource)?;
    let format = SourceFormat::detect(&contents).ok_or(ParserError::UnknownFormat)?;
    tracing::debug!(%format, project, "dispatching scanner output");

    let extraction = match format {
        SourceFormat::NmapGrep => nmap_grep::extract(&contents),
        SourceFormat::NmapXml => nmap_xml::extract(&contents, config)?,
        SourceFormat::Dirb => dirb::extract(&contents, config)?,
    };
    Ok(assembler::assemble(project, extraction))
}

/// Detect and parse `resource` into the project named by `config.general`,
/// using `config.extract` for extraction settings.
///
/// # Errors
/// Returns `ParserError::MissingProjectId` when no project id is configured,
/// otherwise the same errors as [`parse_with`].
pub fn parse_configured(resource: &str, config: &DroneConfig) -> Result<Project, ParserError> {
    if !config.general.is_configured() {
        return Err(ParserError::MissingProjectId);
    }
    parse_with(&config.general.project_id, resource, &config.extract)
}
