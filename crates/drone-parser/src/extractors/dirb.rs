//! dirb text output extractor.
//!
//! dirb writes a banner block (`URL_BASE:`, `OPTION: ...`, ...) followed by
//! result lines:
//!
//! ```text
//! + http://10.0.0.1/index.html (CODE:200|SIZE:10918)
//! ==> DIRECTORY: http://10.0.0.1/admin/
//! ```
//!
//! Every path is bound to the host named by `URL_BASE:`. A document without
//! a usable base URL is rejected rather than producing paths with no host.

mod probes;

use std::sync::LazyLock;

use drone_config::ExtractConfig;
use drone_core::constants::DIRECTORY_RESPONSE_CODE;
use drone_core::entities::{Command, Host, Project, WebPath};
use drone_core::enums::Tool;
use drone_core::net::split_url;
use regex::Regex;

use crate::assembler::{Extraction, assemble};
use crate::error::ParserError;
use crate::extractors::helpers::group;
use crate::resource::load_resource;

pub use probes::{PROBES, Probe, Token, extrapolate_args};

static BASE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^URL_BASE: (.+)$").expect("base url pattern compiles"));

static DIRECTORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DIRECTORY: (.+)").expect("directory pattern compiles"));

static FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+ (.+) \(CODE:(\d{3})").expect("file result pattern compiles")
});

/// Parse a dirb output file (or literal text) into a project with default settings.
///
/// # Errors
/// Returns `ParserError` if the resource cannot be read or has no usable `URL_BASE:`.
pub fn parse(project: &str, resource: &str) -> Result<Project, ParserError> {
    parse_with(project, resource, &ExtractConfig::default())
}

/// Parse a dirb output file (or literal text) into a project.
///
/// # Errors
/// Returns `ParserError` if the resource cannot be read or has no usable `URL_BASE:`.
pub fn parse_with(
    project: &str,
    resource: &str,
    config: &ExtractConfig,
) -> Result<Project, ParserError> {
    let contents = load_resource(resource)?;
    Ok(assemble(project, extract(&contents, config)?))
}

/// Extract the reconstructed command and the single scanned host.
///
/// # Errors
/// Returns `ParserError::MissingBaseUrl` or `ParserError::InvalidBaseUrl`
/// when the scanned URL cannot be determined.
pub fn extract(contents: &str, config: &ExtractConfig) -> Result<Extraction, ParserError> {
    let command = Command {
        tool: Tool::Dirb,
        command: extrapolate_args(contents),
    };

    let base_url = find_base_url(contents).ok_or_else(|| {
        tracing::warn!("dirb: rejecting output without a URL_BASE banner");
        ParserError::MissingBaseUrl
    })?;
    let parts = split_url(base_url, config.default_http_port).map_err(|error| {
        tracing::warn!(base_url, %error, "dirb: rejecting output with an unusable URL_BASE");
        ParserError::InvalidBaseUrl(error)
    })?;

    let directories = DIRECTORY
        .captures_iter(contents)
        .map(|caps| (group(&caps, 1).trim_end(), DIRECTORY_RESPONSE_CODE));
    let files = FILE
        .captures_iter(contents)
        .map(|caps| (group(&caps, 1), group(&caps, 2)));

    let mut host = Host::with_address(&parts.host);
    host.web_directories = directories
        .chain(files)
        .map(|(url, code)| WebPath::new(base_url, url, parts.port, code))
        .collect();

    tracing::debug!(
        host = %host.string_addr,
        port = parts.port,
        paths = host.web_directories.len(),
        command = %command.command,
        "dirb: extraction finished"
    );
    Ok(Extraction {
        command,
        hosts: vec![host],
    })
}

/// The scanned URL with one trailing `/` removed.
fn find_base_url(contents: &str) -> Option<&str> {
    let caps = BASE_URL.captures(contents)?;
    let raw = caps.get(1)?.as_str().trim();
    let url = raw.strip_suffix('/').unwrap_or(raw);
    (!url.is_empty()).then_some(url)
}
