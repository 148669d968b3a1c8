//! Address and path helpers shared by the extractors.

use std::net::Ipv4Addr;

use url::Url;

use crate::errors::CoreError;

/// Host and port decomposed from a scanned URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub host: String,
    pub port: u16,
}

/// Convert a dotted-quad IPv4 address to its big-endian integer form.
///
/// # Errors
/// Returns `CoreError::InvalidAddress` for anything that is not IPv4.
pub fn ip_to_long(addr: &str) -> Result<u32, CoreError> {
    addr.trim()
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| CoreError::InvalidAddress(addr.to_string()))
}

/// Decompose `raw` into host and port.
///
/// The port is the explicit one when present, then the scheme's well-known
/// port (`http` 80, `https` 443, ...), then `default_port`.
///
/// # Errors
/// Returns `CoreError::InvalidUrl` when `raw` does not parse or has no host.
pub fn split_url(raw: &str, default_port: u16) -> Result<UrlParts, CoreError> {
    let parsed = Url::parse(raw).map_err(|e| CoreError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| CoreError::InvalidUrl {
            url: raw.to_string(),
            reason: "no host component".to_string(),
        })?;
    Ok(UrlParts {
        host: host.to_string(),
        port: parsed.port_or_known_default().unwrap_or(default_port),
    })
}

/// Remove every occurrence of `base_url` from `path`.
#[must_use]
pub fn strip_base_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        return path.to_string();
    }
    path.replace(base_url, "")
}

/// Replace each character outside `[A-Za-z0-9]` with `_`.
#[must_use]
pub fn sanitize_path(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Return `(path, path_clean)` for a URL found under `base_url`.
#[must_use]
pub fn clean_path(base_url: &str, path: &str) -> (String, String) {
    let stripped = strip_base_url(base_url, path);
    let sanitized = sanitize_path(&stripped);
    (stripped, sanitized)
}
