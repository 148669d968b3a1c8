//! nmap grepable (`-oG`) extractor.
//!
//! Each host appears on up to two lines keyed by address: a `Status:` line
//! and a `Ports:` line. The port list is a comma-separated run of
//! slash-delimited 7-tuples:
//!
//! ```text
//! port/state/protocol/owner/service/rpc_info/version/
//! ```
//!
//! Grepable output carries no usable OS detail, so no OS record is emitted.

use std::sync::LazyLock;

use drone_core::entities::{Command, Host, Port, Project};
use drone_core::enums::Tool;
use regex::Regex;

use crate::assembler::{Extraction, assemble};
use crate::error::ParserError;
use crate::extractors::helpers::group;
use crate::resource::load_resource;

static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"as: (.+)").expect("command pattern compiles"));

static HOST_STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Host: ([0-9.]*)\s(.+)\sStatus: (\w+)").expect("status pattern compiles")
});

static HOST_PORTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Host: ([0-9.]*).*?Ports:(.*)").expect("ports line pattern compiles")
});

static PORT_TUPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s(\d+)/([^/]+)?/([^/]+)?/([^/]+)?/([^/]+)?/([^/]+)?/([^/]+)?/")
        .expect("port tuple pattern compiles")
});

/// Parse a grepable file (or literal text) into a project.
///
/// # Errors
/// Returns `ParserError::Io` if `resource` names a file that cannot be read.
pub fn parse(project: &str, resource: &str) -> Result<Project, ParserError> {
    let contents = load_resource(resource)?;
    Ok(assemble(project, extract(&contents)))
}

/// Extract the command and live hosts from grepable text.
#[must_use]
pub fn extract(contents: &str) -> Extraction {
    let mut command = Command::new(Tool::Nmap);
    if let Some(caps) = COMMAND.captures(contents) {
        command.command = caps[1].trim_end().to_string();
    }

    let port_lines: Vec<(&str, &str)> = HOST_PORTS
        .captures_iter(contents)
        .map(|caps| (group(&caps, 1), group(&caps, 2)))
        .collect();

    let mut hosts = Vec::new();
    for caps in HOST_STATUS.captures_iter(contents) {
        let addr = group(&caps, 1);
        let status = group(&caps, 3);
        if status != "Up" {
            tracing::debug!(addr, status, "nmap grep: skipping host that is not up");
            continue;
        }

        let mut host = Host::with_address(addr);
        let hostname = group(&caps, 2).trim_matches(|c| matches!(c, '(' | ')' | ' '));
        if !hostname.is_empty() {
            host.hostnames.push(hostname.to_string());
        }

        for (_, tail) in port_lines.iter().filter(|(ip, _)| *ip == addr) {
            host.ports.extend(open_ports(tail));
        }

        hosts.push(host);
    }

    tracing::debug!(
        hosts = hosts.len(),
        command = %command.command,
        "nmap grep: extraction finished"
    );
    Extraction { command, hosts }
}

/// Open ports listed in one `Ports:` tail. Tuples in any other state are
/// discarded outright.
fn open_ports(tail: &str) -> impl Iterator<Item = Port> + '_ {
    PORT_TUPLE.captures_iter(tail).filter_map(|caps| {
        if group(&caps, 2) != "open" {
            return None;
        }
        let Ok(number) = group(&caps, 1).parse::<u16>() else {
            tracing::warn!(port = group(&caps, 1), "nmap grep: port number out of range");
            return None;
        };
        let mut port = Port::new(number, group(&caps, 3));
        port.alive = true;
        port.service = group(&caps, 5).to_string();
        port.product = group(&caps, 7).to_string();
        Some(port)
    })
}
