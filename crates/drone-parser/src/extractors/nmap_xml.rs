//! nmap XML (`-oX`) extractor.
//!
//! Walks the document as a stream of `quick-xml` events with an explicit
//! element stack, so the scoping rules below hold regardless of how deeply
//! nmap nests a given element:
//!
//! - `host`: any `host` not already inside a host
//! - `status`, `address`: direct children of `host`
//! - `hostname`, `port`, `osmatch`: any descendant of `host`
//! - `state`, `service`, `script`: direct children of `port`
//!
//! The document must be well formed. Every element name, attribute, and
//! text run is checked (names, quoting, duplicates, entity references),
//! including elements the walker otherwise ignores. A partial `Project` is
//! never returned for broken XML.

use drone_config::ExtractConfig;
use drone_core::entities::{Command, Host, Note, Os, Port, Project};
use drone_core::enums::Tool;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::assembler::{Extraction, assemble};
use crate::error::ParserError;
use crate::resource::load_resource;

/// Parse an XML file (or literal XML) into a project with default settings.
///
/// # Errors
/// Returns `ParserError` if the resource cannot be read or is not well-formed XML.
pub fn parse(project: &str, resource: &str) -> Result<Project, ParserError> {
    parse_with(project, resource, &ExtractConfig::default())
}

/// Parse an XML file (or literal XML) into a project.
///
/// # Errors
/// Returns `ParserError` if the resource cannot be read or is not well-formed XML.
pub fn parse_with(
    project: &str,
    resource: &str,
    config: &ExtractConfig,
) -> Result<Project, ParserError> {
    let contents = load_resource(resource)?;
    Ok(assemble(project, extract(&contents, config)?))
}

/// Extract the command and live hosts from an nmap XML report.
///
/// # Errors
/// Returns `ParserError::Xml`, `XmlAttribute`, or `MalformedXml` when the
/// document is not well formed.
pub fn extract(contents: &str, config: &ExtractConfig) -> Result<Extraction, ParserError> {
    let mut walker = Walker::new(config.os_weight);
    let mut reader = Reader::from_str(contents);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                check_element(&e)?;
                walker.open(&e)?;
                walker.stack.push(e.local_name().as_ref().to_vec());
            }
            Event::Empty(e) => {
                check_element(&e)?;
                walker.open(&e)?;
                walker.close(e.local_name().as_ref());
            }
            Event::End(e) => {
                let name = walker.stack.pop().ok_or_else(|| {
                    ParserError::MalformedXml(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.local_name().as_ref())
                    ))
                })?;
                walker.close(&name);
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if walker.stack.is_empty() && !text.trim().is_empty() {
                    return Err(ParserError::MalformedXml(
                        "text outside the root element".into(),
                    ));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = walker.stack.last() {
        return Err(ParserError::MalformedXml(format!(
            "element <{}> is never closed",
            String::from_utf8_lossy(open)
        )));
    }
    if !walker.saw_root {
        return Err(ParserError::MalformedXml("document has no root element".into()));
    }

    tracing::debug!(
        hosts = walker.hosts.len(),
        command = %walker.command.command,
        "nmap xml: extraction finished"
    );
    Ok(Extraction {
        command: walker.command,
        hosts: walker.hosts,
    })
}

/// A host being built, with the depth its element opened at.
struct OpenHost {
    depth: usize,
    host: Host,
    state: Option<String>,
    fingerprint: Option<String>,
}

/// A port being built. `port` is `None` when the element was unusable and
/// its children should be ignored.
struct OpenPort {
    depth: usize,
    port: Option<Port>,
    state: Option<String>,
}

struct Walker {
    os_weight: u8,
    stack: Vec<Vec<u8>>,
    saw_root: bool,
    command: Command,
    hosts: Vec<Host>,
    host: Option<OpenHost>,
    port: Option<OpenPort>,
}

impl Walker {
    const fn new(os_weight: u8) -> Self {
        Self {
            os_weight,
            stack: Vec::new(),
            saw_root: false,
            command: Command::new(Tool::Nmap),
            hosts: Vec::new(),
            host: None,
            port: None,
        }
    }

    fn parent_is(&self, name: &[u8]) -> bool {
        self.stack.last().is_some_and(|parent| parent == name)
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), ParserError> {
        let depth = self.stack.len();
        if depth == 0 {
            if self.saw_root {
                return Err(ParserError::MalformedXml(
                    "document has more than one root element".into(),
                ));
            }
            self.saw_root = true;
        }

        match e.local_name().as_ref() {
            b"nmaprun" if depth <= 1 && self.command.command.is_empty() => {
                if let Some(args) = attr(e, b"args")? {
                    self.command.command = args;
                }
            }
            b"host" if self.host.is_none() => {
                self.host = Some(OpenHost {
                    depth,
                    host: Host::new(),
                    state: None,
                    fingerprint: None,
                });
            }
            b"status" if self.parent_is(b"host") => {
                let state = attr(e, b"state")?.unwrap_or_default();
                if let Some(open) = self.host.as_mut() {
                    open.state = Some(state);
                }
            }
            b"address" if self.parent_is(b"host") => self.read_address(e)?,
            b"hostname" => {
                let name = attr(e, b"name")?;
                if let (Some(open), Some(name)) = (self.host.as_mut(), name) {
                    if !open.host.hostnames.contains(&name) {
                        open.host.hostnames.push(name);
                    }
                }
            }
            b"port" if self.host.is_some() && self.port.is_none() => {
                self.port = Some(OpenPort {
                    depth,
                    port: new_port(e)?,
                    state: None,
                });
            }
            b"state" if self.parent_is(b"port") => {
                let state = attr(e, b"state")?.unwrap_or_default();
                if let Some(open) = self.port.as_mut() {
                    open.state = Some(state);
                }
            }
            b"service" if self.parent_is(b"port") => self.read_service(e)?,
            b"script" if self.parent_is(b"port") => {
                let title = attr(e, b"id")?.unwrap_or_default();
                let content = attr(e, b"output")?.unwrap_or_default();
                if let Some(port) = self.port.as_mut().and_then(|p| p.port.as_mut()) {
                    port.notes.push(Note::new(title, content, Tool::Nmap));
                }
            }
            b"osmatch" => {
                let name = attr(e, b"name")?;
                if let Some(open) = self.host.as_mut() {
                    if open.fingerprint.is_none() {
                        open.fingerprint = Some(name.unwrap_or_default());
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Called once the element's children are done and it is off the stack.
    fn close(&mut self, name: &[u8]) {
        let depth = self.stack.len();
        match name {
            b"port" if self.port.as_ref().is_some_and(|p| p.depth == depth) => {
                if let Some(open) = self.port.take() {
                    self.finish_port(open);
                }
            }
            b"host" if self.host.as_ref().is_some_and(|h| h.depth == depth) => {
                if let Some(open) = self.host.take() {
                    self.finish_host(open);
                }
            }
            _ => {}
        }
    }

    fn read_address(&mut self, e: &BytesStart<'_>) -> Result<(), ParserError> {
        let Some(addr) = attr(e, b"addr")? else {
            return Ok(());
        };
        let addr_type = attr(e, b"addrtype")?.unwrap_or_default();
        if let Some(open) = self.host.as_mut() {
            match addr_type.as_str() {
                "ipv4" => open.host.set_address(&addr),
                "mac" => open.host.mac_addr = Some(addr),
                _ => {}
            }
        }
        Ok(())
    }

    fn read_service(&mut self, e: &BytesStart<'_>) -> Result<(), ParserError> {
        let name = attr(e, b"name")?.unwrap_or_default();
        let product = attr(e, b"product")?;
        let version = attr(e, b"version")?;
        if let Some(port) = self.port.as_mut().and_then(|p| p.port.as_mut()) {
            port.service = name;
            port.product = format_product(product, version);
        }
        Ok(())
    }

    fn finish_port(&mut self, open: OpenPort) {
        let Some(mut port) = open.port else {
            return;
        };
        if open.state.as_deref().is_some_and(|state| state != "open") {
            return;
        }
        port.alive = true;
        if let Some(host) = self.host.as_mut() {
            host.host.ports.push(port);
        }
    }

    fn finish_host(&mut self, open: OpenHost) {
        let OpenHost {
            mut host,
            state,
            fingerprint,
            ..
        } = open;

        host.alive = state.as_deref() == Some("up");
        if !host.alive {
            tracing::debug!(
                addr = %host.string_addr,
                state = state.as_deref().unwrap_or("missing"),
                "nmap xml: skipping host that is not up"
            );
            return;
        }

        if let Some(fingerprint) = fingerprint {
            host.os.push(Os::new(Tool::Nmap, self.os_weight, fingerprint));
        }
        self.hosts.push(host);
    }
}

/// Build a port from a `<port>` element, or `None` when `portid` is unusable.
fn new_port(e: &BytesStart<'_>) -> Result<Option<Port>, ParserError> {
    let portid = attr(e, b"portid")?;
    let protocol = attr(e, b"protocol")?.unwrap_or_default();
    match portid.as_deref().map(str::parse::<u16>) {
        Some(Ok(number)) => Ok(Some(Port::new(number, protocol))),
        _ => {
            tracing::warn!(
                portid = portid.as_deref().unwrap_or("missing"),
                "nmap xml: skipping port without a usable portid"
            );
            Ok(None)
        }
    }
}

/// `"<product> <version>"`, `"<product>"`, or `"unknown"`.
fn format_product(product: Option<String>, version: Option<String>) -> String {
    match (product, version) {
        (Some(product), Some(version)) => format!("{product} {version}"),
        (Some(product), None) => product,
        (None, _) => "unknown".to_string(),
    }
}

/// Reject an element whose name or attributes are not well formed.
fn check_element(e: &BytesStart<'_>) -> Result<(), ParserError> {
    check_name(e.name().as_ref())?;
    for attribute in e.attributes().with_checks(true) {
        let attribute = attribute?;
        check_name(attribute.key.as_ref())?;
        if attribute.value.contains(&b'<') {
            return Err(ParserError::MalformedXml(format!(
                "'<' in value of attribute {}",
                String::from_utf8_lossy(attribute.key.as_ref())
            )));
        }
        attribute.unescape_value()?;
    }
    Ok(())
}

/// An XML `Name`: a letter, `_` or `:`, then letters, digits, `-`, `.`, `_`, `:`.
fn check_name(raw: &[u8]) -> Result<(), ParserError> {
    let invalid = || {
        ParserError::MalformedXml(format!(
            "invalid XML name '{}'",
            String::from_utf8_lossy(raw)
        ))
    };
    let name = std::str::from_utf8(raw).map_err(|_| invalid())?;
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':');
    let continues_well = chars
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':' | '\u{b7}'));
    if starts_well && continues_well {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Unescaped value of the attribute whose local name is `key`.
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, ParserError> {
    for attribute in e.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == key {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
