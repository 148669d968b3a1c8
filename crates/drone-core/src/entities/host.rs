use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Os, Port, WebPath};
use crate::net::ip_to_long;

/// A network host and everything discovered on it.
///
/// Identity is `string_addr`. Two records for the same address are not
/// merged here; that happens downstream of extraction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Host {
    pub string_addr: String,
    /// `string_addr` as a big-endian integer, or 0 when it is not IPv4.
    pub long_addr: u32,
    pub mac_addr: Option<String>,
    pub hostnames: Vec<String>,
    pub alive: bool,
    pub ports: Vec<Port>,
    pub os: Vec<Os>,
    pub web_directories: Vec<WebPath>,
}

impl Host {
    /// A host with no address yet. Hosts are alive until proven otherwise.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            string_addr: String::new(),
            long_addr: 0,
            mac_addr: None,
            hostnames: Vec::new(),
            alive: true,
            ports: Vec::new(),
            os: Vec::new(),
            web_directories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_address(addr: &str) -> Self {
        let mut host = Self::new();
        host.set_address(addr);
        host
    }

    /// Set `string_addr` and keep `long_addr` in step with it.
    pub fn set_address(&mut self, addr: &str) {
        self.string_addr = addr.to_string();
        self.long_addr = ip_to_long(addr).unwrap_or(0);
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_host_is_alive_and_empty() {
        let host = Host::new();
        assert!(host.alive);
        assert!(host.string_addr.is_empty());
        assert_eq!(host.long_addr, 0);
        assert!(host.mac_addr.is_none());
        assert!(host.ports.is_empty());
        assert!(host.os.is_empty());
        assert!(host.web_directories.is_empty());
    }

    #[test]
    fn with_address_derives_long_form() {
        let host = Host::with_address("192.168.1.10");
        assert_eq!(host.string_addr, "192.168.1.10");
        assert_eq!(host.long_addr, 3_232_235_786);
    }

    #[test]
    fn hostname_address_keeps_zero_long_form() {
        let host = Host::with_address("intranet.example.com");
        assert_eq!(host.string_addr, "intranet.example.com");
        assert_eq!(host.long_addr, 0);
    }

    #[test]
    fn mutating_one_host_leaves_fresh_hosts_untouched() {
        let mut first = Host::new();
        first.hostnames.push("a.example".into());
        first.alive = false;

        let second = Host::new();
        assert!(second.hostnames.is_empty());
        assert!(second.alive);
    }
}
