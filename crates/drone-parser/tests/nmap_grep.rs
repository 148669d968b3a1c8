//! End-to-end tests for the grepable extractor against a captured scan.

use drone_core::enums::Tool;
use drone_parser::nmap_grep;
use pretty_assertions::assert_eq;

const SCAN: &str = include_str!("fixtures/scan.gnmap");

#[test]
fn command_comes_from_banner() {
    let project = nmap_grep::parse("lab", SCAN).unwrap();
    assert_eq!(project.project_id, "lab");
    assert_eq!(project.commands.len(), 1);
    assert_eq!(project.commands[0].tool, Tool::Nmap);
    assert_eq!(
        project.commands[0].command,
        "nmap -sS -sV -oG scan.gnmap 192.168.56.0/29"
    );
}

#[test]
fn only_live_hosts_are_emitted() {
    let project = nmap_grep::parse("lab", SCAN).unwrap();
    let addrs: Vec<&str> = project
        .hosts
        .iter()
        .map(|h| h.string_addr.as_str())
        .collect();
    assert_eq!(addrs, vec!["192.168.56.1", "192.168.56.3", "192.168.56.5"]);
}

#[test]
fn open_ports_only() {
    let project = nmap_grep::parse("lab", SCAN).unwrap();

    let gateway = &project.hosts[0];
    assert_eq!(gateway.hostnames, vec!["gateway.lab".to_string()]);
    let ports: Vec<u16> = gateway.ports.iter().map(|p| p.port).collect();
    assert_eq!(ports, vec![22, 53]);
    assert_eq!(
        gateway.ports[0].product,
        "OpenSSH 8.9p1 Ubuntu 3ubuntu0.6 (Ubuntu Linux; protocol 2.0)"
    );
    assert!(gateway.ports.iter().all(|p| p.alive && p.protocol == "tcp"));

    let samba = &project.hosts[1];
    let ports: Vec<u16> = samba.ports.iter().map(|p| p.port).collect();
    assert_eq!(ports, vec![139, 445]);

    let quiet = &project.hosts[2];
    assert!(quiet.ports.is_empty());
    assert!(quiet.alive);
}

#[test]
fn no_os_guesses_from_grepable_output() {
    let project = nmap_grep::parse("lab", SCAN).unwrap();
    assert!(project.hosts.iter().all(|h| h.os.is_empty()));
}

#[test]
fn reads_from_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.gnmap");
    std::fs::write(&path, SCAN).unwrap();

    let from_file = nmap_grep::parse("lab", path.to_str().unwrap()).unwrap();
    let from_text = nmap_grep::parse("lab", SCAN).unwrap();
    assert_eq!(from_file, from_text);
}
