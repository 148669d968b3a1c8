//! Wrap an extractor's raw results into a `Project`.

use drone_core::entities::{Command, Host, Project};

/// What an extractor found in one document, before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub command: Command,
    pub hosts: Vec<Host>,
}

/// Build the project graph for `project_id`.
///
/// Dead hosts and ports that were never marked open are dropped here, so
/// every `Project` leaving this crate satisfies the liveness invariants no
/// matter what an extractor handed over.
#[must_use]
pub fn assemble(project_id: &str, extraction: Extraction) -> Project {
    let mut project = Project::new(project_id);
    project.commands.push(extraction.command);
    project.hosts = extraction
        .hosts
        .into_iter()
        .filter(|host| host.alive)
        .map(|mut host| {
            host.ports.retain(|port| port.alive);
            host
        })
        .collect();
    project
}
