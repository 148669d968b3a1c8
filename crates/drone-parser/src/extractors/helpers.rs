//! Shared helpers for the line-oriented extractors.

use regex::Captures;

/// Capture group `index`, or `""` when the group did not participate.
///
/// Scanner fields are frequently empty (`22/open/tcp//ssh///`), and an
/// empty field means the same thing as an absent one.
pub fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}
