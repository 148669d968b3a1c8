//! # drone-core
//!
//! Canonical asset model, address helpers, and error types for lairdrone.
//!
//! This crate provides the foundational types shared across all drone crates:
//! - Entity structs for the project graph (project, command, host, port, os, note, web path)
//! - The `Tool` enum identifying which scanner produced a record
//! - Constants shared by the extractors
//! - IPv4, URL, and path helpers
//! - Cross-cutting error types

pub mod constants;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod net;
