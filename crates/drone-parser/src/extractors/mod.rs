//! Per-format extractors.
//!
//! Each module exposes `extract` (text in, [`Extraction`](crate::assembler::Extraction)
//! out) and `parse` (resource in, assembled [`Project`](drone_core::entities::Project) out).

pub mod dirb;
pub(crate) mod helpers;
pub mod nmap_grep;
pub mod nmap_xml;
