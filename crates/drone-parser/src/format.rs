//! Scanner output format detection.

use drone_core::enums::Tool;
use std::fmt;

/// The document dialects this crate can normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    NmapGrep,
    NmapXml,
    Dirb,
}

impl SourceFormat {
    /// Guess the dialect of `contents` from its leading markup and banners.
    ///
    /// Returns `None` for anything that looks like none of them.
    #[must_use]
    pub fn detect(contents: &str) -> Option<Self> {
        if contents.trim_start().starts_with('<') {
            return Some(Self::NmapXml);
        }
        if contents.contains("URL_BASE:") {
            return Some(Self::Dirb);
        }
        let grepable = contents.lines().any(|line| {
            line.starts_with("Host: ") && (line.contains("Status:") || line.contains("Ports:"))
        });
        grepable.then_some(Self::NmapGrep)
    }

    /// The tool that writes this dialect.
    #[must_use]
    pub const fn tool(self) -> Tool {
        match self {
            Self::NmapGrep | Self::NmapXml => Tool::Nmap,
            Self::Dirb => Tool::Dirb,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NmapGrep => "nmap_grep",
            Self::NmapXml => "nmap_xml",
            Self::Dirb => "dirb",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
