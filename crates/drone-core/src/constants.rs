//! Values every extractor agrees on.

/// Confidence weight attached to OS guesses produced by nmap.
pub const OS_WEIGHT: u8 = 50;

/// Port assumed for a web target whose URL names neither a port nor a known scheme.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Response code recorded for dirb `DIRECTORY:` hits, which carry no code of their own.
pub const DIRECTORY_RESPONSE_CODE: &str = "200";
