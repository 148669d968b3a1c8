//! Command-line reconstruction for dirb.
//!
//! dirb never echoes its own invocation, but it prints a banner line for
//! most options it was given. Each probe looks for one banner and, on a
//! match, contributes one token to the rebuilt command. The table order is
//! the token order. Banners not covered by a probe are silently left out.

use std::sync::LazyLock;

use regex::Regex;

/// How a matching probe renders its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The flag alone, e.g. `-r`.
    Flag(&'static str),
    /// The flag followed by the first capture, e.g. `-a Mozilla/5.0`.
    Value(&'static str),
    /// The flag followed by the first capture in double quotes.
    Quoted(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub name: &'static str,
    pub pattern: &'static str,
    pub token: Token,
}

/// Banner probes in command-line order. Patterns are matched in multi-line
/// mode and anchored at the start of a line.
pub const PROBES: &[Probe] = &[
    Probe { name: "user_agent", pattern: r"^USER_AGENT: (.+)", token: Token::Value("-a") },
    Probe { name: "cookie", pattern: r"^COOKIE: (.+)", token: Token::Quoted("-c") },
    Probe {
        name: "fine_tuning",
        pattern: r"^OPTION: Fine tunning of NOT_FOUND detection",
        token: Token::Flag("-f"),
    },
    Probe {
        name: "added_headers",
        pattern: r"^ADDED_HEADERS:.+\n--\n(.+)\n--",
        token: Token::Quoted("-H"),
    },
    Probe {
        name: "case_insensitive",
        pattern: r"^OPTION: Using Case-Insensitive Searches",
        token: Token::Flag("-i"),
    },
    Probe {
        name: "print_location",
        pattern: r"^OPTION: Printing LOCATION header",
        token: Token::Flag("-l"),
    },
    Probe {
        name: "ignore_not_found_code",
        pattern: r"^OPTION: Ignoring NOT_FOUND code -> (\d+)",
        token: Token::Value("-N"),
    },
    Probe { name: "output_file", pattern: r"^OUTPUT_FILE: (.+)", token: Token::Value("-o") },
    Probe { name: "proxy", pattern: r"^PROXY: (.+)", token: Token::Value("-p") },
    Probe {
        name: "proxy_auth",
        pattern: r"^PROXY AUTHORIZATION: (.+)",
        token: Token::Value("-P"),
    },
    Probe { name: "not_recursive", pattern: r"^OPTION: Not Recursive", token: Token::Flag("-r") },
    Probe { name: "silent", pattern: r"^OPTION: Silent Mode", token: Token::Flag("-S") },
    Probe {
        name: "no_trailing_slash",
        pattern: r"^OPTION: NOT forcing an ending",
        token: Token::Flag("-t"),
    },
    Probe { name: "http_auth", pattern: r"^AUTHORIZATION: (.+)", token: Token::Value("-u") },
    Probe {
        name: "show_not_existent",
        pattern: r"^OPTION: Show Not Existant Pages",
        token: Token::Flag("-v"),
    },
    Probe {
        name: "ignore_warnings",
        pattern: r"^OPTION: Not Stoping on warning message",
        token: Token::Flag("-w"),
    },
    Probe {
        name: "extension_list",
        pattern: r"^EXTENSIONS_LIST: \((.+)\) \|",
        token: Token::Value("-X"),
    },
    Probe {
        name: "extension_file",
        pattern: r"^EXTENSIONS_FILE: (.+)",
        token: Token::Value("-x"),
    },
    Probe {
        name: "speed_delay",
        pattern: r"^SPEED_DELAY: (\d+) miliseconds",
        token: Token::Value("-z"),
    },
];

static COMPILED: LazyLock<Vec<(&'static Probe, Regex)>> = LazyLock::new(|| {
    PROBES
        .iter()
        .map(|probe| {
            let regex = Regex::new(&format!("(?m){}", probe.pattern))
                .unwrap_or_else(|e| panic!("probe '{}' does not compile: {e}", probe.name));
            (probe, regex)
        })
        .collect()
});

impl Probe {
    /// The token this probe contributes to `contents`, if its banner is present.
    fn token_for(&self, regex: &Regex, contents: &str) -> Option<String> {
        let caps = regex.captures(contents)?;
        let value = caps.get(1).map_or("", |m| m.as_str().trim_end());
        Some(match self.token {
            Token::Flag(flag) => flag.to_string(),
            Token::Value(flag) => format!("{flag} {value}"),
            Token::Quoted(flag) => format!("{flag} \"{value}\""),
        })
    }
}

/// Rebuild the dirb command line from its banner output.
///
/// Returns `dirb` followed by every contributed token in probe order. With
/// no matching banners the result is just `dirb`.
#[must_use]
pub fn extrapolate_args(contents: &str) -> String {
    let mut command = String::from("dirb");
    for (probe, regex) in COMPILED.iter() {
        if let Some(token) = probe.token_for(regex, contents) {
            tracing::debug!(probe = probe.name, %token, "dirb: banner matched");
            command.push(' ');
            command.push_str(&token);
        }
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn every_probe_compiles() {
        assert_eq!(COMPILED.len(), PROBES.len());
    }

    #[test]
    fn no_banners_gives_bare_tool_name() {
        assert_eq!(extrapolate_args("URL_BASE: http://example.com/\n"), "dirb");
    }

    #[test]
    fn user_agent_and_not_recursive_only() {
        let banner = "USER_AGENT: Mozilla/5.0\nOPTION: Not Recursive\n";
        assert_eq!(extrapolate_args(banner), "dirb -a Mozilla/5.0 -r");
    }

    #[test]
    fn tokens_follow_probe_order_not_banner_order() {
        let banner = "OPTION: Silent Mode\nOPTION: Using Case-Insensitive Searches\n";
        assert_eq!(extrapolate_args(banner), "dirb -i -S");
    }

    #[rstest]
    #[case("COOKIE: session=abc", "dirb -c \"session=abc\"")]
    #[case("OPTION: Fine tunning of NOT_FOUND detection", "dirb -f")]
    #[case("ADDED_HEADERS: \n--\nX-Test: 1\n--", "dirb -H \"X-Test: 1\"")]
    #[case("OPTION: Printing LOCATION header", "dirb -l")]
    #[case("OPTION: Ignoring NOT_FOUND code -> 302", "dirb -N 302")]
    #[case("OUTPUT_FILE: out.txt", "dirb -o out.txt")]
    #[case("PROXY: 127.0.0.1:8080", "dirb -p 127.0.0.1:8080")]
    #[case("OPTION: NOT forcing an ending '/' on URLs", "dirb -t")]
    #[case("AUTHORIZATION: admin:secret", "dirb -u admin:secret")]
    #[case("OPTION: Show Not Existant Pages", "dirb -v")]
    #[case("OPTION: Not Stoping on warning messages", "dirb -w")]
    #[case("EXTENSIONS_LIST: (.php,.bak) | (.php)(.bak) [NUM = 2]", "dirb -X .php,.bak")]
    #[case("EXTENSIONS_FILE: exts.txt", "dirb -x exts.txt")]
    #[case("SPEED_DELAY: 250 miliseconds", "dirb -z 250")]
    fn single_banner(#[case] banner: &str, #[case] expected: &str) {
        assert_eq!(extrapolate_args(banner), expected);
    }

    #[test]
    fn proxy_auth_does_not_trigger_http_auth() {
        let banner = "PROXY: 10.0.0.1:3128\nPROXY AUTHORIZATION: bob:pw\n";
        assert_eq!(extrapolate_args(banner), "dirb -p 10.0.0.1:3128 -P bob:pw");
    }
}
