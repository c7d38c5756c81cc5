//! GitHub CLI `hosts.yml` token extraction
//!
//! The file is scanned line by line rather than parsed as YAML: the wrapper
//! only needs one key from one host block, and a half-written or unusual
//! file elsewhere must not prevent that lookup.
//!
//! ```yaml
//! github.example.com:
//!     oauth_token: ghs_other
//! github.com:
//!     user: octocat
//!     oauth_token: gho_xxxxxxxxxxxxxxxxxxxx
//!     git_protocol: https
//! ```

use lazy_static::lazy_static;
use regex::Regex;

/// Host whose block is searched by default
pub const DEFAULT_HOST: &str = "github.com";

lazy_static! {
    static ref OAUTH_TOKEN_LINE: Regex =
        Regex::new(r"^\s+oauth_token\s*:\s*(.*)$").expect("valid oauth_token pattern");
}

/// Extract the `oauth_token` value of `host`'s block, if any.
///
/// Returns `None` when the host block is missing, has no token line, or the
/// token value is empty after trimming whitespace and quotes.
pub fn extract_oauth_token(content: &str, host: &str) -> Option<String> {
    let mut in_target_block = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indented = line.starts_with(' ') || line.starts_with('\t');
        if !indented {
            in_target_block = block_key(trimmed).is_some_and(|key| key == host);
            continue;
        }

        if in_target_block {
            if let Some(caps) = OAUTH_TOKEN_LINE.captures(line) {
                let value = strip_quotes(caps[1].trim());
                return (!value.is_empty()).then(|| value.to_string());
            }
        }
    }

    None
}

/// Key of an unindented `key:` line, with optional quotes removed
fn block_key(line: &str) -> Option<&str> {
    let key = line.strip_suffix(':')?.trim();
    Some(strip_quotes(key))
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    value
}
