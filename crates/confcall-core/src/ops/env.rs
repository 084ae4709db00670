//!
//! `%NAME%` environment-variable expansion.
//!
//! This follows the host's native expansion algorithm rather than a template
//! language: a token runs from one `%` to the next, a defined variable
//! replaces the whole token, and an undefined one is left verbatim with its
//! closing `%` free to open the next token. There is no escaping, no default
//! values and no nested expansion.
//!

use std::env;

///
/// EnvOps
///

pub struct EnvOps;

impl EnvOps {
    /// Expand `%NAME%` tokens against the process environment.
    #[must_use]
    pub fn expand(raw: &str) -> String {
        Self::expand_with(raw, |name| {
            env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Expand `%NAME%` tokens against an arbitrary lookup.
    pub fn expand_with(raw: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
        if !raw.contains('%') {
            return raw.to_string();
        }

        let mut out = String::with_capacity(raw.len());
        let mut last = 0;

        while last < raw.len() {
            let start = last + raw[last..].chars().next().map_or(1, char::len_utf8);
            let Some(rel) = raw[start..].find('%') else {
                break;
            };
            let pos = start + rel;

            if raw.as_bytes()[last] == b'%' {
                let name = &raw[last + 1..pos];
                if let Some(value) = lookup(name).filter(|_| !name.is_empty()) {
                    out.push_str(&value);
                    last = pos + 1;
                    continue;
                }
            }

            out.push_str(&raw[last..pos]);
            last = pos;
        }

        out.push_str(&raw[last..]);
        out
    }
}

///
/// TESTS
///
