use std::fmt;

use regex::Regex;

use crate::WadError;

/// Case-insensitive wildcard pattern selecting maps by name.
///
/// `?` matches one character, `*` any run of characters and `[...]` one
/// character of a set, negated with a leading `!` or `^`. The pattern must
/// match the whole name.
#[derive(Clone, Debug)]
pub struct MapPattern {
    source: String,
    regex: Regex,
}

impl MapPattern {
    /// Pattern matching every map.
    pub const MATCH_ALL: &'static str = "*";

    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, WadError> {
        let regex = Regex::new(&translate(pattern)).map_err(|source| WadError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// Reports whether `name` is selected.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Pattern as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for MapPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn translate(pattern: &str) -> String {
    let mut regex = String::from("(?is)^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '?' => regex.push('.'),
            '*' => regex.push_str(".*"),
            '[' => {
                regex.push('[');
                if matches!(chars.peek(), Some('!' | '^')) {
                    let _ = chars.next();
                    regex.push('^');
                }
                // An unterminated class is left open so compilation fails.
                for member in chars.by_ref() {
                    if member == ']' {
                        regex.push(']');
                        break;
                    }
                    if member == '\\' || member == '[' {
                        regex.push('\\');
                    }
                    regex.push(member);
                }
            }
            other => regex.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    regex.push('$');
    regex
}
