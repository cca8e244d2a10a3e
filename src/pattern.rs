//! JavaScript-style pattern handling
//!
//! The action inputs carry patterns with JS regex flags. `BodyPattern`
//! maps those onto the Rust engine and reproduces the two JS behaviors the
//! merge policy depends on: first-vs-all replacement driven by the `g`
//! flag, and the `match.join('')` shape of an extraction result.

use crate::error::{Error, Result};
use regex::{NoExpand, Regex, RegexBuilder};

/// A compiled pattern plus its global flag
#[derive(Debug, Clone)]
pub struct BodyPattern {
    regex: Regex,
    global: bool,
}

impl BodyPattern {
    /// Compile `pattern` with JS-style `flags`.
    ///
    /// Supported flags: `i` (case-insensitive), `m` (multi-line),
    /// `s` (dot matches newline), `g` (global), `u` (accepted, the engine
    /// is Unicode-aware by default). Anything else is rejected.
    pub fn new(pattern: &str, flags: &str) -> Result<Self> {
        let mut builder = RegexBuilder::new(pattern);
        let mut global = false;

        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' => global = true,
                'u' => {}
                other => {
                    return Err(Error::Pattern {
                        pattern: pattern.to_string(),
                        message: format!("unsupported flag `{other}`"),
                    });
                }
            }
        }

        let regex = builder.build().map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { regex, global })
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Whether the `g` flag was set
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Replace the first matched span, or every span with the `g` flag.
    ///
    /// The replacement is inserted literally; `$` sequences in user content
    /// are never expanded.
    pub fn replace(&self, text: &str, replacement: &str) -> String {
        if self.global {
            self.regex
                .replace_all(text, NoExpand(replacement))
                .into_owned()
        } else {
            self.regex.replace(text, NoExpand(replacement)).into_owned()
        }
    }

    /// Join the pieces of a match the way JS `match.join('')` does.
    ///
    /// With `g`: every full match in document order, no separator.
    /// Without `g`: the first match's full text followed by each capture
    /// group in index order; unmatched groups contribute nothing.
    /// Returns `None` when the pattern does not match at all.
    pub fn extract_joined(&self, text: &str) -> Option<String> {
        if self.global {
            let mut joined = String::new();
            let mut matched = false;
            for m in self.regex.find_iter(text) {
                matched = true;
                joined.push_str(m.as_str());
            }
            matched.then_some(joined)
        } else {
            let caps = self.regex.captures(text)?;
            let mut joined = String::new();
            for i in 0..caps.len() {
                if let Some(m) = caps.get(i) {
                    joined.push_str(m.as_str());
                }
            }
            Some(joined)
        }
    }
}
