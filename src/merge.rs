//! Merge policy for the pull request description
//!
//! A pure decision over the current body, the resolved content, and the
//! primary pattern. Effects (status lines, the API write) happen in the
//! orchestration layer.

use crate::pattern::BodyPattern;

/// Outcome of the single merge transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDecision {
    /// Pattern matched: the matched span(s) were substituted
    Replace(String),
    /// No match, body non-empty: content concatenated onto the body
    Append(String),
    /// No match, body empty: content becomes the body verbatim
    Set(String),
    /// No match and append-only mode: nothing is persisted
    Skip,
}

impl MergeDecision {
    /// The body to persist, or `None` when the run skips the update
    pub fn new_body(&self) -> Option<&str> {
        match self {
            Self::Replace(body) | Self::Append(body) | Self::Set(body) => Some(body),
            Self::Skip => None,
        }
    }
}

/// Decide the resulting description.
///
/// A pattern match always substitutes, regardless of `append_only`.
/// Without a match, `append_only` suppresses the update entirely;
/// otherwise the content is appended (no separator) or, for an empty
/// body, used as-is.
pub fn decide(
    current: &str,
    content: &str,
    pattern: &BodyPattern,
    append_only: bool,
) -> MergeDecision {
    if pattern.is_match(current) {
        MergeDecision::Replace(pattern.replace(current, content))
    } else if append_only {
        MergeDecision::Skip
    } else if current.is_empty() {
        MergeDecision::Set(content.to_string())
    } else {
        MergeDecision::Append(format!("{current}{content}"))
    }
}
