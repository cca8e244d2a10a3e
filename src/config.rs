//! Action input configuration
//!
//! Inputs arrive through the `INPUT_*` environment variables that GitHub
//! Actions sets for each declared input. Flags may also be passed on the
//! command line, which is convenient for local runs.

use crate::error::{Error, Result};
use clap::Parser;

/// Default primary pattern when the `regex` input is empty.
pub const DEFAULT_REGEX: &str = "---.*";

/// Raw action inputs as clap sees them
#[derive(Debug, Parser)]
#[command(
    name = "pr-body-update",
    about = "Update a pull request description by regex match, append, or replace",
    version
)]
pub struct RawInputs {
    /// Literal content, or a file path when --content-is-file-path is "true"
    #[arg(long, env = "INPUT_CONTENT")]
    pub content: Option<String>,

    /// "true" to read content from the file at --content
    #[arg(long, env = "INPUT_CONTENTISFILEPATH", default_value = "")]
    pub content_is_file_path: String,

    /// Optional extraction pattern applied to the resolved content
    #[arg(long, env = "INPUT_CONTENTREGEX", default_value = "")]
    pub content_regex: String,

    /// Flags for the extraction pattern (JS-style: i, m, s, g)
    #[arg(long, env = "INPUT_CONTENTREGEXFLAGS", default_value = "")]
    pub content_regex_flags: String,

    /// Primary pattern locating the region of the description to replace
    #[arg(long, env = "INPUT_REGEX", default_value = "")]
    pub regex: String,

    /// Flags for the primary pattern (JS-style: i, m, s, g)
    #[arg(long, env = "INPUT_REGEXFLAGS", default_value = "")]
    pub regex_flags: String,

    /// "true" to skip the update entirely when the primary pattern does not match
    #[arg(long, env = "INPUT_APPENDCONTENTONMATCHONLY", default_value = "")]
    pub append_content_on_match_only: String,

    /// Token for the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Validated, immutable configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Literal content or file path. Never trimmed.
    pub content: String,
    /// Boolean-as-string; `"true"` enables the file read
    pub content_is_file_path: String,
    /// Secondary extraction pattern ("" = disabled)
    pub content_regex: String,
    /// Flags for the extraction pattern
    pub content_regex_flags: String,
    /// Primary match/replace pattern
    pub regex: String,
    /// Flags for the primary pattern
    pub regex_flags: String,
    /// Boolean-as-string; `"true"` disables append-on-no-match
    pub append_content_on_match_only: String,
    /// Credential for the pull request store
    pub token: String,
}

impl Config {
    /// Parse inputs from the process environment and command line.
    pub fn load() -> Result<Self> {
        Self::from_inputs(RawInputs::parse())
    }

    /// Validate raw inputs into a `Config`.
    ///
    /// `content` keeps its whitespace verbatim; every other input is
    /// trimmed, matching the upstream action-input semantics.
    pub fn from_inputs(raw: RawInputs) -> Result<Self> {
        let content = raw
            .content
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::Input("content is required".to_string()))?;

        let token = raw
            .token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Input("token is required".to_string()))?;

        let regex = match raw.regex.trim() {
            "" => DEFAULT_REGEX.to_string(),
            r => r.to_string(),
        };

        Ok(Self {
            content,
            content_is_file_path: raw.content_is_file_path.trim().to_string(),
            content_regex: raw.content_regex.trim().to_string(),
            content_regex_flags: raw.content_regex_flags.trim().to_string(),
            regex,
            regex_flags: raw.regex_flags.trim().to_string(),
            append_content_on_match_only: raw.append_content_on_match_only.trim().to_string(),
            token,
        })
    }

    /// Whether `content` names a file to read instead of literal text
    pub fn content_is_file_path(&self) -> bool {
        self.content_is_file_path == "true"
    }

    /// Whether the no-match branch must skip instead of append
    pub fn append_on_match_only(&self) -> bool {
        self.append_content_on_match_only == "true"
    }
}
