//! Error types for pr-body-update

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All error cases for a single run
#[derive(Debug, Error)]
pub enum Error {
    /// A required action input is missing or malformed
    #[error("input error: {0}")]
    Input(String),

    /// The trigger context is incomplete or malformed
    #[error("context error: {0}")]
    Context(String),

    /// No open pull request could be resolved for the triggering commit
    #[error("{event} at commit {sha} has no associated open pull request")]
    NoOpenPullRequest {
        /// Triggering event name (e.g. "push")
        event: String,
        /// Commit SHA used for the lookup
        sha: String,
    },

    /// The content file could not be read
    #[error("failed to read content file `{path}`: {source}")]
    ContentFile {
        /// Path given via the `content` input
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A regex input failed to compile or carried an unsupported flag
    #[error("invalid pattern `{pattern}`: {message}")]
    Pattern {
        /// The pattern as given in the input
        pattern: String,
        /// Compile error or flag diagnostic
        message: String,
    },

    /// GitHub API failure outside octocrab's typed surface
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// octocrab-level API failure
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
