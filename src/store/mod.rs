//! Pull request store
//!
//! Abstracts the remote pull request operations the run needs, so the
//! resolution and update logic can be exercised against a mock.

mod github;

pub use github::GitHubStore;

use crate::error::Result;
use async_trait::async_trait;

/// A pull request entry as returned by the commit association lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPullRequest {
    /// PR number
    pub number: u64,
    /// Source branch name (without the `refs/heads/` prefix)
    pub head_ref: String,
    /// PR state as reported by the store (e.g. "open", "closed")
    pub state: String,
}

/// Remote pull request operations consumed by a run
#[async_trait]
pub trait PullRequestStore: Send + Sync {
    /// List pull requests associated with a commit, in store order
    async fn prs_for_commit(&self, sha: &str) -> Result<Vec<CommitPullRequest>>;

    /// Fetch the current description of a pull request
    async fn pr_body(&self, number: u64) -> Result<Option<String>>;

    /// Replace the whole description of a pull request
    async fn set_pr_body(&self, number: u64, body: &str) -> Result<()>;
}
