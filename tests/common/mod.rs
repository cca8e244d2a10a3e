//! Shared test fixtures
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

mod mock_store;

pub use mock_store::{MockPullRequestStore, SetBodyCall};

use pr_body_update::config::Config;
use pr_body_update::context::RunContext;
use pr_body_update::store::CommitPullRequest;

/// Config with only `content` set and all other inputs at their defaults
pub fn test_config(content: &str) -> Config {
    Config {
        content: content.to_string(),
        content_is_file_path: String::new(),
        content_regex: String::new(),
        content_regex_flags: String::new(),
        regex: "---.*".to_string(),
        regex_flags: String::new(),
        append_content_on_match_only: String::new(),
        token: "test-token".to_string(),
    }
}

/// Context for a push at a known commit, no explicit PR number
pub fn push_context(git_ref: &str, sha: &str) -> RunContext {
    RunContext {
        owner: "octo".to_string(),
        repo: "repo".to_string(),
        event_name: "push".to_string(),
        sha: sha.to_string(),
        git_ref: Some(git_ref.to_string()),
        pr_number: None,
    }
}

/// Context for a pull_request event carrying an explicit PR number
pub fn pr_event_context(pr_number: u64) -> RunContext {
    RunContext {
        owner: "octo".to_string(),
        repo: "repo".to_string(),
        event_name: "pull_request".to_string(),
        sha: "abc1234".to_string(),
        git_ref: None,
        pr_number: Some(pr_number),
    }
}

/// A listing entry for the commit association lookup
pub fn make_commit_pr(number: u64, head_ref: &str, state: &str) -> CommitPullRequest {
    CommitPullRequest {
        number,
        head_ref: head_ref.to_string(),
        state: state.to_string(),
    }
}
