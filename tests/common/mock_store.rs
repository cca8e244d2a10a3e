//! Mock pull request store for testing
//!
//! Manually implements `PullRequestStore` with configurable responses,
//! call tracking for verification, and error injection for failure-path
//! testing.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_body_update::error::{Error, Result};
use pr_body_update::store::{CommitPullRequest, PullRequestStore};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `set_pr_body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBodyCall {
    pub number: u64,
    pub body: String,
}

/// Simple mock store for testing
#[derive(Default)]
pub struct MockPullRequestStore {
    commit_pr_responses: Mutex<HashMap<String, Vec<CommitPullRequest>>>,
    body_responses: Mutex<HashMap<u64, Option<String>>>,
    // Call tracking
    list_calls: Mutex<Vec<String>>,
    body_calls: Mutex<Vec<u64>>,
    set_body_calls: Mutex<Vec<SetBodyCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_body: Mutex<Option<String>>,
    error_on_set_body: Mutex<Option<String>>,
}

impl MockPullRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Response configuration ===

    /// Set the listing returned for a commit SHA
    pub fn set_commit_prs(&self, sha: &str, prs: Vec<CommitPullRequest>) {
        self.commit_pr_responses
            .lock()
            .unwrap()
            .insert(sha.to_string(), prs);
    }

    /// Set the body returned for a PR number (`None` = absent body)
    pub fn set_body_response(&self, number: u64, body: Option<&str>) {
        self.body_responses
            .lock()
            .unwrap()
            .insert(number, body.map(ToString::to_string));
    }

    // === Error injection ===

    /// Make `prs_for_commit` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `pr_body` return an error
    pub fn fail_body(&self, msg: &str) {
        *self.error_on_body.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `set_pr_body` return an error
    pub fn fail_set_body(&self, msg: &str) {
        *self.error_on_set_body.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    /// SHAs that `prs_for_commit` was called with
    pub fn get_list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    /// PR numbers that `pr_body` was called with
    pub fn get_body_calls(&self) -> Vec<u64> {
        self.body_calls.lock().unwrap().clone()
    }

    /// All `set_pr_body` calls
    pub fn get_set_body_calls(&self) -> Vec<SetBodyCall> {
        self.set_body_calls.lock().unwrap().clone()
    }

    /// Assert that `set_pr_body` was called exactly once with these args
    pub fn assert_body_set(&self, number: u64, body: &str) {
        let calls = self.get_set_body_calls();
        assert_eq!(
            calls,
            vec![SetBodyCall {
                number,
                body: body.to_string(),
            }],
            "Expected a single set_pr_body({number}, {body:?}) call"
        );
    }

    /// Assert that no update was persisted
    pub fn assert_no_update(&self) {
        let calls = self.get_set_body_calls();
        assert!(
            calls.is_empty(),
            "Expected no set_pr_body calls but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PullRequestStore for MockPullRequestStore {
    async fn prs_for_commit(&self, sha: &str) -> Result<Vec<CommitPullRequest>> {
        self.list_calls.lock().unwrap().push(sha.to_string());

        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.commit_pr_responses.lock().unwrap();
        Ok(responses.get(sha).cloned().unwrap_or_default())
    }

    async fn pr_body(&self, number: u64) -> Result<Option<String>> {
        self.body_calls.lock().unwrap().push(number);

        if let Some(msg) = self.error_on_body.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.body_responses.lock().unwrap();
        Ok(responses.get(&number).cloned().flatten())
    }

    async fn set_pr_body(&self, number: u64, body: &str) -> Result<()> {
        self.set_body_calls.lock().unwrap().push(SetBodyCall {
            number,
            body: body.to_string(),
        });

        if let Some(msg) = self.error_on_set_body.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(())
    }
}
