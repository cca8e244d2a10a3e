//! Trigger context for a single run
//!
//! The GitHub Actions runner exposes the trigger through `GITHUB_*`
//! environment variables plus an event payload file. Everything relevant
//! is captured once into an immutable `RunContext` and passed explicitly;
//! nothing downstream reads the environment again.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;

/// Immutable snapshot of the triggering event
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Triggering event name (e.g. "push", "pull_request")
    pub event_name: String,
    /// Commit SHA the workflow ran for
    pub sha: String,
    /// Fully-qualified ref from the event payload (e.g. "refs/heads/main")
    pub git_ref: Option<String>,
    /// Pull request number when the event carries one directly
    pub pr_number: Option<u64>,
}

impl RunContext {
    /// Build the context from the process environment.
    pub fn from_env() -> Result<Self> {
        let repository = std::env::var("GITHUB_REPOSITORY")
            .map_err(|_| Error::Context("GITHUB_REPOSITORY is not set".to_string()))?;

        let (owner, repo) = repository
            .split_once('/')
            .map(|(o, r)| (o.to_string(), r.to_string()))
            .filter(|(o, r)| !o.is_empty() && !r.is_empty())
            .ok_or_else(|| {
                Error::Context(format!(
                    "GITHUB_REPOSITORY must be owner/repo, got `{repository}`"
                ))
            })?;

        let event_name = std::env::var("GITHUB_EVENT_NAME").unwrap_or_default();
        let sha = std::env::var("GITHUB_SHA").unwrap_or_default();

        // A missing or unreadable payload file degrades to an empty payload,
        // same as the actions toolkit.
        let payload = std::env::var("GITHUB_EVENT_PATH")
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .unwrap_or(Value::Null);

        Ok(Self::from_parts(owner, repo, event_name, sha, &payload))
    }

    /// Assemble a context from pre-extracted pieces and an event payload.
    pub fn from_parts(
        owner: String,
        repo: String,
        event_name: String,
        sha: String,
        payload: &Value,
    ) -> Self {
        let pr_number = payload
            .get("pull_request")
            .and_then(|pr| pr.get("number"))
            .and_then(Value::as_u64);

        let git_ref = payload
            .get("ref")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Self {
            owner,
            repo,
            event_name,
            sha,
            git_ref,
            pr_number,
        }
    }
}
