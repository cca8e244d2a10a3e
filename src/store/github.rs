//! GitHub pull request store implementation

use crate::error::{Error, Result};
use crate::store::{CommitPullRequest, PullRequestStore};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const API_HOST: &str = "api.github.com";

// Response shape for the commits/{sha}/pulls endpoint, which octocrab
// does not expose.

#[derive(Deserialize)]
struct CommitPrEntry {
    number: u64,
    head: CommitPrHead,
    state: String,
}

#[derive(Deserialize)]
struct CommitPrHead {
    #[serde(rename = "ref")]
    ref_field: String,
}

impl From<CommitPrEntry> for CommitPullRequest {
    fn from(entry: CommitPrEntry) -> Self {
        Self {
            number: entry.number,
            head_ref: entry.head.ref_field,
            state: entry.state,
        }
    }
}

/// GitHub store using octocrab
pub struct GitHubStore {
    client: Octocrab,
    owner: String,
    repo: String,
    /// Token for raw HTTP requests (commit association lookup)
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
}

impl GitHubStore {
    /// Create a new GitHub store
    pub fn new(token: &str, owner: String, repo: String) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("pr-body-update")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            owner,
            repo,
            token: token.to_string(),
            http_client,
        })
    }
}

#[async_trait]
impl PullRequestStore for GitHubStore {
    async fn prs_for_commit(&self, sha: &str) -> Result<Vec<CommitPullRequest>> {
        debug!(sha, "listing pull requests for commit");

        let url = format!(
            "https://{API_HOST}/repos/{}/{}/commits/{sha}/pulls",
            self.owner, self.repo
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to list pull requests: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Listing pull requests for commit {sha} returned {}",
                response.status()
            )));
        }

        let entries: Vec<CommitPrEntry> = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse pull request list: {e}")))?;

        let result: Vec<CommitPullRequest> = entries.into_iter().map(Into::into).collect();
        debug!(sha, count = result.len(), "listed pull requests for commit");
        Ok(result)
    }

    async fn pr_body(&self, number: u64) -> Result<Option<String>> {
        debug!(pr_number = number, "fetching PR body");
        let pr = self.client.pulls(&self.owner, &self.repo).get(number).await?;
        Ok(pr.body)
    }

    async fn set_pr_body(&self, number: u64, body: &str) -> Result<()> {
        debug!(pr_number = number, "updating PR body");
        self.client
            .pulls(&self.owner, &self.repo)
            .update(number)
            .body(body)
            .send()
            .await?;
        debug!(pr_number = number, "updated PR body");
        Ok(())
    }
}
