//! Run orchestration
//!
//! The sequential flow of a run: resolve the target PR, fetch its body,
//! resolve the content, decide the merge, persist. One status line per
//! merge branch, one write at most.

use crate::config::Config;
use crate::content::resolve_content;
use crate::context::RunContext;
use crate::error::Result;
use crate::merge::{MergeDecision, decide};
use crate::pattern::BodyPattern;
use crate::resolve::resolve_pull_request;
use crate::store::PullRequestStore;
use tracing::info;

/// Update the target pull request's description per the configured policy.
pub async fn update_pull_request_body(
    config: &Config,
    ctx: &RunContext,
    store: &dyn PullRequestStore,
) -> Result<()> {
    let pr_number = resolve_pull_request(ctx, store).await?;

    let current = store.pr_body(pr_number).await?.unwrap_or_default();
    let content = resolve_content(config)?;
    let pattern = BodyPattern::new(&config.regex, &config.regex_flags)?;

    let body = match decide(&current, &content, &pattern, config.append_on_match_only()) {
        MergeDecision::Replace(body) => {
            info!("Match found in PR body. Replacing matched section.");
            body
        }
        MergeDecision::Append(body) => {
            info!("Appending content to PR body.");
            body
        }
        MergeDecision::Set(body) => {
            info!("Setting PR body to new content.");
            body
        }
        MergeDecision::Skip => {
            info!("No match and appendContentOnMatchOnly is true. Skipping update.");
            return Ok(());
        }
    };

    info!("new PR description: {body}");
    store.set_pr_body(pr_number, &body).await?;
    info!("Pull request body updated successfully.");
    Ok(())
}
