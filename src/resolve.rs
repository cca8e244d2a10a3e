//! Pull request resolution
//!
//! Turns the trigger context into exactly one target pull request number,
//! or fails the run.

use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::store::PullRequestStore;
use tracing::debug;

/// Resolve the target pull request number.
///
/// An explicit number from the trigger payload wins outright. Otherwise
/// the commit association lookup runs, filtered to entries whose source
/// branch equals the triggering ref and whose state is exactly `open`.
/// The upstream API does not document an ordering for the listing, so
/// ties fall to whichever matching entry comes first.
pub async fn resolve_pull_request(
    ctx: &RunContext,
    store: &dyn PullRequestStore,
) -> Result<u64> {
    if let Some(number) = ctx.pr_number {
        debug!(pr_number = number, "using PR number from event payload");
        return Ok(number);
    }

    let prs = store.prs_for_commit(&ctx.sha).await?;

    let found = prs.iter().find(|pr| {
        ctx.git_ref.as_deref() == Some(format!("refs/heads/{}", pr.head_ref).as_str())
            && pr.state == "open"
    });

    match found {
        Some(pr) => {
            debug!(pr_number = pr.number, "resolved PR from commit lookup");
            Ok(pr.number)
        }
        None => Err(Error::NoOpenPullRequest {
            event: ctx.event_name.clone(),
            sha: ctx.sha.clone(),
        }),
    }
}
