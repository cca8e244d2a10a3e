//! Subscription probe
//!
//! One bounded GET against the licensing endpoint before the main
//! operation. Only an explicit 403 is treated as a denial; network
//! failures, timeouts, and any other error status never block the run.

use crate::context::RunContext;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, info};

const PROBE_TIMEOUT: Duration = Duration::from_millis(3000);

/// How a probe response is acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Subscription accepted, nothing to log
    Valid,
    /// Explicit 403: the run must terminate
    Denied,
    /// Timeout, transport failure, or any other error status: log and continue
    Unreachable,
}

/// Classify a probe result. `None` means the request never produced a
/// response (timeout or transport failure).
pub fn classify_probe(status: Option<StatusCode>) -> ProbeOutcome {
    match status {
        Some(StatusCode::FORBIDDEN) => ProbeOutcome::Denied,
        Some(status) if status.is_success() => ProbeOutcome::Valid,
        _ => ProbeOutcome::Unreachable,
    }
}

/// Probe the subscription endpoint for this repository.
///
/// Terminates the process with exit code 1 on an explicit 403. Every
/// other outcome (timeout, connection failure, any other status) is
/// logged and the run continues.
pub async fn validate_subscription(ctx: &RunContext) {
    let url = format!(
        "https://agent.api.stepsecurity.io/v1/github/{}/{}/actions/subscription",
        ctx.owner, ctx.repo
    );

    let status = Client::new()
        .get(&url)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await
        .ok()
        .map(|resp| resp.status());

    match classify_probe(status) {
        ProbeOutcome::Denied => {
            error!("Subscription is not valid. Reach out to support@stepsecurity.io");
            std::process::exit(1);
        }
        ProbeOutcome::Unreachable => {
            info!("Timeout or API not reachable. Continuing to next step.");
        }
        ProbeOutcome::Valid => {}
    }
}
