//! Binary entrypoint for the pr-body-update action

use pr_body_update::config::Config;
use pr_body_update::context::RunContext;
use pr_body_update::error::Result;
use pr_body_update::store::GitHubStore;
use pr_body_update::subscription::validate_subscription;
use pr_body_update::update::update_pull_request_body;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    let ctx = RunContext::from_env()?;

    validate_subscription(&ctx).await;

    let store = GitHubStore::new(&config.token, ctx.owner.clone(), ctx.repo.clone())?;
    update_pull_request_body(&config, &ctx, &store).await
}
