use labelscrape::{run, HttpFetcher, ScrapeConfig, TracingObserver};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labelscrape=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ScrapeConfig::default();
    let fetcher = HttpFetcher::new(&config);

    let summary = run(&config, &fetcher, &mut TracingObserver)?;
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        empty = summary.empty,
        "done"
    );

    Ok(())
}
