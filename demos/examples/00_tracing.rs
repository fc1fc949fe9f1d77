use coinscope::Coinscope;
use coinscope_demos::common::{coins, get_store};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,coinscope=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let cs = Coinscope::builder().store(get_store()).build()?;
    let assets = coins()?;

    // Indicators per asset, then the aligned correlation view
    let _ = cs.analyze_batch(&assets).await?;
    let _ = cs.correlation_report(&assets, None).await?;

    tracing::info!(assets = assets.len(), "done");
    Ok(())
}
