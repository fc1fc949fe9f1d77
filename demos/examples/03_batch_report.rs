use coinscope::{AssetId, Coinscope};
use coinscope_demos::common::{coins, get_store, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cs = Coinscope::builder().store(get_store()).build()?;

    // 1. Batch with one asset that has no stored data: it becomes a warning.
    let mut assets = coins()?;
    assets.push(AssetId::new("no-such-coin")?);
    let report = cs.analyze_batch(&assets).await?;
    println!(
        "analyzed {} assets, {} failed",
        report.entries.len(),
        report.warnings.len()
    );
    for w in &report.warnings {
        println!("  {}: {}", w.asset, w.error);
    }

    // 2. Latest snapshot and recent deviation for each successful asset.
    for entry in &report.entries {
        let latest = cs.latest(&entry.asset).await?;
        let dev = cs.deviation(&entry.asset, 100).await?;
        println!(
            "{:<15} price={:.4} 24h={} stddev({})={:.6}",
            entry.asset,
            latest.price,
            latest
                .change_24h
                .map_or_else(|| "-".to_string(), |c| format!("{c:+.2}%")),
            dev.samples,
            dev.stddev
        );
    }

    // 3. Second page of stored snapshots, newest first.
    if let Some(first) = report.entries.first() {
        let page = cs.history(&first.asset, 2, 5).await?;
        println!(
            "history {} page {}/{}: {} of {} snapshots",
            page.asset,
            page.page,
            page.pages,
            page.data.len(),
            page.total
        );
    }

    Ok(())
}
