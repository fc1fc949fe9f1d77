use coinscope::{Artifact, ChartSink, Coinscope, JsonFileSink};
use coinscope_demos::common::{coins, get_store, init_tracing, output_dir};

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{x:.4}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Latest 1000 snapshots per coin, SMA 10/50 and 20-step volatility.
    let cs = Coinscope::builder().store(get_store()).build()?;
    let sink = JsonFileSink::new(output_dir());

    for asset in coins()? {
        let ind = match cs.analyze(&asset).await {
            Ok(ind) => ind,
            Err(e) => {
                println!("{asset}: skipped ({e})");
                continue;
            }
        };

        // 2. Print the most recent point.
        if let Some(last) = ind.last() {
            println!(
                "{:<15} {} price={:.4} sma{}={} sma{}={} vol{}={}",
                asset,
                last.ts.format("%Y-%m-%d %H:%M"),
                last.price,
                ind.windows.short,
                fmt_opt(last.sma_short),
                ind.windows.long,
                fmt_opt(last.sma_long),
                ind.windows.volatility,
                fmt_opt(last.volatility),
            );
        }

        // 3. One artifact per chart.
        let title = asset.as_str().to_uppercase();
        let sma = sink.render(&format!("{title} price and SMA"), &Artifact::PriceSma(&ind))?;
        let vol = sink.render(&format!("{title} volatility"), &Artifact::Volatility(&ind))?;
        println!("  wrote {} and {}", sma.display(), vol.display());
    }

    Ok(())
}
