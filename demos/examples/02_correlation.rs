use coinscope::{Artifact, ChartSink, Coinscope, Correlation, JsonFileSink};
use coinscope_demos::common::{coins, get_store, init_tracing, output_dir};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Latest 500 snapshots per coin on a two-minute grid, 50-step rolling window.
    let cs = Coinscope::builder().store(get_store()).build()?;
    let assets = coins()?;
    let report = cs.correlation_report(&assets, None).await?;

    println!(
        "aligned {} rows x {} assets (step {}s)",
        report.table.len(),
        report.table.assets().len(),
        report.table.step().as_secs()
    );
    for a in report.table.assets() {
        println!("  {a}: {} stale cells", report.table.stale_count(a.as_str())?);
    }

    // 2. Correlation matrix.
    print!("\n{:<15}", "");
    for a in report.matrix.assets() {
        print!("{:>15}", a.as_str());
    }
    println!();
    for (a, row) in report.matrix.assets().iter().zip(report.matrix.rows()) {
        print!("{:<15}", a.as_str());
        for c in row {
            match c {
                Correlation::Coefficient(v) => print!("{v:>15.4}"),
                Correlation::Undefined => print!("{:>15}", "undefined"),
            }
        }
        println!();
    }

    // 3. Rolling correlation summary per pair.
    for r in &report.rolling {
        let values = r.coefficients();
        if let Some((ts, v)) = values.last() {
            println!(
                "\nrolling {}/{} (w={}): {} values, last {v:.4} at {}",
                r.asset_a,
                r.asset_b,
                r.window,
                values.len(),
                ts.format("%Y-%m-%d %H:%M")
            );
        }
    }
    for w in &report.warnings {
        println!("warning: {w}");
    }

    // 4. Artifacts.
    let sink = JsonFileSink::new(output_dir());
    sink.render("Aligned prices", &Artifact::Table(&report.table))?;
    sink.render("Coin correlation", &Artifact::Matrix(&report.matrix))?;
    for r in &report.rolling {
        sink.render(
            &format!("Rolling correlation {} / {}", r.asset_a, r.asset_b),
            &Artifact::Rolling(r),
        )?;
    }
    println!("\nartifacts in {}", sink.dir().display());

    Ok(())
}
