//! Line-of-best-fit report.

use std::{fs::File, path::PathBuf};

use anyhow::Context;
use clap::Args;

use crate::command::DatasetArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct FitArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Write the full analysis report to this path as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub(crate) fn run(arg: &FitArg) -> anyhow::Result<()> {
    let report = arg.dataset.analyze()?;

    println!(
        "Line of Best Fit: {} vs {}",
        arg.dataset.x_column, arg.dataset.y_column
    );
    println!("==========================================\n");

    println!(
        "observations: {} ({} after outlier removal)",
        report.observations_total, report.observations_used
    );
    println!();

    println!("y = {}x + {}", report.fit.slope, report.fit.intercept);
    println!();

    println!("correlation (r): {}", report.fit.correlation);
    println!("standard error:  {}", report.fit.standard_error);
    println!("p-value:         {}", report.fit.p_value);

    println!();
    println!("x: mean = {:.6}, std dev = {:.6}", report.diagnostics.x.mean, report.diagnostics.x.std_dev);
    println!(
        "   Q1 = {:.6}, Q3 = {:.6}, fence = [{:.6}, {:.6}]",
        report.diagnostics.x.quartiles.q1,
        report.diagnostics.x.quartiles.q3,
        report.diagnostics.x.fence.lower,
        report.diagnostics.x.fence.upper
    );
    println!("y: mean = {:.6}, std dev = {:.6}", report.diagnostics.y.mean, report.diagnostics.y.std_dev);
    println!(
        "   Q1 = {:.6}, Q3 = {:.6}, fence = [{:.6}, {:.6}]",
        report.diagnostics.y.quartiles.q1,
        report.diagnostics.y.quartiles.q3,
        report.diagnostics.y.fence.lower,
        report.diagnostics.y.fence.upper
    );

    if let Some(path) = &arg.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}
