//! Residual listing and distribution report.
//!
//! The listing supports the equal-variance check (residuals spread evenly
//! around zero across x) and the histogram supports the normality check, the
//! two assumptions an exploratory regression is eyeballed against.

use clap::Args;
use trendline_stats::histogram::Histogram;

use crate::command::DatasetArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct ResidualsArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Number of histogram bins
    #[arg(long, default_value_t = 5)]
    pub bins: usize,
}

pub(crate) fn run(arg: &ResidualsArg) -> anyhow::Result<()> {
    let report = arg.dataset.analyze()?;

    println!(
        "Residuals: {} vs {}",
        arg.dataset.x_column, arg.dataset.y_column
    );
    println!("==========================================\n");

    println!("{:>14}  {:>14}", arg.dataset.x_column, "residual");
    for (x, residual) in report
        .sample
        .x()
        .iter()
        .zip(&report.diagnostics.residuals)
    {
        println!("{x:>14.6}  {residual:>14.6}");
    }
    println!();
    println!(
        "residual std dev (population): {:.6}",
        report.diagnostics.residual_std_dev
    );
    println!();

    let histogram = Histogram::new(report.diagnostics.residuals.iter().copied(), arg.bins);
    let max_count = histogram.max_count().max(1);
    println!("Histogram ({} bins):", arg.bins);
    for bin in &histogram.bins {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        let bar_len = ((bin.count as f64 / max_count as f64) * 40.0).round() as usize;
        println!(
            "[{:>10.4}, {:>10.4})  {:<40} {}",
            bin.range.start,
            bin.range.end,
            "#".repeat(bar_len),
            bin.count
        );
    }

    Ok(())
}
