use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use trendline_analysis::{
    outlier::OutlierPolicy,
    pipeline::{AnalysisReport, PipelineConfig},
    transform::Transform,
};

use crate::data;

mod fit;
mod residuals;
mod ttest;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Fit the line of best fit and report its quality
    Fit(#[clap(flatten)] fit::FitArg),
    /// Report residuals and their distribution
    Residuals(#[clap(flatten)] residuals::ResidualsArg),
    /// Test whether the slope differs significantly from zero
    Ttest(#[clap(flatten)] ttest::TtestArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Fit(arg) => fit::run(&arg)?,
        Mode::Residuals(arg) => residuals::run(&arg)?,
        Mode::Ttest(arg) => ttest::run(&arg)?,
    }
    Ok(())
}

/// Dataset selection and pipeline configuration shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the CSV file
    pub csv: PathBuf,

    /// Name of the column providing the x values
    #[arg(long)]
    pub x_column: String,

    /// Name of the column providing the y values
    #[arg(long)]
    pub y_column: String,

    /// Analyze on the natural-log scale (both axes)
    #[arg(long)]
    pub log: bool,

    /// Keep y outliers instead of removing them
    #[arg(long)]
    pub keep_outliers: bool,

    /// IQR multiplier defining the outlier fence
    #[arg(long, default_value_t = 1.5)]
    pub fence_multiplier: f64,
}

impl DatasetArg {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            transform: if self.log {
                Transform::NaturalLog
            } else {
                Transform::Identity
            },
            outlier_policy: if self.keep_outliers {
                OutlierPolicy::None
            } else {
                OutlierPolicy::IqrFence {
                    multiplier: self.fence_multiplier,
                }
            },
        }
    }

    /// Loads the dataset and runs the configured pipeline over it.
    pub(crate) fn analyze(&self) -> anyhow::Result<AnalysisReport> {
        let (x, y) = data::load_columns(&self.csv, &self.x_column, &self.y_column)?;
        self.config().run(&x, &y).with_context(|| {
            format!(
                "analysis of {} ({} vs {}) failed",
                self.csv.display(),
                self.x_column,
                self.y_column
            )
        })
    }
}
