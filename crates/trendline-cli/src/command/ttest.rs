//! Slope significance report.

use clap::Args;

use crate::command::DatasetArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct TtestArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,
}

pub(crate) fn run(arg: &TtestArg) -> anyhow::Result<()> {
    let report = arg.dataset.analyze()?;
    let ttest = &report.ttest;

    println!(
        "Slope t-test: {} vs {}",
        arg.dataset.x_column, arg.dataset.y_column
    );
    println!("==========================================\n");

    println!("SE = {}", ttest.standard_error);
    println!("b1 = {}", report.fit.slope);
    println!("df = {}", ttest.degrees_of_freedom);
    println!("t-statistic: {}", ttest.t_statistic);
    println!("p-value: {}", ttest.p_value);

    Ok(())
}
