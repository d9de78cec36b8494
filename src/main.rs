mod groups;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

use std::path::PathBuf;

use clap::Parser;

use crate::groups::defs::plotting_groups;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_groups::run_stage2;
use crate::pipeline::stage3_fit::run_stage3;
use crate::pipeline::stage4_render::{Stage4Input, run_stage4};
use crate::pipeline::stage5_report::{ReportTargets, Stage5Input, write_reports};
use crate::report::layout::FigureSpec;

const DEFAULT_INPUT: &str = "../data/plots_green_ratio_residuals_python.csv";
const DEFAULT_OUTPUT: &str = "../plots/residuals_green_ratio_0407_python.png";
const DEFAULT_DPI: u32 = 400;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "green-residuals",
    version,
    about = "Scatter grid of trait residuals against green area ratio, with per-panel linear fits."
)]
struct RunConfig {
    /// Residuals table (CSV, optionally .gz).
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// PNG output path. The parent directory must exist.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: u32,
    /// Write a JSON summary of groups and fits.
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Write a plain-text fit report.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    logging::init();
    let config = RunConfig::parse();
    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), String> {
    let stage1 = run_stage1(&config.input).map_err(|e| e.to_string())?;

    let defs = plotting_groups();
    let stage2 = run_stage2(&stage1.table, &defs).map_err(|e| e.to_string())?;
    println!("{:?}", stage2.names());

    let panels = run_stage3(&stage2.groups).map_err(|e| e.to_string())?;

    let spec = FigureSpec::publication().with_dpi(config.dpi);
    run_stage4(
        &Stage4Input {
            groups: &stage2.groups,
            panels: &panels,
            spec: &spec,
        },
        &config.out,
    )
    .map_err(|e| e.to_string())?;

    let targets = ReportTargets {
        summary: config.summary.clone(),
        report: config.report.clone(),
    };
    write_reports(
        &Stage5Input {
            audits: &stage2.audits,
            panels: &panels,
            spec: &spec,
            input_path: &config.input,
            output_path: &config.out,
            tool_name: "green-residuals".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        &targets,
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
