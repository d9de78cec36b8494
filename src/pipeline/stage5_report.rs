use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::groups::GroupAudit;
use crate::model::panel::PanelFit;
use crate::report::json::render_summary_json;
use crate::report::layout::FigureSpec;
use crate::report::text::render_fit_report;
use crate::report::{SummaryData, group_summary, panel_summary};

#[derive(Debug, Clone, Default)]
pub struct ReportTargets {
    pub summary: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub audits: &'a [GroupAudit],
    pub panels: &'a [PanelFit],
    pub spec: &'a FigureSpec,
    pub input_path: &'a Path,
    pub output_path: &'a Path,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let (w, h) = input.spec.pixel_size();
    SummaryData {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        input: input.input_path.display().to_string(),
        output: input.output_path.display().to_string(),
        dpi: input.spec.dpi,
        figure_px: [w, h],
        groups: input.audits.iter().map(group_summary).collect(),
        panels: input.panels.iter().map(panel_summary).collect(),
    }
}

pub fn write_reports(input: &Stage5Input<'_>, targets: &ReportTargets) -> std::io::Result<()> {
    if targets.summary.is_none() && targets.report.is_none() {
        return Ok(());
    }
    let summary = build_summary(input);

    if let Some(path) = &targets.summary {
        let json = render_summary_json(&summary)?;
        write_text(path, &json)?;
        tracing::info!(path = %path.display(), "wrote summary");
    }
    if let Some(path) = &targets.report {
        write_text(path, &render_fit_report(&summary))?;
        tracing::info!(path = %path.display(), "wrote fit report");
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
