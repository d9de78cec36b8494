pub mod figure;
pub mod json;
pub mod layout;
pub mod text;

use serde::Serialize;

use crate::groups::GroupAudit;
use crate::model::panel::PanelFit;

#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub source: String,
    pub n_rows: usize,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FitSummary {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelSummary {
    pub variable: String,
    pub group: String,
    pub row: usize,
    pub col: usize,
    pub n_points: usize,
    pub n_valid: usize,
    pub fit: Option<FitSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub input: String,
    pub output: String,
    pub dpi: u32,
    pub figure_px: [u32; 2],
    pub groups: Vec<GroupSummary>,
    pub panels: Vec<PanelSummary>,
}

pub fn group_summary(audit: &GroupAudit) -> GroupSummary {
    GroupSummary {
        name: audit.group.clone(),
        source: audit.source_kind.to_string(),
        n_rows: audit.n_rows,
        columns: audit.columns.clone(),
    }
}

pub fn panel_summary(panel: &PanelFit) -> PanelSummary {
    PanelSummary {
        variable: panel.variable.name().to_string(),
        group: panel.group.clone(),
        row: panel.row,
        col: panel.col,
        n_points: panel.n_points,
        n_valid: panel.n_valid,
        fit: panel.fit.map(|f| FitSummary {
            slope: f.slope,
            intercept: f.intercept,
        }),
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
