use std::path::Path;

use crate::groups::GroupSeries;
use crate::model::panel::PanelFit;
use crate::report::figure::{RenderError, render_figure};
use crate::report::layout::FigureSpec;

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub groups: &'a [GroupSeries],
    pub panels: &'a [PanelFit],
    pub spec: &'a FigureSpec,
}

pub fn run_stage4(input: &Stage4Input<'_>, out_path: &Path) -> Result<(), RenderError> {
    let fitted = input.panels.iter().filter(|p| p.fit.is_some()).count();
    tracing::info!(
        panels = input.panels.len(),
        fitted,
        columns = input.groups.len(),
        "rendering residual grid"
    );
    render_figure(out_path, input.spec, input.groups, input.panels)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_render.rs"]
mod tests;
