use crate::groups::{GroupSeries, Trait};
use crate::model::panel::{PanelFit, fit_panel};
use crate::model::regression::{FitError, line_span};

/// Fits every (trait, group) panel, row-major: traits are rows, groups columns.
pub fn run_stage3(groups: &[GroupSeries]) -> Result<Vec<PanelFit>, FitError> {
    let mut out = Vec::with_capacity(Trait::ALL.len() * groups.len());
    for (row, &variable) in Trait::ALL.iter().enumerate() {
        for (col, group) in groups.iter().enumerate() {
            let panel = fit_panel(row, col, variable, group)?;
            match &panel.fit {
                Some(fit) => {
                    if let Some(((x_lo, _), (x_hi, _))) = line_span(fit, &group.green_area_ratio) {
                        tracing::debug!(
                            variable = variable.name(),
                            group = %group.name,
                            slope = fit.slope,
                            intercept = fit.intercept,
                            x_lo,
                            x_hi,
                            "fitted trend line"
                        );
                    }
                }
                None => tracing::debug!(
                    variable = variable.name(),
                    group = %group.name,
                    valid_pairs = panel.n_valid,
                    "too few complete pairs; scatter only"
                ),
            }
            out.push(panel);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_fit.rs"]
mod tests;
