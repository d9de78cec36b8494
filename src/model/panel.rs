use crate::groups::{GroupSeries, Trait};
use crate::model::regression::{FitError, LinearFit, fit_masked, valid_pairs};

/// One grid cell: a trait (row) plotted for a group (column).
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFit {
    pub row: usize,
    pub col: usize,
    pub variable: Trait,
    pub group: String,
    pub n_points: usize,
    pub n_valid: usize,
    pub fit: Option<LinearFit>,
}

pub fn fit_panel(
    row: usize,
    col: usize,
    variable: Trait,
    group: &GroupSeries,
) -> Result<PanelFit, FitError> {
    let x = group.green_area_ratio.as_slice();
    let y = group.trait_series(variable);
    let fit = fit_masked(x, y)?;
    Ok(PanelFit {
        row,
        col,
        variable,
        group: group.name.clone(),
        n_points: x.len(),
        n_valid: valid_pairs(x, y).len(),
        fit,
    })
}
