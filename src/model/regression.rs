/// Minimum number of complete (x, y) pairs required for a line.
pub const MIN_FIT_PAIRS: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("series length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("singular design: all {n} valid x values are zero")]
    SingularDesign { n: usize },
}

/// Degree-1 least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub n_valid: usize,
}

impl LinearFit {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Pairs where neither coordinate is `NaN`, in series order.
pub fn valid_pairs(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .collect()
}

/// Fits a line over the complete pairs of `x` and `y`.
///
/// Returns `Ok(None)` when either series is empty or fewer than
/// [`MIN_FIT_PAIRS`] complete pairs remain after masking.
pub fn fit_masked(x: &[f64], y: &[f64]) -> Result<Option<LinearFit>, FitError> {
    if x.is_empty() || y.is_empty() {
        return Ok(None);
    }
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    let pairs = valid_pairs(x, y);
    if pairs.len() < MIN_FIT_PAIRS {
        return Ok(None);
    }
    least_squares(&pairs)
}

/// Ordinary least squares on complete pairs.
///
/// When every x is identical the system is rank deficient; the result is the
/// minimum-norm solution over column-scaled `[x, 1]`, which passes through
/// `(x0, mean(y))` with `slope = mean(y) / (2 * x0)`. For `x0 == 0` the
/// column scaling divides by zero and the fit fails with
/// [`FitError::SingularDesign`].
pub fn least_squares(pairs: &[(f64, f64)]) -> Result<Option<LinearFit>, FitError> {
    let n = pairs.len();
    if n < MIN_FIT_PAIRS {
        return Ok(None);
    }
    let nf = n as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / nf;

    let mut sxx = 0.0f64;
    let mut sxy = 0.0f64;
    for &(x, y) in pairs {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    let (slope, intercept) = if sxx > 0.0 {
        let slope = sxy / sxx;
        (slope, mean_y - slope * mean_x)
    } else if mean_x != 0.0 {
        (mean_y / (2.0 * mean_x), mean_y / 2.0)
    } else {
        return Err(FitError::SingularDesign { n });
    };

    if !slope.is_finite() || !intercept.is_finite() {
        return Ok(None);
    }

    Ok(Some(LinearFit {
        slope,
        intercept,
        n_valid: n,
    }))
}

/// Evaluates `fit` at every value of the unmasked `x` series, in series order.
///
/// Rows whose y was missing still contribute a vertex, so the drawn line can
/// extend past the range of the fitted pairs. Non-finite x values break the
/// polyline into separate segments.
pub fn fitted_line(fit: &LinearFit, x: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for &xv in x {
        if xv.is_finite() {
            current.push((xv, fit.evaluate(xv)));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Leftmost and rightmost vertices of one straight segment. Every vertex of
/// a fitted segment lies on the same line, so these two cover it exactly.
pub fn segment_extent(segment: &[(f64, f64)]) -> Option<[(f64, f64); 2]> {
    let first = *segment.first()?;
    let mut lo = first;
    let mut hi = first;
    for &p in &segment[1..] {
        if p.0 < lo.0 {
            lo = p;
        }
        if p.0 > hi.0 {
            hi = p;
        }
    }
    Some([lo, hi])
}

/// Line endpoints at the smallest and largest finite x of the unmasked series.
pub fn line_span(fit: &LinearFit, x: &[f64]) -> Option<((f64, f64), (f64, f64))> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &xv in x {
        if xv.is_finite() {
            lo = lo.min(xv);
            hi = hi.max(xv);
        }
    }
    if lo > hi {
        return None;
    }
    Some(((lo, fit.evaluate(lo)), (hi, fit.evaluate(hi))))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/regression.rs"]
mod tests;
