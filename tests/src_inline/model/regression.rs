use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_identity_fit() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 2.0, 3.0];
    let fit = fit_masked(&x, &y).unwrap().unwrap();
    assert!(approx(fit.slope, 1.0));
    assert!(approx(fit.intercept, 0.0));
    assert_eq!(fit.n_valid, 4);

    let ((x0, y0), (x1, y1)) = line_span(&fit, &x).unwrap();
    assert_eq!(x0, 0.0);
    assert_eq!(x1, 3.0);
    assert!(approx(y0, fit.evaluate(0.0)));
    assert!(approx(y1, fit.evaluate(3.0)));
}

#[test]
fn test_known_slope_and_intercept() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y: Vec<f64> = x.iter().map(|v| -0.5 * v + 2.0).collect();
    let fit = fit_masked(&x, &y).unwrap().unwrap();
    assert!(approx(fit.slope, -0.5));
    assert!(approx(fit.intercept, 2.0));
}

#[test]
fn test_noisy_fit_matches_closed_form() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 4.0];
    let fit = fit_masked(&x, &y).unwrap().unwrap();
    assert!(approx(fit.slope, 1.5));
    assert!(approx(fit.intercept, 5.0 / 6.0));
}

#[test]
fn test_missing_values_masked_but_line_spans_all_x() {
    let nan = f64::NAN;
    let x = [0.0, 1.0, 2.0, nan];
    let y = [0.0, 1.0, nan, 3.0];

    assert_eq!(valid_pairs(&x, &y), vec![(0.0, 0.0), (1.0, 1.0)]);

    let fit = fit_masked(&x, &y).unwrap().unwrap();
    assert_eq!(fit.n_valid, 2);
    assert!(approx(fit.slope, 1.0));
    assert!(approx(fit.intercept, 0.0));

    let segments = fitted_line(&fit, &x);
    assert_eq!(segments.len(), 1);
    let xs: Vec<f64> = segments[0].iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    assert!(approx(segments[0][2].1, 2.0));
}

#[test]
fn test_line_extrapolates_past_fitted_pairs() {
    let nan = f64::NAN;
    let x = [5.0, 0.0, 1.0];
    let y = [nan, 0.0, 2.0];
    let fit = fit_masked(&x, &y).unwrap().unwrap();
    let ((lo, _), (hi, y_hi)) = line_span(&fit, &x).unwrap();
    assert_eq!(lo, 0.0);
    assert_eq!(hi, 5.0);
    assert!(approx(y_hi, 10.0));
}

#[test]
fn test_single_valid_pair_has_no_fit() {
    let nan = f64::NAN;
    let x = [0.0, 1.0, nan];
    let y = [0.0, nan, 2.0];
    assert!(fit_masked(&x, &y).unwrap().is_none());
}

#[test]
fn test_empty_series_skip_fit() {
    assert!(fit_masked(&[], &[]).unwrap().is_none());
    assert!(fit_masked(&[1.0, 2.0], &[]).unwrap().is_none());
}

#[test]
fn test_length_mismatch_is_error() {
    let err = fit_masked(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        FitError::LengthMismatch { x_len: 3, y_len: 2 }
    ));
}

#[test]
fn test_constant_x_uses_minimum_norm_solution() {
    let fit = least_squares(&[(2.0, 1.0), (2.0, 3.0)]).unwrap().unwrap();
    assert!(approx(fit.slope, 0.5));
    assert!(approx(fit.intercept, 1.0));
    assert!(approx(fit.evaluate(2.0), 2.0));
}

#[test]
fn test_all_zero_x_is_singular() {
    let err = least_squares(&[(0.0, 1.0), (0.0, 3.0)]).unwrap_err();
    assert!(matches!(err, FitError::SingularDesign { n: 2 }));

    let nan = f64::NAN;
    let x = [0.0, 0.0, 0.0, 4.0];
    let y = [1.0, 2.0, 3.0, nan];
    let err = fit_masked(&x, &y).unwrap_err();
    assert!(matches!(err, FitError::SingularDesign { n: 3 }));
    assert!(err.to_string().contains("singular"));
}

#[test]
fn test_fitted_line_breaks_at_nan_x() {
    let fit = LinearFit {
        slope: 2.0,
        intercept: 1.0,
        n_valid: 2,
    };
    let nan = f64::NAN;
    let segments = fitted_line(&fit, &[0.0, 1.0, nan, 3.0, nan]);
    assert_eq!(segments, vec![vec![(0.0, 1.0), (1.0, 3.0)], vec![(3.0, 7.0)]]);
    assert!(line_span(&fit, &[nan, nan]).is_none());
}

#[test]
fn test_segment_extent_spans_unsorted_vertices() {
    let fit = LinearFit {
        slope: -1.0,
        intercept: 1.0,
        n_valid: 4,
    };
    let segments = fitted_line(&fit, &[0.9, 0.1, 0.6, 0.3]);
    assert_eq!(segments.len(), 1);
    let [lo, hi] = segment_extent(&segments[0]).unwrap();
    assert_eq!(lo.0, 0.1);
    assert_eq!(hi.0, 0.9);
    assert!(approx(lo.1, 0.9));
    assert!(approx(hi.1, 0.1));

    assert_eq!(segment_extent(&[(2.0, 5.0)]), Some([(2.0, 5.0), (2.0, 5.0)]));
    assert!(segment_extent(&[]).is_none());
}
