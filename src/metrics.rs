//! metrics.rs — discrepancy metrics between paired series.

use crate::error::GraspError;

/// Mean absolute error between paired actual/perceived values.
///
/// Requires at least one pair (a single pair yields a valid, if trivial,
/// mean). Symmetric in its arguments and always non-negative.
pub fn mean_abs_error(actual: &[f64], perceived: &[f64]) -> Result<f64, GraspError> {
    if actual.len() != perceived.len() {
        return Err(GraspError::LengthMismatch {
            actual: actual.len(),
            perceived: perceived.len(),
        });
    }
    let n = actual.len();
    if n == 0 {
        return Err(GraspError::InsufficientData { needed: 1, got: 0 });
    }

    let total: f64 = actual
        .iter()
        .zip(perceived)
        .map(|(&a, &p)| (p - a).abs())
        .sum();
    Ok(total / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_series_has_zero_error() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!(mean_abs_error(&v, &v).unwrap().abs() < 1e-12);
    }

    #[test]
    fn constant_offset_is_reported_exactly() {
        let actual = [1.0, 2.0, 3.0];
        let perceived = [1.5, 2.5, 3.5];
        let mae = mean_abs_error(&actual, &perceived).unwrap();
        assert!((mae - 0.5).abs() < 1e-12);
    }

    #[test]
    fn symmetric_in_arguments() {
        let a = [1.0, 4.0, 2.0, 8.0];
        let b = [2.0, 3.0, 5.0, 6.0];
        let ab = mean_abs_error(&a, &b).unwrap();
        let ba = mean_abs_error(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab >= 0.0);
    }

    #[test]
    fn single_pair_is_valid() {
        let mae = mean_abs_error(&[2.0], &[3.5]).unwrap();
        assert!((mae - 1.5).abs() < 1e-12);
    }

    #[test]
    fn empty_input_is_insufficient() {
        let err = mean_abs_error(&[], &[]).unwrap_err();
        assert!(matches!(
            err,
            GraspError::InsufficientData { needed: 1, got: 0 }
        ));
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = mean_abs_error(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, GraspError::LengthMismatch { .. }));
    }
}
