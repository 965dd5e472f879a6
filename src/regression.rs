//! regression.rs — ordinary least squares fit of perceived on actual.

use crate::error::GraspError;

/// Result of a simple linear fit `perceived = intercept + slope * actual`.
#[derive(Clone, Copy, Debug)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `perceived = intercept + slope * actual` by ordinary least squares.
///
/// Pairing is by index; both slices must have the same length, with at
/// least two points. A predictor with zero variance is rejected as
/// degenerate rather than returning NaN or a misleading flat line.
pub fn fit_line(actual: &[f64], perceived: &[f64]) -> Result<LinearFit, GraspError> {
    if actual.len() != perceived.len() {
        return Err(GraspError::LengthMismatch {
            actual: actual.len(),
            perceived: perceived.len(),
        });
    }
    let n = actual.len();
    if n < 2 {
        return Err(GraspError::InsufficientData { needed: 2, got: n });
    }

    let mean_x = actual.iter().sum::<f64>() / n as f64;
    let mean_y = perceived.iter().sum::<f64>() / n as f64;

    let mut num = 0.0;
    let mut den = 0.0;
    for (&x, &y) in actual.iter().zip(perceived) {
        let dx = x - mean_x;
        num += dx * (y - mean_y);
        den += dx * dx;
    }

    if den == 0.0 {
        return Err(GraspError::DegenerateInput);
    }

    let slope = num / den;
    let intercept = mean_y - slope * mean_x;

    // R^2 = 1 - SS_res / SS_tot over the outcome mean.
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&x, &y) in actual.iter().zip(perceived) {
        let resid = y - (intercept + slope * x);
        ss_res += resid * resid;
        let dy = y - mean_y;
        ss_tot += dy * dy;
    }
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res.abs() < 1e-12 {
        // Constant outcomes reproduced exactly by a flat line.
        1.0
    } else {
        0.0
    };

    Ok(LinearFit {
        intercept,
        slope,
        r_squared,
    })
}
