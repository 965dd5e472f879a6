//! grasp.rs — one subject/condition analysis of perceived vs actual width.

use rand::Rng;

use crate::error::GraspError;
use crate::metrics::mean_abs_error;
use crate::plot::{self, PlotOptions};
use crate::regression::{LinearFit, fit_line};

/// Fitted relationship between actual and perceived grasp width for one
/// subject/condition pair.
///
/// All derived quantities (intercept, slope, R², mean absolute error) are
/// computed exactly once at construction and the value is immutable
/// afterwards. A failed construction leaves nothing partially initialized.
/// Rendering the diagnostic figure is a separate, explicit step so the
/// numbers can be used without touching the filesystem or a display.
#[derive(Clone, Debug)]
pub struct Grasp {
    actual: Vec<f64>,
    perceived: Vec<f64>,
    fit: LinearFit,
    mean_abs_error: f64,
}

impl Grasp {
    /// Validate the paired series and compute fit and error metric.
    ///
    /// Pairing is by index and order is preserved. Sequences must have the
    /// same length with at least two pairs; a zero-variance actual series
    /// is rejected as degenerate.
    pub fn new(actual: Vec<f64>, perceived: Vec<f64>) -> Result<Self, GraspError> {
        let fit = fit_line(&actual, &perceived)?;
        let mae = mean_abs_error(&actual, &perceived)?;
        Ok(Self {
            actual,
            perceived,
            fit,
            mean_abs_error: mae,
        })
    }

    #[inline]
    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    #[inline]
    pub fn perceived(&self) -> &[f64] {
        &self.perceived
    }

    #[inline]
    pub fn fit(&self) -> &LinearFit {
        &self.fit
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    #[inline]
    pub fn slope(&self) -> f64 {
        self.fit.slope
    }

    #[inline]
    pub fn r_squared(&self) -> f64 {
        self.fit.r_squared
    }

    #[inline]
    pub fn mean_abs_error(&self) -> f64 {
        self.mean_abs_error
    }

    /// Render the diagnostic figure with OS-seeded jitter.
    pub fn render_plot(&self, opts: &PlotOptions) -> Result<(), GraspError> {
        self.render_plot_with_rng(opts, &mut rand::rng())
    }

    /// Render with a caller-supplied jitter RNG (seedable for tests).
    pub fn render_plot_with_rng<R: Rng + ?Sized>(
        &self,
        opts: &PlotOptions,
        rng: &mut R,
    ) -> Result<(), GraspError> {
        plot::render(&self.actual, &self.perceived, &self.fit, opts, rng)
    }
}
