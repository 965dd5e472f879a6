//! graspfit — perceived vs actual grasp-width analysis.
//!
//! Fits perceived ~ actual by ordinary least squares, computes the mean
//! absolute error between the paired series, and renders a jittered
//! scatter + regression-line diagnostic figure with an identity reference,
//! optionally saved as PNG and/or opened in the platform image viewer.
//!
//! Computation and rendering are deliberately separate: [`Grasp::new`] is
//! pure, [`Grasp::render_plot`] does the I/O.

pub mod error;
pub mod grasp;
pub mod metrics;
pub mod plot;
pub mod regression;

pub use error::GraspError;
pub use grasp::Grasp;
pub use plot::PlotOptions;
pub use regression::{LinearFit, fit_line};
