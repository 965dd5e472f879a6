//! error.rs — domain errors for the fit/metric/plot pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort an analysis or a plot render.
///
/// All validation happens before any partial state is built: a failed
/// construction leaves nothing behind, a failed render writes no file.
#[derive(Debug, Error)]
pub enum GraspError {
    /// Fewer paired samples than the requested computation needs
    /// (2 for the regression, 1 for the error metric).
    #[error("insufficient data: need at least {needed} paired samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// The actual and perceived sequences differ in length.
    #[error("length mismatch: {actual} actual values vs {perceived} perceived values")]
    LengthMismatch { actual: usize, perceived: usize },

    /// All actual values are identical; the regression is undefined.
    #[error("degenerate input: actual values have zero variance, cannot fit a line")]
    DegenerateInput,

    /// An output directory was supplied but the file name cannot be built.
    #[error("missing identifiers: subject id and condition are both required to name the output file")]
    MissingIdentifiers,

    /// The output directory does not exist (it is never created implicitly).
    #[error("output directory does not exist: {0}")]
    OutputDirMissing(PathBuf),

    /// Backend drawing or PNG write failure.
    #[error("plot rendering failed: {0}")]
    Render(String),
}
