//! plot.rs — scatter + regression-line diagnostic figure.
//!
//! Rendering is explicit and side-effecting: it writes a PNG when an output
//! directory is supplied and optionally hands the file to the platform image
//! viewer. The math never depends on anything in this module.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::Command;

use plotters::prelude::*;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::GraspError;
use crate::regression::LinearFit;

/// 4 in x 4 in canvas at the 180 dpi used for printed figures.
const FIGURE_PX: (u32, u32) = (720, 720);

/// Horizontal jitter half-width, in actual-axis units (cm). Jitter is
/// visual de-overlapping only and never feeds back into the data.
pub const JITTER_CM: f64 = 0.20;

/// Where and how to render one diagnostic figure.
///
/// `subject_id` and `condition` are both required whenever `out_dir` is set
/// (they form the file name `{subject_id}_{condition}.png`). The directory
/// must already exist; it is never created here.
#[derive(Clone, Debug, Default)]
pub struct PlotOptions {
    pub subject_id: Option<String>,
    pub condition: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub show: bool,
}

/// Render the scatter, fitted segment and identity reference line.
///
/// Jitter comes from the caller-supplied RNG so tests can seed it. With no
/// output directory and no display request this is a no-op.
pub fn render<R: Rng + ?Sized>(
    actual: &[f64],
    perceived: &[f64],
    fit: &LinearFit,
    opts: &PlotOptions,
    rng: &mut R,
) -> Result<(), GraspError> {
    // Resolve the target path before any drawing so a bad request writes
    // nothing at all.
    let out_path = match &opts.out_dir {
        Some(dir) => {
            let (subject_id, condition) = match (&opts.subject_id, &opts.condition) {
                (Some(s), Some(c)) => (s.as_str(), c.as_str()),
                _ => return Err(GraspError::MissingIdentifiers),
            };
            if !dir.is_dir() {
                return Err(GraspError::OutputDirMissing(dir.clone()));
            }
            Some(dir.join(format!("{subject_id}_{condition}.png")))
        }
        None if opts.show => Some(preview_path()),
        None => None,
    };

    let Some(path) = out_path else {
        debug!("no output directory and no display requested; skipping render");
        return Ok(());
    };

    let caption = format!(
        "{}: {}",
        opts.subject_id.as_deref().unwrap_or("subject"),
        opts.condition.as_deref().unwrap_or("condition"),
    );

    draw_figure(&path, actual, perceived, fit, &caption, rng)
        .map_err(|err| GraspError::Render(err.to_string()))?;
    info!(path = %path.display(), "saved grasp diagnostic figure");

    if opts.show {
        open_viewer(&path);
    }
    Ok(())
}

fn draw_figure<R: Rng + ?Sized>(
    path: &Path,
    actual: &[f64],
    perceived: &[f64],
    fit: &LinearFit,
    caption: &str,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    let x_min = actual.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = actual.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // The y-range must cover the data, the fitted segment and the identity
    // line so nothing clips.
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &y in perceived {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    for y in [fit.predict(x_min), fit.predict(x_max), x_min, x_max] {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let x_pad = JITTER_CM + 0.05 * (x_max - x_min);
    let y_pad = 0.05 * (y_max - y_min).max(1.0);

    let root = BitMapBackend::new(path, FIGURE_PX).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("Actual width (cm)")
        .y_desc("Perceived width (cm)")
        .draw()?;

    // Identity reference: perceived equals actual.
    chart.draw_series(DashedLineSeries::new(
        vec![(x_min, x_min), (x_max, x_max)],
        6,
        4,
        RGBColor(190, 190, 190).stroke_width(1),
    ))?;

    // Fitted segment over the observed actual range only.
    chart.draw_series(LineSeries::new(
        vec![(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
        &BLACK,
    ))?;

    let jittered: Vec<(f64, f64)> = actual
        .iter()
        .zip(perceived)
        .map(|(&x, &y)| (x + rng.random_range(-JITTER_CM..=JITTER_CM), y))
        .collect();
    chart.draw_series(
        jittered
            .into_iter()
            .map(|(x, y)| Circle::new((x, y), 4, BLACK.mix(0.5).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Unique path in the system temp dir for show-only previews.
fn preview_path() -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "graspfit_preview_{}.png",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ));
    p
}

/// Hand the rendered PNG to the platform image viewer. Whether and how the
/// viewer appears is environment-dependent; failure is non-fatal.
fn open_viewer(path: &Path) {
    #[cfg(target_os = "macos")]
    let viewer = "open";
    #[cfg(not(target_os = "macos"))]
    let viewer = "xdg-open";

    debug!(path = %path.display(), viewer, "handing figure to image viewer");
    if let Err(err) = Command::new(viewer).arg(path).spawn() {
        warn!(%err, "could not launch image viewer");
    }
}
