//! Render demo diagnostic figures for two synthetic subjects.
//!
//! Output lands under target/plots/grasp.

use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use graspfit::{Grasp, PlotOptions};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let out_dir = Path::new("target/plots/grasp");
    create_dir_all(out_dir)?;

    // A near-veridical perceiver and a compressing, offset one.
    render_subject(out_dir, "s01", "full-vision", 0.97, 0.3, 0.25, 11)?;
    render_subject(out_dir, "s02", "no-vision", 0.72, 1.8, 0.6, 23)?;

    println!("Saved grasp plots to {}", out_dir.display());
    Ok(())
}

fn render_subject(
    out_dir: &Path,
    subject_id: &str,
    condition: &str,
    slope: f64,
    intercept: f64,
    noise: f64,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Target widths 3..9 cm, three repetitions each.
    let actual: Vec<f64> = (3..=9).flat_map(|w| [w as f64; 3]).collect();
    let perceived: Vec<f64> = actual
        .iter()
        .map(|&w| intercept + slope * w + rng.random_range(-noise..=noise))
        .collect();

    let grasp = Grasp::new(actual, perceived)?;
    println!(
        "{subject_id} {condition}: slope={:.3} intercept={:.3} R2={:.3} MAE={:.3}",
        grasp.slope(),
        grasp.intercept(),
        grasp.r_squared(),
        grasp.mean_abs_error(),
    );

    let opts = PlotOptions {
        subject_id: Some(subject_id.to_string()),
        condition: Some(condition.to_string()),
        out_dir: Some(out_dir.to_path_buf()),
        show: false,
    };
    grasp.render_plot_with_rng(&opts, &mut rng)?;
    Ok(())
}
