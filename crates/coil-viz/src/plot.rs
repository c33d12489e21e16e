// ─────────────────────────────────────────────────────────────────────
// Coilfield — Line Plots
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! PNG line plots of scan curves.

use coil_types::error::{CoilError, CoilResult};
use ndarray::Array1;
use plotters::prelude::*;

fn plot_err<E: std::fmt::Display>(e: E) -> CoilError {
    CoilError::Plot(e.to_string())
}

/// Data range with a 10% margin; falls back to [-1, 1] when the data
/// are empty, constant, or non-finite.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    if (hi - lo).abs() < 1e-30 {
        let delta = if hi.abs() < 1e-30 { 1.0 } else { 0.1 * hi.abs() };
        return (lo - delta, hi + delta);
    }
    let margin = 0.1 * (hi - lo);
    (lo - margin, hi + margin)
}

/// Plot `y` against `x` as a single blue curve and save it as a PNG.
pub fn plot_profile(
    x: &Array1<f64>,
    y: &Array1<f64>,
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &str,
) -> CoilResult<()> {
    if x.len() != y.len() {
        return Err(CoilError::Plot(format!(
            "curve arrays differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(CoilError::Plot(
            "a curve needs at least 2 points".to_string(),
        ));
    }

    let (x_min, x_max) = padded_range(x.iter().cloned());
    let (y_min, y_max) = padded_range(y.iter().cloned());

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)),
            &BLUE,
        ))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_rejects_mismatched_lengths() {
        let x = Array1::from_vec(vec![0.0, 1.0, 2.0]);
        let y = Array1::from_vec(vec![0.0, 1.0]);
        assert!(plot_profile(&x, &y, "t", "x", "y", "/tmp/never.png").is_err());
    }

    #[test]
    fn test_writes_png() {
        let x = Array1::from_iter((0..100).map(|i| i as f64));
        let y = x.mapv(|v| (v / 10.0).sin());
        let path = std::env::temp_dir().join("coilfield_plot_test.png");
        let path = path.to_string_lossy().to_string();
        plot_profile(&x, &y, "Sine", "x [mm]", "B [T]", &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_padded_range_handles_constant_data() {
        let (lo, hi) = padded_range([5.0, 5.0, 5.0].into_iter());
        assert!(lo < 5.0 && hi > 5.0);
        let (lo, hi) = padded_range(std::iter::empty());
        assert_eq!((lo, hi), (-1.0, 1.0));
    }
}
