// ─────────────────────────────────────────────────────────────────────
// Coilfield — Geometry Export
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Coil geometry exports: PNG projection drawings and legacy VTK
//! polyline files for external 3D viewers.

use coil_core::assembly::Outline;
use coil_types::error::{CoilError, CoilResult};
use coil_types::geom::Vec3;
use plotters::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};

fn plot_err<E: std::fmt::Display>(e: E) -> CoilError {
    CoilError::Plot(e.to_string())
}

fn to_rgb(color: [f64; 3]) -> RGBColor {
    RGBColor(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
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
    let margin = 0.1 * (hi - lo).max(1.0);
    (lo - margin, hi + margin)
}

fn draw_projection<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    outlines: &[Outline],
    title: &str,
    axes: (&str, &str),
    project: impl Fn(Vec3) -> (f64, f64),
) -> CoilResult<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = padded_bounds(
        outlines
            .iter()
            .flat_map(|o| o.points.iter().map(|&p| project(p).0)),
    );
    let (y_min, y_max) = padded_bounds(
        outlines
            .iter()
            .flat_map(|o| o.points.iter().map(|&p| project(p).1)),
    );

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(axes.0)
        .y_desc(axes.1)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    for outline in outlines {
        let color = to_rgb(outline.draw.color);
        chart
            .draw_series(LineSeries::new(
                outline.points.iter().map(|&p| project(p)),
                &color,
            ))
            .map_err(plot_err)?;
    }
    Ok(())
}

/// Draw the assembly outlines as two projections side by side: plan
/// view (x, y) and elevation (y, z), coloured per coil.
pub fn plot_geometry(outlines: &[Outline], title: &str, path: &str) -> CoilResult<()> {
    if outlines.is_empty() {
        return Err(CoilError::Plot("nothing to draw".to_string()));
    }

    let root = BitMapBackend::new(path, (1600, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let body = root.titled(title, ("sans-serif", 30)).map_err(plot_err)?;
    let panels = body.split_evenly((1, 2));

    draw_projection(&panels[0], outlines, "Plan view", ("x [mm]", "y [mm]"), |p| {
        (p.x, p.y)
    })?;
    draw_projection(
        &panels[1],
        outlines,
        "Elevation",
        ("y [mm]", "z [mm]"),
        |p| (p.y, p.z),
    )?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Write the outlines as legacy ASCII VTK polylines, one cell per coil,
/// loadable in ParaView.
pub fn write_outlines_vtk(outlines: &[Outline], path: &str) -> CoilResult<()> {
    let mut w = BufWriter::new(File::create(path)?);

    let total_points: usize = outlines.iter().map(|o| o.points.len()).sum();

    writeln!(w, "# vtk DataFile Version 3.0")?;
    writeln!(w, "coil outlines")?;
    writeln!(w, "ASCII")?;
    writeln!(w, "DATASET POLYDATA")?;
    writeln!(w, "POINTS {total_points} double")?;
    for outline in outlines {
        for p in &outline.points {
            writeln!(w, "{} {} {}", p.x, p.y, p.z)?;
        }
    }

    let size: usize = outlines.iter().map(|o| o.points.len() + 1).sum();
    writeln!(w, "LINES {} {}", outlines.len(), size)?;
    let mut offset = 0usize;
    for outline in outlines {
        let n = outline.points.len();
        write!(w, "{n}")?;
        for i in 0..n {
            write!(w, " {}", offset + i)?;
        }
        writeln!(w)?;
        offset += n;
    }

    w.flush()?;
    Ok(())
}
