// ─────────────────────────────────────────────────────────────────────
// Coilfield — Superconducting Wiggler Demo
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Models a 4 T superconducting wiggler from five racetrack coils plus
//! a midplane mirror, then computes the vertical field profile along
//! the beam axis and the field-integral sweep across it.
//!
//! Usage: `scw-wiggler [config.json]`. Without an argument the bundled
//! `scw_wiggler.json` is loaded; artifacts land in `out/`.

use coil_core::assembly::Assembly;
use coil_core::field::{Component, FieldModel, IntegralKind};
use coil_core::scan::{self, LineScan, SweepSpec};
use coil_types::config::{
    CoilSetConfig, MeshParams, MirrorKind, ProfileScanConfig, RacetrackConfig, SweepScanConfig,
    SymmetryConfig,
};
use coil_types::error::{CoilError, CoilResult};
use coil_types::geom::Vec3;
use coil_viz::{geometry, plot};
use ndarray::Array1;
use ndarray_npy::write_npy;
use std::path::Path;

const DEFAULT_CONFIG: &str = "scw_wiggler.json";
const OUT_DIR: &str = "out";

fn save_npy(path: &str, data: &Array1<f64>) -> CoilResult<()> {
    write_npy(path, data).map_err(|e| CoilError::Artifact(format!("{path}: {e}")))
}

/// The ESRF 4 T superconducting wiggler: five racetrack coils above the
/// midplane, mirrored below it. Matches the bundled scw_wiggler.json.
fn builtin_config() -> CoilSetConfig {
    let coil = |name: &str,
                center_z: f64,
                corner_radii: [f64; 2],
                lx: f64,
                height: f64,
                arc_segments: usize,
                current_density: f64,
                color: [f64; 3]| RacetrackConfig {
        name: name.to_string(),
        center: Vec3::new(0.0, 0.0, center_z),
        corner_radii,
        straight_sections: [lx, 0.0],
        height,
        arc_segments,
        current_density,
        color,
        thickness: 0.001,
    };
    let cyan = [0.0, 1.0, 1.0];
    let red = [1.0, 0.0, 0.0];
    CoilSetConfig {
        model_name: "ESRF-4T-SCW".to_string(),
        coils: vec![
            coil("inner-lower", 38.0, [9.5, 24.5], 120.0, 36.0, 3, 128.0, cyan),
            coil("inner-upper", 76.0, [10.0, 25.0], 90.0, 24.0, 3, 128.0, cyan),
            coil("outer-lower", 38.0, [24.5, 55.5], 120.0, 36.0, 3, 256.0, red),
            coil("outer-upper", 76.0, [25.0, 55.0], 90.0, 24.0, 3, 256.0, red),
            coil("compensator", 60.0, [150.0, 166.3], 0.0, 39.0, 6, -256.0, red),
        ],
        symmetry: Some(SymmetryConfig {
            point: Vec3::ZERO,
            normal: Vec3::new(0.0, 0.0, 1.0),
            kind: MirrorKind::ParallelFieldZero,
        }),
        mesh: MeshParams::default(),
        profile_scan: ProfileScanConfig {
            start: Vec3::ZERO,
            end: Vec3::new(0.0, 300.0, 0.0),
            points: 300,
        },
        integral_sweep: SweepScanConfig {
            line_start: Vec3::new(0.0, -300.0, 0.0),
            line_end: Vec3::new(0.0, 300.0, 0.0),
            sweep_direction: Vec3::new(1.0, 0.0, 0.0),
            offset_min: -400.0,
            offset_max: 400.0,
            samples: 301,
        },
    }
}

fn run() -> CoilResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = if Path::new(&config_path).exists() {
        CoilSetConfig::from_file(&config_path)?
    } else {
        println!("config {config_path} not found, using the built-in geometry");
        builtin_config()
    };

    println!("model: {}", cfg.model_name);

    let assembly = Assembly::from_config(&cfg)?;
    let model = FieldModel::new(&assembly, &cfg.mesh)?;
    println!(
        "coils: {} ({} filament segments)",
        assembly.len(),
        model.n_segments()
    );

    let center = model.field(Vec3::ZERO)?;
    println!("central field: Bz = {:.4} T", center.z);

    std::fs::create_dir_all(OUT_DIR)?;
    let out = |name: &str| format!("{OUT_DIR}/{name}");

    // Coil geometry, as a drawing and as VTK polylines.
    let outlines = assembly.outlines();
    geometry::plot_geometry(&outlines, &cfg.model_name, &out("geometry.png"))?;
    geometry::write_outlines_vtk(&outlines, &out("geometry.vtk"))?;

    // Vertical field along the beam direction.
    let profile = LineScan::from_config(&cfg.profile_scan)?;
    let bz = scan::scan_component(&model, &profile, Component::Z)?;
    save_npy(&out("profile_offsets.npy"), profile.offsets())?;
    save_npy(&out("profile_bz.npy"), &bz)?;
    plot::plot_profile(
        profile.offsets(),
        &bz,
        "Vertical Magnetic Field",
        "Longitudinal Position [mm]",
        "Bz [T]",
        &out("profile_bz.png"),
    )?;
    println!(
        "profile: {} points, peak Bz = {:.4} T",
        profile.len(),
        bz.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    );

    // Field integral swept across the horizontal aperture.
    let sweep = SweepSpec::from_config(&cfg.integral_sweep, IntegralKind::Finite)?;
    let (offsets, ibz) = scan::integral_sweep(&model, &sweep, Component::Z)?;
    save_npy(&out("integral_offsets.npy"), &offsets)?;
    save_npy(&out("integral_bz.npy"), &ibz)?;
    plot::plot_profile(
        &offsets,
        &ibz,
        "Vertical Magnetic Field Integral",
        "Horizontal Position [mm]",
        "Integral of Bz [T.mm]",
        &out("integral_bz.png"),
    )?;
    println!(
        "integral sweep: {} lines, I(0) = {:.2} T.mm",
        offsets.len(),
        ibz[offsets.len() / 2]
    );

    println!("artifacts written to {}/", Path::new(OUT_DIR).display());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
