// ─────────────────────────────────────────────────────────────────────
// Coilfield — Config
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use crate::geom::Vec3;
use serde::{Deserialize, Serialize};

/// Top-level coil model configuration.
/// Maps 1:1 to the scw_wiggler.json schema at the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoilSetConfig {
    pub model_name: String,
    pub coils: Vec<RacetrackConfig>,
    /// Optional mirror symmetry applied after all coils are built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry: Option<SymmetryConfig>,
    /// Filament subdivision of each coil cross section.
    #[serde(default)]
    pub mesh: MeshParams,
    pub profile_scan: ProfileScanConfig,
    pub integral_sweep: SweepScanConfig,
}

/// One racetrack (or, with zero straight sections, circular) coil.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacetrackConfig {
    pub name: String,
    /// Geometric center [mm]; the coil axis is +z through this point.
    pub center: Vec3,
    /// Inner and outer corner radii [mm].
    pub corner_radii: [f64; 2],
    /// Straight section lengths along x and y [mm].
    pub straight_sections: [f64; 2],
    /// Axial extent of the winding [mm].
    pub height: f64,
    /// Chords per 90° corner arc.
    pub arc_segments: usize,
    /// Signed current density [A/mm²]; negative reverses circulation.
    pub current_density: f64,
    /// Presentation color, RGB in [0, 1].
    #[serde(default = "default_color")]
    pub color: [f64; 3],
    /// Presentation line thickness.
    #[serde(default = "default_thickness")]
    pub thickness: f64,
}

fn default_color() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

fn default_thickness() -> f64 {
    0.001
}

/// Mirror symmetry kind, named for the field component it zeroes on the
/// plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MirrorKind {
    /// Field components parallel to the plane vanish on the plane
    /// (the mirrored coil keeps its circulation sense).
    ParallelFieldZero,
    /// The field component normal to the plane vanishes on the plane
    /// (the mirrored coil reverses its current).
    PerpendicularFieldZero,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryConfig {
    pub point: Vec3,
    pub normal: Vec3,
    pub kind: MirrorKind,
}

/// Filament subdivision of the rectangular coil cross section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeshParams {
    #[serde(default = "default_radial")]
    pub radial_subdivision: usize,
    #[serde(default = "default_axial")]
    pub axial_subdivision: usize,
}

fn default_radial() -> usize {
    2
}

fn default_axial() -> usize {
    2
}

impl Default for MeshParams {
    fn default() -> Self {
        MeshParams {
            radial_subdivision: default_radial(),
            axial_subdivision: default_axial(),
        }
    }
}

/// Field profile sampled along a straight line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileScanConfig {
    pub start: Vec3,
    pub end: Vec3,
    pub points: usize,
}

/// Field-integral sweep: a fixed probe line translated across offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepScanConfig {
    pub line_start: Vec3,
    pub line_end: Vec3,
    pub sweep_direction: Vec3,
    pub offset_min: f64,
    pub offset_max: f64,
    pub samples: usize,
}

impl CoilSetConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::CoilResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
