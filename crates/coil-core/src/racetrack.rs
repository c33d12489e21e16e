// ─────────────────────────────────────────────────────────────────────
// Coilfield — Racetrack Coils
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Racetrack coil geometry and filament meshing.
//!
//! A racetrack winding is a rounded rectangle swept over a rectangular
//! cross section: straight sections `lx`/`ly` [mm], corner radii from
//! `r_min` to `r_max` [mm], axial height [mm], carrying a uniform
//! current density [A/mm²] counter-clockwise about +z for positive
//! density. With `lx = ly = 0` the coil degenerates to a circular
//! annular winding.

use crate::filament::Segment;
use coil_types::config::{MeshParams, RacetrackConfig};
use coil_types::error::{CoilError, CoilResult};
use coil_types::geom::Vec3;

/// Shortest filament segment kept by the mesher [mm]; arc joints of a
/// degenerate (circular) racetrack collapse to zero-length segments.
const MIN_SEGMENT_LEN: f64 = 1e-9;

/// Presentation attributes, carried through to the drawing layer.
#[derive(Debug, Clone, Copy)]
pub struct DrawAttrs {
    /// RGB in [0, 1].
    pub color: [f64; 3],
    pub thickness: f64,
}

impl Default for DrawAttrs {
    fn default() -> Self {
        DrawAttrs {
            color: [0.0, 0.0, 1.0],
            thickness: 0.001,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RacetrackCoil {
    pub name: String,
    center: Vec3,
    r_min: f64,
    r_max: f64,
    lx: f64,
    ly: f64,
    height: f64,
    arc_segments: usize,
    current_density: f64,
    draw: DrawAttrs,
}

impl RacetrackCoil {
    pub fn new(
        center: Vec3,
        corner_radii: [f64; 2],
        straight_sections: [f64; 2],
        height: f64,
        arc_segments: usize,
        current_density: f64,
    ) -> CoilResult<Self> {
        let [r_min, r_max] = corner_radii;
        let [lx, ly] = straight_sections;

        if !center.is_finite()
            || ![r_min, r_max, lx, ly, height, current_density]
                .iter()
                .all(|v| v.is_finite())
        {
            return Err(CoilError::Geometry(
                "racetrack parameters must be finite".to_string(),
            ));
        }
        if r_min < 0.0 || r_max <= r_min {
            return Err(CoilError::Geometry(format!(
                "corner radii must satisfy 0 <= r_min < r_max, got [{r_min}, {r_max}]"
            )));
        }
        if lx < 0.0 || ly < 0.0 {
            return Err(CoilError::Geometry(format!(
                "straight sections must be >= 0, got [{lx}, {ly}]"
            )));
        }
        if height <= 0.0 {
            return Err(CoilError::Geometry(format!(
                "coil height must be > 0, got {height}"
            )));
        }
        if arc_segments == 0 {
            return Err(CoilError::Geometry(
                "corner arcs need at least one chord".to_string(),
            ));
        }

        Ok(RacetrackCoil {
            name: String::new(),
            center,
            r_min,
            r_max,
            lx,
            ly,
            height,
            arc_segments,
            current_density,
            draw: DrawAttrs::default(),
        })
    }

    pub fn from_config(cfg: &RacetrackConfig) -> CoilResult<Self> {
        let mut coil = RacetrackCoil::new(
            cfg.center,
            cfg.corner_radii,
            cfg.straight_sections,
            cfg.height,
            cfg.arc_segments,
            cfg.current_density,
        )?;
        coil.name = cfg.name.clone();
        coil.draw = DrawAttrs {
            color: cfg.color,
            thickness: cfg.thickness,
        };
        Ok(coil)
    }

    pub fn with_draw_attrs(mut self, color: [f64; 3], thickness: f64) -> Self {
        self.draw = DrawAttrs { color, thickness };
        self
    }

    pub fn draw_attrs(&self) -> DrawAttrs {
        self.draw
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn is_circular(&self) -> bool {
        self.lx == 0.0 && self.ly == 0.0
    }

    /// Total ampere-turns: j · (r_max − r_min) · height.
    pub fn total_current(&self) -> f64 {
        self.current_density * (self.r_max - self.r_min) * self.height
    }

    /// Closed winding path at corner radius `r` and absolute height `z`:
    /// four quarter arcs of `arc_segments` chords each, joined by the
    /// straight sections (degenerate edges collapse and are dropped at
    /// segment construction).
    fn winding_path(&self, r: f64, z: f64) -> Vec<Vec3> {
        let (cx, cy) = (self.center.x, self.center.y);
        let (hx, hy) = (self.lx / 2.0, self.ly / 2.0);
        let corners = [
            (cx + hx, cy + hy, 0.0_f64),
            (cx - hx, cy + hy, 90.0),
            (cx - hx, cy - hy, 180.0),
            (cx + hx, cy - hy, 270.0),
        ];

        let mut pts = Vec::with_capacity(4 * (self.arc_segments + 1));
        for (ox, oy, a0) in corners {
            for s in 0..=self.arc_segments {
                let ang = (a0 + 90.0 * s as f64 / self.arc_segments as f64).to_radians();
                pts.push(Vec3::new(ox + r * ang.cos(), oy + r * ang.sin(), z));
            }
        }
        pts
    }

    /// Mesh the cross section into `radial × axial` filaments, each an
    /// equal share of the total current.
    pub fn mesh(&self, params: &MeshParams) -> CoilResult<Vec<Segment>> {
        let nr = params.radial_subdivision;
        let na = params.axial_subdivision;
        if nr == 0 || na == 0 {
            return Err(CoilError::Config(
                "mesh subdivisions must be >= 1".to_string(),
            ));
        }

        let dr = (self.r_max - self.r_min) / nr as f64;
        let dz = self.height / na as f64;
        let filament_current = self.total_current() / (nr * na) as f64;

        let mut segments = Vec::new();
        for kr in 0..nr {
            let r = self.r_min + (kr as f64 + 0.5) * dr;
            for ka in 0..na {
                let z = self.center.z - self.height / 2.0 + (ka as f64 + 0.5) * dz;
                let path = self.winding_path(r, z);
                let n = path.len();
                for k in 0..n {
                    let a = path[k];
                    let b = path[(k + 1) % n];
                    if (b - a).norm() > MIN_SEGMENT_LEN {
                        segments.push(Segment::new(a, b, filament_current));
                    }
                }
            }
        }
        Ok(segments)
    }

    /// Centerline outline (mean corner radius, coil mid-height), closed.
    pub fn outline(&self) -> Vec<Vec3> {
        let mut pts = self.winding_path((self.r_min + self.r_max) / 2.0, self.center.z);
        if let Some(&first) = pts.first() {
            pts.push(first);
        }
        pts
    }
}
