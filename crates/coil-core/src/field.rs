// ─────────────────────────────────────────────────────────────────────
// Coilfield — Field Queries
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Point field queries and line field integrals.
//!
//! A `FieldModel` meshes an assembly once and answers any number of
//! queries against the resulting filament set.

use crate::assembly::Assembly;
use crate::filament::Segment;
use coil_types::config::MeshParams;
use coil_types::error::{CoilError, CoilResult};
use coil_types::geom::Vec3;
use std::cell::Cell;

/// Probe-line panel length for the finite field integral [mm].
const INTEGRAL_PANEL_MM: f64 = 25.0;

/// Minimum panels for short probe lines.
const INTEGRAL_MIN_PANELS: usize = 8;

/// Field component selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    X,
    Y,
    Z,
    Norm,
}

impl Component {
    pub fn select(self, b: Vec3) -> f64 {
        match self {
            Component::X => b.x,
            Component::Y => b.y,
            Component::Z => b.z,
            Component::Norm => b.norm(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::X => "Bx",
            Component::Y => "By",
            Component::Z => "Bz",
            Component::Norm => "|B|",
        }
    }
}

/// Field-integral evaluation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegralKind {
    /// ∫ B ds between the two endpoints, by composite quadrature.
    Finite,
    /// Closed-form ∫ B ds over the whole line through the endpoints.
    Infinite,
}

/// Meshed assembly ready for field evaluation.
pub struct FieldModel {
    segments: Vec<Segment>,
}

impl FieldModel {
    pub fn new(assembly: &Assembly, params: &MeshParams) -> CoilResult<Self> {
        Ok(FieldModel {
            segments: assembly.mesh(params)?,
        })
    }

    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    fn field_sum(&self, p: Vec3) -> Option<Vec3> {
        let mut b = Vec3::ZERO;
        for seg in &self.segments {
            b = b + seg.field(p)?;
        }
        b.is_finite().then_some(b)
    }

    /// Magnetic field [T] at a point [mm].
    pub fn field(&self, p: Vec3) -> CoilResult<Vec3> {
        if !p.is_finite() {
            return Err(CoilError::Geometry(format!(
                "field query point must be finite, got {p:?}"
            )));
        }
        self.field_sum(p).ok_or(CoilError::FieldQuery {
            x: p.x,
            y: p.y,
            z: p.z,
        })
    }

    /// Field at each of the given points.
    pub fn field_many(&self, points: &[Vec3]) -> CoilResult<Vec<Vec3>> {
        points.iter().map(|&p| self.field(p)).collect()
    }

    /// Field integral ∫ B ds [T·mm] along the straight probe line from
    /// `p1` to `p2` (`Finite`), or along the entire line through them
    /// (`Infinite`).
    pub fn field_integral(&self, p1: Vec3, p2: Vec3, kind: IntegralKind) -> CoilResult<Vec3> {
        let span = p2 - p1;
        let length = span.norm();
        let u = span.normalized().map_err(|_| {
            CoilError::Geometry("field-integral endpoints must be distinct".to_string())
        })?;

        match kind {
            IntegralKind::Finite => {
                let panels =
                    ((length / INTEGRAL_PANEL_MM).ceil() as usize).max(INTEGRAL_MIN_PANELS);
                let singular = Cell::new(false);
                let total = coil_math::quadrature::integrate_vec3(
                    |s| match self.field_sum(p1 + u * s) {
                        Some(b) => b,
                        None => {
                            singular.set(true);
                            Vec3::ZERO
                        }
                    },
                    0.0,
                    length,
                    panels,
                );
                if singular.get() {
                    return Err(CoilError::FieldQuery {
                        x: p1.x,
                        y: p1.y,
                        z: p1.z,
                    });
                }
                Ok(total)
            }
            IntegralKind::Infinite => {
                let mut total = Vec3::ZERO;
                for seg in &self.segments {
                    match seg.infinite_line_integral(p1, u) {
                        Some(v) => total = total + v,
                        None => {
                            return Err(CoilError::FieldQuery {
                                x: p1.x,
                                y: p1.y,
                                z: p1.z,
                            })
                        }
                    }
                }
                Ok(total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::racetrack::RacetrackCoil;
    use crate::symmetry::apply_mirror;
    use coil_types::config::MirrorKind;
    use coil_types::geom::Plane;

    fn demo_assembly() -> Assembly {
        let mut asm = Assembly::new();
        for (center_z, radii, straights, height, nseg, j) in [
            (38.0, [9.5, 24.5], [120.0, 0.0], 36.0, 3, 128.0),
            (76.0, [10.0, 25.0], [90.0, 0.0], 24.0, 3, 128.0),
            (38.0, [24.5, 55.5], [120.0, 0.0], 36.0, 3, 256.0),
            (76.0, [25.0, 55.0], [90.0, 0.0], 24.0, 3, 256.0),
            (60.0, [150.0, 166.3], [0.0, 0.0], 39.0, 6, -256.0),
        ] {
            asm.push(
                RacetrackCoil::new(Vec3::new(0.0, 0.0, center_z), radii, straights, height, nseg, j)
                    .unwrap(),
            );
        }
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).unwrap();
        apply_mirror(&mut asm, &plane, MirrorKind::ParallelFieldZero);
        asm
    }

    fn demo_model() -> FieldModel {
        FieldModel::new(&demo_assembly(), &MeshParams::default()).unwrap()
    }

    #[test]
    fn test_central_field_is_multi_tesla() {
        // The geometry models the 4 T ESRF superconducting wiggler.
        let model = demo_model();
        let b = model.field(Vec3::ZERO).unwrap();
        assert!(
            b.z > 3.5 && b.z < 4.5,
            "central bz = {} T, expected ~3.9 T",
            b.z
        );
        assert!(b.x.abs() < 1e-10 && b.y.abs() < 1e-10);
    }

    #[test]
    fn test_field_symmetric_in_y() {
        let model = demo_model();
        for y in [40.0, 120.0, 260.0] {
            let fwd = model.field(Vec3::new(0.0, y, 0.0)).unwrap();
            let bwd = model.field(Vec3::new(0.0, -y, 0.0)).unwrap();
            assert!(
                (fwd.z - bwd.z).abs() < 1e-12 + 1e-9 * fwd.z.abs(),
                "bz({y}) = {} vs bz(-{y}) = {}",
                fwd.z,
                bwd.z
            );
        }
    }

    #[test]
    fn test_field_rejects_non_finite_point() {
        let model = demo_model();
        assert!(model.field(Vec3::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_field_on_conductor_is_an_error() {
        let model = demo_model();
        // A filament of the inner coil lies at radius 13.25 mm, z = 29 mm;
        // its straight section runs along x at y = -13.25.
        let p = Vec3::new(0.0, -13.25, 29.0);
        match model.field(p) {
            Err(CoilError::FieldQuery { .. }) => {}
            other => panic!("expected FieldQuery error, got {other:?}"),
        }
    }

    #[test]
    fn test_finite_integral_converges_to_infinite() {
        // Over a probe line far longer than the magnet, the finite
        // integral approaches the closed-form infinite one.
        let model = demo_model();
        let inf = model
            .field_integral(
                Vec3::new(150.0, -1.0, 0.0),
                Vec3::new(150.0, 1.0, 0.0),
                IntegralKind::Infinite,
            )
            .unwrap();
        let fin = model
            .field_integral(
                Vec3::new(150.0, -4.0e4, 0.0),
                Vec3::new(150.0, 4.0e4, 0.0),
                IntegralKind::Finite,
            )
            .unwrap();
        let err = (inf - fin).norm() / inf.norm().max(1e-12);
        assert!(err < 1e-3, "relative error {err}");
    }

    #[test]
    fn test_integral_rejects_coincident_endpoints() {
        let model = demo_model();
        let p = Vec3::new(0.0, 1.0, 0.0);
        assert!(model.field_integral(p, p, IntegralKind::Finite).is_err());
    }

    #[test]
    fn test_integral_antisymmetric_in_direction() {
        let model = demo_model();
        let p1 = Vec3::new(30.0, -300.0, 0.0);
        let p2 = Vec3::new(30.0, 300.0, 0.0);
        let fwd = model.field_integral(p1, p2, IntegralKind::Finite).unwrap();
        let rev = model.field_integral(p2, p1, IntegralKind::Finite).unwrap();
        assert!((fwd + rev).norm() < 1e-9 * fwd.norm().max(1.0));
    }
}
