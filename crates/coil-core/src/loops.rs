// ─────────────────────────────────────────────────────────────────────
// Coilfield — Circular Loops
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Analytic circular current loop.
//!
//! Exact field of an ideal circular loop via complete elliptic
//! integrals, used as an independent reference for the filament mesher.

use coil_math::elliptic::ellipke;
use coil_types::constants::{MU0_OVER_2PI, MU0_T_MM_PER_A};
use coil_types::error::{CoilError, CoilResult};
use coil_types::geom::Vec3;

/// Radial distance below which a query counts as on-axis, relative to
/// the loop radius.
const ON_AXIS_REL: f64 = 1e-9;

/// Ideal circular loop of `radius` [mm] carrying `current` [A]
/// counter-clockwise about `axis`.
#[derive(Debug, Clone, Copy)]
pub struct CircularLoop {
    center: Vec3,
    axis: Vec3,
    radius: f64,
    current: f64,
}

impl CircularLoop {
    pub fn new(center: Vec3, axis: Vec3, radius: f64, current: f64) -> CoilResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(CoilError::Geometry(format!(
                "loop radius must be > 0, got {radius}"
            )));
        }
        if !current.is_finite() || !center.is_finite() {
            return Err(CoilError::Geometry(
                "loop center and current must be finite".to_string(),
            ));
        }
        Ok(CircularLoop {
            center,
            axis: axis.normalized()?,
            radius,
            current,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Magnetic field [T] at `p`, exact to the precision of the
    /// elliptic-integral approximation (~2e-8 relative).
    pub fn field(&self, p: Vec3) -> CoilResult<Vec3> {
        let rel = p - self.center;
        let z = rel.dot(self.axis);
        let radial = rel - self.axis * z;
        let rho = radial.norm();
        let r = self.radius;

        if rho < ON_AXIS_REL * r.max(1.0) {
            // On-axis closed form, no elliptic integrals needed.
            let bz = MU0_T_MM_PER_A * self.current * r * r
                / (2.0 * (r * r + z * z).powf(1.5));
            return Ok(self.axis * bz);
        }

        // dd -> 0 exactly on the winding.
        let dd = (r - rho) * (r - rho) + z * z;
        let sum_sq = (r + rho) * (r + rho) + z * z;
        if dd <= 1e-20 * sum_sq {
            return Err(CoilError::FieldQuery {
                x: p.x,
                y: p.y,
                z: p.z,
            });
        }

        let m = 4.0 * r * rho / sum_sq;
        let (k, e) = ellipke(m);
        let front = MU0_OVER_2PI * self.current / sum_sq.sqrt();

        let bz = front * (k + e * (r * r - rho * rho - z * z) / dd);
        let brho = front * (z / rho) * (-k + e * (r * r + rho * rho + z * z) / dd);

        let rho_hat = radial * (1.0 / rho);
        Ok(self.axis * bz + rho_hat * brho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::racetrack::RacetrackCoil;
    use coil_types::config::MeshParams;

    fn z_loop(radius: f64, current: f64) -> CircularLoop {
        CircularLoop::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), radius, current).unwrap()
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert!(CircularLoop::new(Vec3::ZERO, z, 0.0, 1.0).is_err());
        assert!(CircularLoop::new(Vec3::ZERO, Vec3::ZERO, 5.0, 1.0).is_err());
        assert!(CircularLoop::new(Vec3::ZERO, z, 5.0, f64::NAN).is_err());
    }

    #[test]
    fn test_center_field() {
        // B(0) = mu0 I / 2R.
        let lp = z_loop(25.0, 1000.0);
        let b = lp.field(Vec3::ZERO).unwrap();
        let expected = MU0_T_MM_PER_A * 1000.0 / (2.0 * 25.0);
        assert!((b.z - expected).abs() < 1e-12 * expected);
        assert!(b.x.abs() < 1e-15 && b.y.abs() < 1e-15);
    }

    #[test]
    fn test_on_axis_formula() {
        let lp = z_loop(40.0, 500.0);
        for z in [-70.0, 10.0, 120.0] {
            let b = lp.field(Vec3::new(0.0, 0.0, z)).unwrap();
            let expected = MU0_T_MM_PER_A * 500.0 * 40.0 * 40.0
                / (2.0 * (40.0_f64 * 40.0 + z * z).powf(1.5));
            assert!((b.z - expected).abs() < 1e-14 + 1e-12 * expected.abs());
        }
    }

    #[test]
    fn test_off_axis_matches_fine_polygon() {
        // A finely-chorded circular racetrack converges to the analytic
        // loop field.
        let lp = z_loop(100.0, 2000.0);
        let coil = RacetrackCoil::new(
            Vec3::ZERO,
            [100.0 - 5e-4, 100.0 + 5e-4],
            [0.0, 0.0],
            1e-3,
            256,
            2000.0 / (1e-3 * 1e-3),
        )
        .unwrap();
        let segs = coil
            .mesh(&MeshParams {
                radial_subdivision: 1,
                axial_subdivision: 1,
            })
            .unwrap();

        for p in [
            Vec3::new(30.0, 0.0, 20.0),
            Vec3::new(-60.0, 45.0, -35.0),
            Vec3::new(0.0, 140.0, 10.0),
        ] {
            let exact = lp.field(p).unwrap();
            let mut meshed = Vec3::ZERO;
            for s in &segs {
                meshed = meshed + s.field(p).unwrap();
            }
            let err = (exact - meshed).norm() / exact.norm();
            assert!(err < 1e-3, "relative error {err} at {p:?}");
        }
    }

    #[test]
    fn test_field_on_winding_is_an_error() {
        let lp = z_loop(50.0, 100.0);
        assert!(lp.field(Vec3::new(50.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_no_radial_field_in_loop_plane() {
        // In the plane of the loop z = 0, so B_rho vanishes.
        let lp = z_loop(50.0, 100.0);
        let b = lp.field(Vec3::new(20.0, 0.0, 0.0)).unwrap();
        assert!(b.x.abs() < 1e-15 && b.y.abs() < 1e-15);
    }
}
