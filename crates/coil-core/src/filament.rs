// ─────────────────────────────────────────────────────────────────────
// Coilfield — Filament Elements
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Straight current filaments.
//!
//! The field of a finite segment is the exact Biot–Savart solution in
//! the Hanson–Hirshman form, which stays well conditioned everywhere
//! except on the carrying segment itself. The infinite-line field
//! integral reduces each current element to its 2D kernel
//! `(mu0 I / 2pi) dl × c_perp / |c_perp|²` and integrates it along the
//! segment in closed form.

use coil_types::constants::{MU0_OVER_2PI, MU0_OVER_4PI};
use coil_types::geom::Vec3;

/// Relative threshold below which a query point counts as lying on the
/// conductor.
const SINGULAR_REL: f64 = 1e-10;

/// Straight filament from `a` to `b` [mm] carrying `current` [A].
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
    pub current: f64,
}

impl Segment {
    pub fn new(a: Vec3, b: Vec3, current: f64) -> Self {
        Segment { a, b, current }
    }

    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Magnetic field [T] at `p`, or `None` when `p` lies on the
    /// segment (where the filament model is singular).
    ///
    /// `B = (mu0 I / 4pi) (ri × rf) (|ri| + |rf|)
    ///      / (|ri||rf| (|ri||rf| + ri·rf))`
    pub fn field(&self, p: Vec3) -> Option<Vec3> {
        let ri = self.a - p;
        let rf = self.b - p;
        let li = ri.norm();
        let lf = rf.norm();

        // |ri||rf| + ri·rf -> 0 exactly on the segment.
        let reg = li * lf + ri.dot(rf);
        let len_sq = (self.b - self.a).norm_sq();
        if !(reg > SINGULAR_REL * len_sq) {
            return None;
        }

        let scale = MU0_OVER_4PI * self.current * (li + lf) / (li * lf * reg);
        Some(ri.cross(rf) * scale)
    }

    /// Closed-form ∫ B ds [T·mm] over the entire straight line through
    /// `line_point` with unit direction `line_dir`. `None` when the
    /// probe line intersects the segment.
    pub fn infinite_line_integral(&self, line_point: Vec3, line_dir: Vec3) -> Option<Vec3> {
        let u = line_dir;
        let d = self.b - self.a;
        let c0 = line_point - self.a;

        // Projections onto the plane perpendicular to the probe line.
        let cap_c = c0 - u * c0.dot(u);
        let cap_d = d - u * d.dot(u);

        // |c_perp(t)|² = gamma - 2 beta t + alpha t², t in [0, 1].
        let alpha = cap_d.norm_sq();
        let beta = cap_c.dot(cap_d);
        let gamma = cap_c.norm_sq();

        let scale = alpha + beta.abs() + gamma;
        let eps = 1e-12 * scale;
        let disc = alpha * gamma - beta * beta;

        // J0 = ∫ dt / q(t),  J1 = ∫ t dt / q(t).
        let (j0, j1) = if alpha <= eps {
            // Segment projects to (nearly) a point: q is constant.
            if gamma <= eps {
                return None;
            }
            (1.0 / gamma, 0.5 / gamma)
        } else if disc <= 1e-12 * alpha * gamma.max(alpha) {
            // Projections are colinear: q = alpha (t - t0)².
            let t0 = beta / alpha;
            if (-1e-9..=1.0 + 1e-9).contains(&t0) {
                return None;
            }
            let j0 = -1.0 / (alpha * (1.0 - t0)) - 1.0 / (alpha * t0);
            let j1 =
                (((1.0 - t0).abs() / t0.abs()).ln() - t0 / (1.0 - t0) - 1.0) / alpha;
            (j0, j1)
        } else {
            let s = disc.sqrt();
            let j0 = (((alpha - beta) / s).atan() - (-beta / s).atan()) / s;
            let q0 = gamma;
            let q1 = gamma - 2.0 * beta + alpha;
            let j1 = (q1 / q0).ln() / (2.0 * alpha) + (beta / alpha) * j0;
            (j0, j1)
        };

        let v = d.cross(cap_c) * j0 - d.cross(cap_d) * j1;
        Some(v * (MU0_OVER_2PI * self.current))
    }
}
