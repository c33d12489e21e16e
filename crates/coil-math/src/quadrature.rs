// ─────────────────────────────────────────────────────────────────────
// Coilfield — Quadrature
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Composite Gauss–Legendre quadrature.
//!
//! An 8-point rule per panel integrates polynomials up to degree 15
//! exactly; the coil fields sampled along probe lines are smooth, so a
//! modest panel count converges quickly.

use coil_types::geom::Vec3;

/// 8-point Gauss–Legendre nodes and weights on [-1, 1].
pub const GAUSS_LEGENDRE_8: [(f64, f64); 8] = [
    (-0.960_289_856_497_536_2, 0.101_228_536_290_376_3),
    (-0.796_666_477_413_626_7, 0.222_381_034_453_374_5),
    (-0.525_532_409_916_329_0, 0.313_706_645_877_887_3),
    (-0.183_434_642_495_649_8, 0.362_683_783_378_362_0),
    (0.183_434_642_495_649_8, 0.362_683_783_378_362_0),
    (0.525_532_409_916_329_0, 0.313_706_645_877_887_3),
    (0.796_666_477_413_626_7, 0.222_381_034_453_374_5),
    (0.960_289_856_497_536_2, 0.101_228_536_290_376_3),
];

/// Composite Gauss–Legendre integral of a scalar function over [a, b].
pub fn integrate(f: impl Fn(f64) -> f64, a: f64, b: f64, panels: usize) -> f64 {
    let panels = panels.max(1);
    let h = (b - a) / panels as f64;
    let mut acc = 0.0;
    for p in 0..panels {
        let mid = a + (p as f64 + 0.5) * h;
        for &(x, w) in &GAUSS_LEGENDRE_8 {
            acc += w * f(mid + 0.5 * h * x);
        }
    }
    acc * 0.5 * h
}

/// Composite Gauss–Legendre integral of a vector-valued function over
/// [a, b]. Used for line integrals of the field vector.
pub fn integrate_vec3(f: impl Fn(f64) -> Vec3, a: f64, b: f64, panels: usize) -> Vec3 {
    let panels = panels.max(1);
    let h = (b - a) / panels as f64;
    let mut acc = Vec3::ZERO;
    for p in 0..panels {
        let mid = a + (p as f64 + 0.5) * h;
        for &(x, w) in &GAUSS_LEGENDRE_8 {
            acc = acc + f(mid + 0.5 * h * x) * w;
        }
    }
    acc * (0.5 * h)
}
