// ─────────────────────────────────────────────────────────────────────
// Coilfield — Constants
// License: MIT
// ─────────────────────────────────────────────────────────────────────
/// Vacuum permeability in T·mm/A.
///
/// The workspace follows the millimeter unit system of the original
/// wiggler model: lengths in mm, currents in A, current densities in
/// A/mm², fields in T, field integrals in T·mm.
/// `mu0 = 4π × 10⁻⁷ T·m/A = 4π × 10⁻⁴ T·mm/A`.
pub const MU0_T_MM_PER_A: f64 = 4.0e-4 * std::f64::consts::PI;

/// `mu0 / 4π` in T·mm/A, the Biot–Savart prefactor, exactly 1e-4.
pub const MU0_OVER_4PI: f64 = 1.0e-4;

/// `mu0 / 2π` in T·mm/A, the infinite-line-integral prefactor.
pub const MU0_OVER_2PI: f64 = 2.0e-4;
