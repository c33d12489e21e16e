// ─────────────────────────────────────────────────────────────────────
// Coilfield — Field Engine
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Air-coil magnetostatics from filament currents.
//!
//! Coils are meshed into straight filament segments; fields are exact
//! per-segment Biot–Savart sums, field integrals are either quadrature
//! along a finite probe line or the closed-form infinite-line integral.

pub mod assembly;
pub mod field;
pub mod filament;
pub mod loops;
pub mod racetrack;
pub mod scan;
pub mod symmetry;
