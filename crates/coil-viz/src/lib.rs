// ─────────────────────────────────────────────────────────────────────
// Coilfield — Visualisation
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! File-based visualisation: PNG line plots of scan results and
//! geometry exports of coil assemblies.

pub mod geometry;
pub mod plot;
