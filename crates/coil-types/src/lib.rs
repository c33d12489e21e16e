// ─────────────────────────────────────────────────────────────────────
// Coilfield — Shared Types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod config;
pub mod constants;
pub mod error;
pub mod geom;
