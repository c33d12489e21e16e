//! Mathematical primitives for Coilfield.

pub mod elliptic;
pub mod quadrature;
