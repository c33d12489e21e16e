// ─────────────────────────────────────────────────────────────────────
// Coilfield — Scans
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Field profile scans and field-integral sweeps.

use crate::field::{Component, FieldModel, IntegralKind};
use coil_types::config::{ProfileScanConfig, SweepScanConfig};
use coil_types::error::{CoilError, CoilResult};
use coil_types::geom::Vec3;
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Evenly spaced sample points along a straight line.
#[derive(Debug, Clone)]
pub struct LineScan {
    points: Vec<Vec3>,
    offsets: Array1<f64>,
}

impl LineScan {
    /// `n` points from `start` to `end` inclusive.
    pub fn linspace(start: Vec3, end: Vec3, n: usize) -> CoilResult<Self> {
        if n < 2 {
            return Err(CoilError::Config(format!(
                "a line scan needs at least 2 points, got {n}"
            )));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(CoilError::Config(
                "scan endpoints must be finite".to_string(),
            ));
        }
        let span = end - start;
        let length = span.norm();
        let mut points = Vec::with_capacity(n);
        let mut offsets = Array1::zeros(n);
        for i in 0..n {
            let t = i as f64 / (n - 1) as f64;
            points.push(start + span * t);
            offsets[i] = t * length;
        }
        Ok(LineScan { points, offsets })
    }

    pub fn from_config(cfg: &ProfileScanConfig) -> CoilResult<Self> {
        LineScan::linspace(cfg.start, cfg.end, cfg.points)
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Distance of each sample from the scan start [mm].
    pub fn offsets(&self) -> &Array1<f64> {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One field component at every point of a scan.
pub fn scan_component(
    model: &FieldModel,
    scan: &LineScan,
    comp: Component,
) -> CoilResult<Array1<f64>> {
    let mut out = Array1::zeros(scan.len());
    for (i, &p) in scan.points().iter().enumerate() {
        out[i] = comp.select(model.field(p)?);
    }
    Ok(out)
}

/// Like `scan_component`, with zero-mean Gaussian noise of standard
/// deviation `sigma` [T] added to each sample. Models a Hall-probe
/// bench measurement.
pub fn scan_component_noisy<R: Rng>(
    model: &FieldModel,
    scan: &LineScan,
    comp: Component,
    sigma: f64,
    rng: &mut R,
) -> CoilResult<Array1<f64>> {
    let noise = Normal::new(0.0, sigma)
        .map_err(|e| CoilError::Config(format!("bad noise width {sigma}: {e}")))?;
    let mut out = scan_component(model, scan, comp)?;
    for v in out.iter_mut() {
        *v += noise.sample(rng);
    }
    Ok(out)
}

/// A family of parallel probe lines: the base line shifted along
/// `sweep_dir` by each offset.
#[derive(Debug, Clone)]
pub struct SweepSpec {
    line_start: Vec3,
    line_end: Vec3,
    sweep_dir: Vec3,
    offsets: Array1<f64>,
    kind: IntegralKind,
}

impl SweepSpec {
    pub fn new(
        line_start: Vec3,
        line_end: Vec3,
        sweep_dir: Vec3,
        offset_min: f64,
        offset_max: f64,
        samples: usize,
        kind: IntegralKind,
    ) -> CoilResult<Self> {
        if samples < 2 {
            return Err(CoilError::Config(format!(
                "an integral sweep needs at least 2 samples, got {samples}"
            )));
        }
        if !(offset_min.is_finite() && offset_max.is_finite() && offset_min < offset_max) {
            return Err(CoilError::Config(format!(
                "sweep offsets must satisfy min < max, got [{offset_min}, {offset_max}]"
            )));
        }
        let step = (offset_max - offset_min) / (samples - 1) as f64;
        let offsets = Array1::from_iter((0..samples).map(|i| offset_min + step * i as f64));
        Ok(SweepSpec {
            line_start,
            line_end,
            sweep_dir: sweep_dir.normalized()?,
            offsets,
            kind,
        })
    }

    pub fn from_config(cfg: &SweepScanConfig, kind: IntegralKind) -> CoilResult<Self> {
        SweepSpec::new(
            cfg.line_start,
            cfg.line_end,
            cfg.sweep_direction,
            cfg.offset_min,
            cfg.offset_max,
            cfg.samples,
            kind,
        )
    }

    pub fn offsets(&self) -> &Array1<f64> {
        &self.offsets
    }
}

/// Field integral of one component for every probe line of the sweep.
/// Returns `(offsets, integrals)` with integrals in T·mm.
pub fn integral_sweep(
    model: &FieldModel,
    spec: &SweepSpec,
    comp: Component,
) -> CoilResult<(Array1<f64>, Array1<f64>)> {
    let mut values = Array1::zeros(spec.offsets.len());
    for (i, &off) in spec.offsets.iter().enumerate() {
        let shift = spec.sweep_dir * off;
        let total =
            model.field_integral(spec.line_start + shift, spec.line_end + shift, spec.kind)?;
        values[i] = comp.select(total);
    }
    Ok((spec.offsets.clone(), values))
}
