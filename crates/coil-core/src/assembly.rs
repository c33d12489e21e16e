// ─────────────────────────────────────────────────────────────────────
// Coilfield — Assemblies
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Coil containers.
//!
//! An `Assembly` owns its coils directly; mirrored copies are stored as
//! the base coil plus a chain of reflections applied at mesh time.

use crate::filament::Segment;
use crate::racetrack::{DrawAttrs, RacetrackCoil};
use crate::symmetry::{self, MirrorOp};
use coil_types::config::{CoilSetConfig, MeshParams};
use coil_types::error::CoilResult;
use coil_types::geom::{Plane, Vec3};

/// One coil placement: a base coil and the reflections applied to it.
#[derive(Debug, Clone)]
pub struct CoilInstance {
    coil: RacetrackCoil,
    reflections: Vec<MirrorOp>,
}

impl CoilInstance {
    fn base(coil: RacetrackCoil) -> Self {
        CoilInstance {
            coil,
            reflections: Vec::new(),
        }
    }

    pub fn coil(&self) -> &RacetrackCoil {
        &self.coil
    }

    pub fn is_mirrored(&self) -> bool {
        !self.reflections.is_empty()
    }

    /// The same coil with one more reflection appended.
    pub(crate) fn mirrored(&self, op: MirrorOp) -> Self {
        let mut reflections = self.reflections.clone();
        reflections.push(op);
        CoilInstance {
            coil: self.coil.clone(),
            reflections,
        }
    }

    fn mesh(&self, params: &MeshParams) -> CoilResult<Vec<Segment>> {
        let mut segments = self.coil.mesh(params)?;
        for op in &self.reflections {
            for seg in &mut segments {
                *seg = op.apply_segment(seg);
            }
        }
        Ok(segments)
    }

    fn outline(&self) -> Vec<Vec3> {
        let mut pts = self.coil.outline();
        for op in &self.reflections {
            for p in &mut pts {
                *p = op.apply_point(*p);
            }
        }
        pts
    }
}

/// Coil outline prepared for drawing.
#[derive(Debug, Clone)]
pub struct Outline {
    pub name: String,
    pub points: Vec<Vec3>,
    pub draw: DrawAttrs,
}

/// Owned container of coils.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    instances: Vec<CoilInstance>,
}

impl Assembly {
    pub fn new() -> Self {
        Assembly::default()
    }

    /// Build the full assembly from a configuration: all coils, then
    /// the optional mirror symmetry.
    pub fn from_config(cfg: &CoilSetConfig) -> CoilResult<Self> {
        let mut asm = Assembly::new();
        for coil_cfg in &cfg.coils {
            asm.push(RacetrackCoil::from_config(coil_cfg)?);
        }
        if let Some(sym) = &cfg.symmetry {
            let plane = Plane::new(sym.point, sym.normal)?;
            symmetry::apply_mirror(&mut asm, &plane, sym.kind);
        }
        Ok(asm)
    }

    pub fn push(&mut self, coil: RacetrackCoil) {
        self.instances.push(CoilInstance::base(coil));
    }

    pub(crate) fn push_instance(&mut self, inst: CoilInstance) {
        self.instances.push(inst);
    }

    pub fn instances(&self) -> &[CoilInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Filament mesh of every coil in the assembly.
    pub fn mesh(&self, params: &MeshParams) -> CoilResult<Vec<Segment>> {
        let mut segments = Vec::new();
        for inst in &self.instances {
            segments.extend(inst.mesh(params)?);
        }
        Ok(segments)
    }

    /// Drawing outlines for every coil, reflections applied.
    pub fn outlines(&self) -> Vec<Outline> {
        self.instances
            .iter()
            .map(|inst| Outline {
                name: inst.coil.name.clone(),
                points: inst.outline(),
                draw: inst.coil.draw_attrs(),
            })
            .collect()
    }
}
