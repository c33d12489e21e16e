// ─────────────────────────────────────────────────────────────────────
// Coilfield — Mirror Symmetry
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Mirror symmetry transforms.
//!
//! A mirror duplicates every coil in an assembly as its reflection
//! through a plane. Two kinds exist, named for the field component they
//! zero on the plane:
//!
//! - parallel-field-zero: the filament tangents transform as polar
//!   vectors (plain geometric reflection of the winding path), so the
//!   in-plane field components cancel on the plane;
//! - perpendicular-field-zero: the reflection additionally reverses the
//!   current, cancelling the normal component instead.

use crate::assembly::Assembly;
use crate::filament::Segment;
use coil_types::config::MirrorKind;
use coil_types::geom::{Plane, Vec3};

/// One reflection applied to a coil's filaments.
#[derive(Debug, Clone, Copy)]
pub struct MirrorOp {
    pub plane: Plane,
    pub flip_current: bool,
}

impl MirrorOp {
    pub fn new(plane: Plane, kind: MirrorKind) -> Self {
        MirrorOp {
            plane,
            flip_current: kind == MirrorKind::PerpendicularFieldZero,
        }
    }

    /// Reflect a filament. Endpoint order is preserved so the tangent
    /// transforms as a polar vector; the current sign handles the kind.
    pub fn apply_segment(&self, seg: &Segment) -> Segment {
        let current = if self.flip_current {
            -seg.current
        } else {
            seg.current
        };
        Segment::new(
            self.plane.reflect_point(seg.a),
            self.plane.reflect_point(seg.b),
            current,
        )
    }

    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        self.plane.reflect_point(p)
    }
}

/// Append, for every coil already in the assembly, its mirror image
/// through `plane`. Doubles the coil count.
pub fn apply_mirror(assembly: &mut Assembly, plane: &Plane, kind: MirrorKind) {
    let op = MirrorOp::new(*plane, kind);
    let mirrored: Vec<_> = assembly
        .instances()
        .iter()
        .map(|inst| inst.mirrored(op))
        .collect();
    for inst in mirrored {
        assembly.push_instance(inst);
    }
}
