// ─────────────────────────────────────────────────────────────────────
// Coilfield — Property-Based Tests (proptest) for coil-types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Covers: Vec3 algebra invariants, Plane reflection involutions,
//! configuration serialization roundtrip.

use coil_types::config::{CoilSetConfig, MirrorKind};
use coil_types::geom::{Plane, Vec3};
use proptest::prelude::*;

fn finite_coord() -> impl Strategy<Value = f64> {
    -1.0e3f64..1.0e3
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (finite_coord(), finite_coord(), finite_coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

// ── Vec3 Algebra ─────────────────────────────────────────────────────

proptest! {
    /// Cross product is perpendicular to both factors.
    #[test]
    fn cross_is_perpendicular(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.norm() * b.norm();
        prop_assume!(scale > 1e-6);
        prop_assert!(c.dot(a).abs() <= 1e-9 * scale * a.norm().max(1.0));
        prop_assert!(c.dot(b).abs() <= 1e-9 * scale * b.norm().max(1.0));
    }

    /// |a × b|² + (a·b)² = |a|²|b|² (Lagrange identity).
    #[test]
    fn lagrange_identity(a in vec3(), b in vec3()) {
        let lhs = a.cross(b).norm_sq() + a.dot(b).powi(2);
        let rhs = a.norm_sq() * b.norm_sq();
        prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.max(1.0));
    }

    /// Normalization yields a unit vector for nonzero input.
    #[test]
    fn normalized_is_unit(v in vec3()) {
        prop_assume!(v.norm() > 1e-6);
        let u = v.normalized().unwrap();
        prop_assert!((u.norm() - 1.0).abs() < 1e-12);
    }
}

// ── Plane Reflections ────────────────────────────────────────────────

proptest! {
    /// Reflecting a point twice restores it.
    #[test]
    fn point_reflection_is_involution(
        p in vec3(),
        origin in vec3(),
        n in vec3(),
    ) {
        prop_assume!(n.norm() > 1e-6);
        let plane = Plane::new(origin, n).unwrap();
        let back = plane.reflect_point(plane.reflect_point(p));
        prop_assert!((back - p).norm() <= 1e-9 * (1.0 + p.norm() + origin.norm()));
    }

    /// Polar and axial reflections preserve the norm.
    #[test]
    fn vector_reflections_preserve_norm(v in vec3(), n in vec3()) {
        prop_assume!(n.norm() > 1e-6);
        let plane = Plane::new(Vec3::ZERO, n).unwrap();
        prop_assert!((plane.reflect_polar(v).norm() - v.norm()).abs() < 1e-9 * (1.0 + v.norm()));
        prop_assert!((plane.reflect_axial(v).norm() - v.norm()).abs() < 1e-9 * (1.0 + v.norm()));
    }

    /// Axial reflection is the negated polar reflection.
    #[test]
    fn axial_is_negated_polar(v in vec3(), n in vec3()) {
        prop_assume!(n.norm() > 1e-6);
        let plane = Plane::new(Vec3::ZERO, n).unwrap();
        let diff = plane.reflect_axial(v) + plane.reflect_polar(v);
        prop_assert!(diff.norm() <= 1e-9 * (1.0 + v.norm()));
    }
}

// ── Config Roundtrip ─────────────────────────────────────────────────

proptest! {
    /// A generated config survives a JSON roundtrip.
    #[test]
    fn config_roundtrip(
        r_min in 1.0f64..100.0,
        width in 1.0f64..100.0,
        height in 1.0f64..100.0,
        j in -300.0f64..300.0,
        points in 2usize..512,
    ) {
        let json = format!(
            r#"{{
                "model_name": "prop",
                "coils": [{{
                    "name": "c0",
                    "center": [0.0, 0.0, 10.0],
                    "corner_radii": [{r_min}, {r_max}],
                    "straight_sections": [50.0, 0.0],
                    "height": {height},
                    "arc_segments": 4,
                    "current_density": {j}
                }}],
                "symmetry": {{
                    "point": [0,0,0], "normal": [0,0,1],
                    "kind": "perpendicular-field-zero"
                }},
                "profile_scan": {{"start": [0,0,0], "end": [0,1,0], "points": {points}}},
                "integral_sweep": {{
                    "line_start": [0,-1,0], "line_end": [0,1,0],
                    "sweep_direction": [1,0,0],
                    "offset_min": -1.0, "offset_max": 1.0, "samples": 3
                }}
            }}"#,
            r_max = r_min + width,
        );
        let cfg: CoilSetConfig = serde_json::from_str(&json).unwrap();
        let back: CoilSetConfig =
            serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();

        prop_assert_eq!(back.coils.len(), 1);
        prop_assert!((back.coils[0].corner_radii[1] - (r_min + width)).abs() < 1e-12);
        prop_assert!((back.coils[0].current_density - j).abs() < 1e-12);
        prop_assert_eq!(back.profile_scan.points, points);
        prop_assert_eq!(
            back.symmetry.unwrap().kind,
            MirrorKind::PerpendicularFieldZero
        );
    }
}
