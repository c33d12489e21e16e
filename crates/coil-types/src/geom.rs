// ─────────────────────────────────────────────────────────────────────
// Coilfield — Geometry Primitives
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! 3D vectors and mirror planes.
//!
//! Lengths are in millimeters throughout the workspace; field vectors
//! reuse `Vec3` with tesla components.

use crate::error::{CoilError, CoilResult};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Plain 3D vector. Serializes as `[x, y, z]` to match the JSON configs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn norm_sq(self) -> f64 {
        self.dot(self)
    }

    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Unit vector, or an error for a zero / non-finite input.
    pub fn normalized(self) -> CoilResult<Vec3> {
        let n = self.norm();
        if !n.is_finite() || n == 0.0 {
            return Err(CoilError::Geometry(format!(
                "cannot normalize vector with norm {n}"
            )));
        }
        Ok(self * (1.0 / n))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(a: [f64; 3]) -> Self {
        Vec3::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Mirror plane given by a point on the plane and its unit normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// The normal is normalized here; a zero normal is rejected.
    pub fn new(point: Vec3, normal: Vec3) -> CoilResult<Self> {
        if !point.is_finite() || !normal.is_finite() {
            return Err(CoilError::Geometry(
                "mirror plane point/normal must be finite".to_string(),
            ));
        }
        Ok(Plane {
            point,
            normal: normal.normalized()?,
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Reflect a position through the plane.
    pub fn reflect_point(&self, p: Vec3) -> Vec3 {
        let d = (p - self.point).dot(self.normal);
        p - self.normal * (2.0 * d)
    }

    /// Reflect a polar vector (direction, current tangent).
    pub fn reflect_polar(&self, v: Vec3) -> Vec3 {
        v - self.normal * (2.0 * v.dot(self.normal))
    }

    /// Reflect an axial vector (circulation axis, magnetic field).
    pub fn reflect_axial(&self, v: Vec3) -> Vec3 {
        self.normal * (2.0 * v.dot(self.normal)) - v
    }
}
