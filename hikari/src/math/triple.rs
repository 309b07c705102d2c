use hikari_derive::*;
use serde::{Deserialize, Serialize};

/// A plain triple of components.
///
/// Used as the coordinate storage of [`Point3`](super::Point3) and
/// [`Vec3`](super::Vec3) and as a per-channel coefficient, e.g. in materials.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    MulScalar,
    DivScalar,
    Index,
    AbsDiffEq,
    RelativeEq,
    Deserialize,
    Serialize,
)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Triple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Triple {
    pub const ZERO: Triple = Triple::new(0.0, 0.0, 0.0);
    pub const ONE: Triple = Triple::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new `Triple` with all components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn dot(&self, other: Triple) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: Triple) -> Triple {
        Triple::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Checks if all components are strictly less than `k`.
    pub fn lower_than(&self, k: f64) -> bool {
        self.x < k && self.y < k && self.z < k
    }
}

impl From<f64> for Triple {
    fn from(v: f64) -> Self {
        Triple::splat(v)
    }
}

impl From<[f64; 3]> for Triple {
    fn from(v: [f64; 3]) -> Self {
        Triple::new(v[0], v[1], v[2])
    }
}

impl From<Triple> for [f64; 3] {
    fn from(v: Triple) -> Self {
        [v.x, v.y, v.z]
    }
}
