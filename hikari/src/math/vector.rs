use hikari_derive::{AbsDiffEq, RelativeEq};
use std::ops::Neg;

use super::{common::is_zero, Triple};
use crate::error::{Error, Result};

/// A non-zero direction in three dimensional space.
///
/// Every operation that could collapse the vector to zero is fallible.
#[derive(Copy, Clone, Debug, PartialEq, AbsDiffEq, RelativeEq)]
pub struct Vec3 {
    xyz: Triple,
}

impl Vec3 {
    pub const X: Vec3 = Vec3 {
        xyz: Triple::new(1.0, 0.0, 0.0),
    };
    pub const Y: Vec3 = Vec3 {
        xyz: Triple::new(0.0, 1.0, 0.0),
    };
    pub const Z: Vec3 = Vec3 {
        xyz: Triple::new(0.0, 0.0, 1.0),
    };

    /// Creates a new `Vec3`, failing on the zero vector.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::try_from(Triple::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.xyz.x
    }

    pub fn y(&self) -> f64 {
        self.xyz.y
    }

    pub fn z(&self) -> f64 {
        self.xyz.z
    }

    pub fn xyz(&self) -> Triple {
        self.xyz
    }

    pub fn add(&self, other: Vec3) -> Result<Vec3> {
        Vec3::try_from(self.xyz + other.xyz)
    }

    pub fn subtract(&self, other: Vec3) -> Result<Vec3> {
        Vec3::try_from(self.xyz - other.xyz)
    }

    /// Fails if `s` is zero.
    pub fn scale(&self, s: f64) -> Result<Vec3> {
        Vec3::try_from(self.xyz * s)
    }

    #[inline]
    pub fn dot(&self, other: Vec3) -> f64 {
        self.xyz.dot(other.xyz)
    }

    /// Fails if the vectors are parallel.
    pub fn cross(&self, other: Vec3) -> Result<Vec3> {
        Vec3::try_from(self.xyz.cross(other.xyz))
    }

    pub fn length_squared(&self) -> f64 {
        self.xyz.length_squared()
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector in the direction of this vector.
    ///
    /// Fails with [`Error::DegenerateVector`] if the length is numerically zero.
    pub fn normalize(&self) -> Result<Vec3> {
        let len = self.length();
        if is_zero(len) {
            return Err(Error::DegenerateVector);
        }
        Ok(Vec3 {
            xyz: self.xyz / len,
        })
    }

    pub fn is_orthogonal(&self, other: Vec3) -> bool {
        is_zero(self.dot(other))
    }

    /// Reflects this vector about the unit normal `n`, i.e. `v - 2(v·n)n`.
    ///
    /// A vector perpendicular to `n` is returned as is.
    pub fn reflect(&self, n: Vec3) -> Result<Vec3> {
        let vn = self.dot(n);
        if is_zero(vn) {
            return Ok(*self);
        }
        Vec3::try_from(self.xyz - n.xyz * (2.0 * vn))
    }
}

impl TryFrom<Triple> for Vec3 {
    type Error = Error;

    fn try_from(xyz: Triple) -> Result<Self> {
        if xyz == Triple::ZERO {
            Err(Error::ZeroVector)
        } else {
            Ok(Self { xyz })
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 { xyz: -self.xyz }
    }
}
