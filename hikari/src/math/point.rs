use hikari_derive::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Sub};

use super::{Triple, Vec3};
use crate::error::Result;

/// A point in three dimensional space.
#[derive(Copy, Clone, Debug, PartialEq, AbsDiffEq, RelativeEq)]
pub struct Point3 {
    xyz: Triple,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 { xyz: Triple::ZERO };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Triple::new(x, y, z),
        }
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

    /// Returns the vector from `other` to this point.
    ///
    /// Fails if the points coincide.
    pub fn subtract(&self, other: Point3) -> Result<Vec3> {
        Vec3::try_from(self.xyz - other.xyz)
    }

    pub fn distance_squared(&self, other: Point3) -> f64 {
        (self.xyz - other.xyz).length_squared()
    }

    pub fn distance(&self, other: Point3) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<Triple> for Point3 {
    fn from(xyz: Triple) -> Self {
        Self { xyz }
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;

    fn add(self, v: Vec3) -> Point3 {
        Point3::from(self.xyz + v.xyz())
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;

    fn sub(self, v: Vec3) -> Point3 {
        Point3::from(self.xyz - v.xyz())
    }
}
