use super::{common::is_zero, Point3, Vec3};
use crate::{error::Result, geometries::GeoPoint};

/// Distance secondary rays are moved off the surface they are spawned from.
pub const DELTA: f64 = 0.1;

/// A ray with a unit direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    head: Point3,
    direction: Vec3,
}

impl Ray {
    /// Creates a new `Ray`, normalizing `direction`.
    pub fn new(head: Point3, direction: Vec3) -> Result<Self> {
        Ok(Self {
            head,
            direction: direction.normalize()?,
        })
    }

    /// Creates a new `Ray` from a surface point with its head moved along `normal`.
    ///
    /// The head is moved to the side of the surface `direction` points to so the
    /// ray won't hit the surface it starts from.
    pub fn offset(head: Point3, direction: Vec3, normal: Vec3) -> Result<Self> {
        let nd = normal.dot(direction);
        let delta = normal.scale(if nd >= 0.0 { DELTA } else { -DELTA })?;
        Self::new(head + delta, direction)
    }

    pub fn head(&self) -> Point3 {
        self.head
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Returns the point at distance `t` along the ray.
    pub fn point(&self, t: f64) -> Point3 {
        if is_zero(t) {
            self.head
        } else {
            Point3::from(self.head.xyz() + self.direction.xyz() * t)
        }
    }

    /// Returns the point closest to the ray head.
    pub fn find_closest_point(&self, points: &[Point3]) -> Option<Point3> {
        points
            .iter()
            .copied()
            .min_by(|a, b| {
                self.head
                    .distance_squared(*a)
                    .total_cmp(&self.head.distance_squared(*b))
            })
    }

    /// Returns the hit closest to the ray head.
    pub fn find_closest_geo_point<'a>(&self, hits: &[GeoPoint<'a>]) -> Option<GeoPoint<'a>> {
        hits.iter().copied().min_by(|a, b| {
            self.head
                .distance_squared(a.point)
                .total_cmp(&self.head.distance_squared(b.point))
        })
    }
}
