use super::Light;
use crate::{
    error::Result,
    math::{Color, Point3, Vec3},
};

/// Light from infinitely far away, e.g. the sun.
#[derive(Clone, Debug)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vec3,
}

impl DirectionalLight {
    /// Creates a new `DirectionalLight` shining along `direction`.
    pub fn new(intensity: Color, direction: Vec3) -> Result<Self> {
        Ok(Self {
            intensity,
            direction: direction.normalize()?,
        })
    }
}

impl Light for DirectionalLight {
    fn intensity_at(&self, _p: Point3) -> Color {
        self.intensity
    }

    fn direction_toward(&self, _p: Point3) -> Result<Vec3> {
        Ok(self.direction)
    }

    fn distance_to(&self, _p: Point3) -> f64 {
        f64::INFINITY
    }
}
