use super::Light;
use crate::{
    error::Result,
    math::{Color, Point3, Vec3},
};

/// An omnidirectional light at a point.
///
/// Intensity falls off as `1 / (kc + kl * d + kq * d²)`, i.e. not at all by default.
#[derive(Clone, Debug)]
pub struct PointLight {
    intensity: Color,
    position: Point3,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {
    pub fn new(intensity: Color, position: Point3) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = kc;
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.kl = kl;
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.kq = kq;
        self
    }

    pub fn position(&self) -> Point3 {
        self.position
    }
}

impl Light for PointLight {
    fn intensity_at(&self, p: Point3) -> Color {
        let d_sqr = self.position.distance_squared(p);
        let d = d_sqr.sqrt();
        self.intensity / (self.kc + self.kl * d + self.kq * d_sqr)
    }

    fn direction_toward(&self, p: Point3) -> Result<Vec3> {
        p.subtract(self.position)?.normalize()
    }

    fn distance_to(&self, p: Point3) -> f64 {
        self.position.distance(p)
    }
}
