use super::{Light, PointLight};
use crate::{
    error::Result,
    math::{Color, Point3, Vec3},
};

/// A [`PointLight`] that shines along a direction.
///
/// Intensity is scaled by `max(0, dir·l)^narrow_beam` where `l` is the direction
/// toward the lit point.
#[derive(Clone, Debug)]
pub struct SpotLight {
    light: PointLight,
    direction: Vec3,
    narrow_beam: f64,
}

impl SpotLight {
    pub fn new(intensity: Color, position: Point3, direction: Vec3) -> Result<Self> {
        Ok(Self {
            light: PointLight::new(intensity, position),
            direction: direction.normalize()?,
            narrow_beam: 1.0,
        })
    }

    pub fn with_kc(self, kc: f64) -> Self {
        Self {
            light: self.light.with_kc(kc),
            ..self
        }
    }

    pub fn with_kl(self, kl: f64) -> Self {
        Self {
            light: self.light.with_kl(kl),
            ..self
        }
    }

    pub fn with_kq(self, kq: f64) -> Self {
        Self {
            light: self.light.with_kq(kq),
            ..self
        }
    }

    /// Sharpens the beam, `1.0` being the plain cosine falloff.
    pub fn with_narrow_beam(mut self, narrow_beam: f64) -> Self {
        self.narrow_beam = narrow_beam;
        self
    }
}

impl Light for SpotLight {
    fn intensity_at(&self, p: Point3) -> Color {
        // Points at the light itself have no direction and get no light
        let Ok(l) = self.light.direction_toward(p) else {
            return Color::BLACK;
        };
        let falloff = self.direction.dot(l).max(0.0).powf(self.narrow_beam);
        self.light.intensity_at(p) * falloff
    }

    fn direction_toward(&self, p: Point3) -> Result<Vec3> {
        self.light.direction_toward(p)
    }

    fn distance_to(&self, p: Point3) -> f64 {
        self.light.distance_to(p)
    }
}
