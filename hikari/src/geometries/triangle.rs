use super::{GeoPoint, Geometry, Intersectable, Polygon, Surface};
use crate::{
    error::Result,
    materials::Material,
    math::{Color, Point3, Ray, Vec3},
};

/// A triangle object.
#[derive(Clone, Debug)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Creates a new `Triangle`. Fails if the points are on a single line.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Result<Self> {
        Ok(Self {
            polygon: Polygon::new(vec![p0, p1, p2])?,
        })
    }

    pub fn vertices(&self) -> &[Point3] {
        self.polygon.vertices()
    }

    pub fn with_emission(self, emission: Color) -> Self {
        Self {
            polygon: self.polygon.with_emission(emission),
        }
    }

    pub fn with_material(self, material: Material) -> Self {
        Self {
            polygon: self.polygon.with_material(material),
        }
    }

    pub fn with_surface(self, surface: Surface) -> Self {
        Self {
            polygon: self.polygon.with_surface(surface),
        }
    }
}

impl Intersectable for Triangle {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let p = self.polygon.hit_point(ray, max_distance)?;
        Some(vec![GeoPoint {
            geometry: self,
            point: p,
        }])
    }
}

impl Geometry for Triangle {
    fn normal(&self, p: Point3) -> Result<Vec3> {
        self.polygon.normal(p)
    }

    fn surface(&self) -> &Surface {
        self.polygon.surface()
    }
}
