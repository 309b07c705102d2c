mod cylinder;
mod geometries;
mod plane;
mod polygon;
mod sphere;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use geometries::Geometries;
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::Tube;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    materials::Material,
    math::{Color, Point3, Ray, Vec3},
};

/// A hit on a geometry.
#[derive(Copy, Clone, Debug)]
pub struct GeoPoint<'a> {
    pub geometry: &'a dyn Geometry,
    pub point: Point3,
}

/// Anything a [`Ray`] can be intersected with.
pub trait Intersectable: Send + Sync + std::fmt::Debug {
    /// Intersects `ray` with this object.
    ///
    /// Returns the hits at distances in `(0, max_distance]`, or `None` if there are none.
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>>;

    /// Returns all hits along `ray`.
    fn find_geo_intersections(&self, ray: &Ray) -> Option<Vec<GeoPoint<'_>>> {
        self.intersect(ray, f64::INFINITY)
    }

    /// Returns all hit points along `ray`.
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point3>> {
        self.find_geo_intersections(ray)
            .map(|hits| hits.into_iter().map(|hit| hit.point).collect())
    }
}

/// A shaded surface.
pub trait Geometry: Intersectable {
    /// Returns the unit normal at `p`, which is expected to be on the surface.
    fn normal(&self, p: Point3) -> Result<Vec3>;
    fn surface(&self) -> &Surface;

    fn emission(&self) -> Color {
        self.surface().emission
    }

    fn material(&self) -> &Material {
        &self.surface().material
    }
}

/// Appearance of a [`Geometry`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Surface {
    pub emission: Color,
    pub material: Material,
}

// Fluent setters for the surface of a geometry with a `surface` field
macro_rules! impl_surface {
    ($geometry:ident) => {
        impl $geometry {
            pub fn with_emission(mut self, emission: $crate::math::Color) -> Self {
                self.surface.emission = emission;
                self
            }

            pub fn with_material(mut self, material: $crate::materials::Material) -> Self {
                self.surface.material = material;
                self
            }

            pub fn with_surface(mut self, surface: $crate::geometries::Surface) -> Self {
                self.surface = surface;
                self
            }
        }
    };
}
pub(crate) use impl_surface;

/// Wraps hits at the ray distances `ts` that are in `(0, max_distance]`.
fn hits_at<'a>(
    geometry: &'a dyn Geometry,
    ray: &Ray,
    ts: impl IntoIterator<Item = f64>,
    max_distance: f64,
) -> Option<Vec<GeoPoint<'a>>> {
    let hits = ts
        .into_iter()
        .filter(|&t| t > 0.0 && crate::math::align_zero(t - max_distance) <= 0.0)
        .map(|t| GeoPoint {
            geometry,
            point: ray.point(t),
        })
        .collect::<Vec<_>>();
    if hits.is_empty() {
        None
    } else {
        Some(hits)
    }
}
