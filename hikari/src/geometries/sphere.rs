use super::{hits_at, impl_surface, GeoPoint, Geometry, Intersectable, Surface};
use crate::{
    error::{Error, Result},
    math::{align_zero, Point3, Ray, Vec3},
};

/// A sphere object.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    surface: Surface,
}

impl Sphere {
    /// Creates a new `Sphere`. Fails if `radius` is not positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if align_zero(radius) <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            surface: Surface::default(),
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl_surface!(Sphere);

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let head = ray.head();
        let v = ray.direction();

        // Starting at the center has exactly one exit, one radius away
        if head == self.center {
            return hits_at(self, ray, [self.radius], max_distance);
        }
        let u = self.center.subtract(head).ok()?;

        let tm = align_zero(v.dot(u));
        let d_sqr = align_zero(u.length_squared() - tm * tm);
        let th_sqr = align_zero(self.radius * self.radius - d_sqr);
        // Tangent rays are misses
        if th_sqr <= 0.0 {
            return None;
        }

        let th = th_sqr.sqrt();
        let t1 = align_zero(tm - th);
        let t2 = align_zero(tm + th);
        hits_at(self, ray, [t1, t2], max_distance)
    }
}

impl Geometry for Sphere {
    fn normal(&self, p: Point3) -> Result<Vec3> {
        p.subtract(self.center)?.normalize()
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
