use super::{hits_at, impl_surface, GeoPoint, Geometry, Intersectable, Surface};
use crate::{
    error::{Error, Result},
    math::{align_zero, Point3, Ray, Vec3},
};

/// An infinite plane.
#[derive(Clone, Debug)]
pub struct Plane {
    q: Point3,
    normal: Vec3,
    surface: Surface,
}

impl Plane {
    /// Creates a new `Plane` through `q`. `normal` doesn't need to be normalized.
    pub fn new(q: Point3, normal: Vec3) -> Result<Self> {
        Ok(Self {
            q,
            normal: normal.normalize()?,
            surface: Surface::default(),
        })
    }

    /// Creates a new `Plane` through three points.
    ///
    /// The normal follows the winding `p1 -> p2 -> p3`.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let normal = p2
            .subtract(p1)
            .and_then(|v1| v1.cross(p3.subtract(p2)?))
            .and_then(|n| n.normalize())
            .map_err(|_| Error::CollinearPoints)?;
        Ok(Self {
            q: p1,
            normal,
            surface: Surface::default(),
        })
    }

    pub fn q(&self) -> Point3 {
        self.q
    }

    /// Returns the distance to the hit along `ray` if there is one in `(0, max_distance]`.
    pub(super) fn hit_distance(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        // Head on the plane would give a zero vector and is a miss anyway
        let to_plane = self.q.subtract(ray.head()).ok()?;

        let nv = align_zero(self.normal.dot(ray.direction()));
        if nv == 0.0 {
            return None;
        }

        let t = align_zero(self.normal.dot(to_plane) / nv);
        if t <= 0.0 || align_zero(t - max_distance) > 0.0 {
            None
        } else {
            Some(t)
        }
    }
}

impl_surface!(Plane);

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let t = self.hit_distance(ray, max_distance)?;
        hits_at(self, ray, [t], max_distance)
    }
}

impl Geometry for Plane {
    fn normal(&self, _p: Point3) -> Result<Vec3> {
        Ok(self.normal)
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
