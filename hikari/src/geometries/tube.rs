use super::{hits_at, impl_surface, GeoPoint, Geometry, Intersectable, Surface};
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// An infinite cylinder around an axis.
#[derive(Clone, Debug)]
pub struct Tube {
    axis: Ray,
    radius: f64,
    surface: Surface,
}

impl Tube {
    /// Creates a new `Tube`. Fails if `radius` is not positive.
    pub fn new(axis: Ray, radius: f64) -> Result<Self> {
        if align_zero(radius) <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self {
            axis,
            radius,
            surface: Surface::default(),
        })
    }

    pub fn axis(&self) -> Ray {
        self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the signed distance of the projection of `p` along the axis.
    pub(super) fn axial_distance(&self, p: Point3) -> f64 {
        align_zero(
            self.axis
                .direction()
                .xyz()
                .dot(p.xyz() - self.axis.head().xyz()),
        )
    }

    /// Returns the ray distances where `ray` crosses the tube, in ascending order.
    ///
    /// Rays parallel to the axis and tangent rays don't cross.
    pub(super) fn crossings(&self, ray: &Ray) -> Option<(f64, f64)> {
        let va = self.axis.direction().xyz();
        let v = ray.direction().xyz();
        let dp = ray.head().xyz() - self.axis.head().xyz();

        // Solve |(v - (v·va)va)t + (dp - (dp·va)va)|² = r² for t
        let v_perp = v - va * v.dot(va);
        let dp_perp = dp - va * dp.dot(va);

        let a = v_perp.length_squared();
        if is_zero(a) {
            return None;
        }
        let b = 2.0 * v_perp.dot(dp_perp);
        let c = dp_perp.length_squared() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            return None;
        }
        let rd = discriminant.sqrt();

        Some((
            align_zero((-b - rd) / (2.0 * a)),
            align_zero((-b + rd) / (2.0 * a)),
        ))
    }
}

impl_surface!(Tube);

impl Intersectable for Tube {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let (t1, t2) = self.crossings(ray)?;
        hits_at(self, ray, [t1, t2], max_distance)
    }
}

impl Geometry for Tube {
    fn normal(&self, p: Point3) -> Result<Vec3> {
        let o = self.axis.point(self.axial_distance(p));
        p.subtract(o)?.normalize()
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
