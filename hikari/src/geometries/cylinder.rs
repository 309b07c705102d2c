use itertools::Itertools;

use super::{hits_at, impl_surface, GeoPoint, Geometry, Intersectable, Surface, Tube};
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// A finite cylinder capped with two discs.
///
/// The base cap is at the head of the axis and the top cap `height` along it.
#[derive(Clone, Debug)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    surface: Surface,
}

impl Cylinder {
    /// Creates a new `Cylinder`. Fails if `radius` or `height` is not positive.
    pub fn new(axis: Ray, radius: f64, height: f64) -> Result<Self> {
        let tube = Tube::new(axis, radius)?;
        if align_zero(height) <= 0.0 {
            return Err(Error::NonPositiveHeight(height));
        }
        Ok(Self {
            tube,
            height,
            surface: Surface::default(),
        })
    }

    pub fn axis(&self) -> Ray {
        self.tube.axis()
    }

    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    fn is_within_height(&self, p: Point3) -> bool {
        let s = self.tube.axial_distance(p);
        s > 0.0 && align_zero(s - self.height) < 0.0
    }

    // Distance along `ray` to the cap disc centered at `center`
    fn cap_distance(&self, ray: &Ray, center: Point3) -> Option<f64> {
        let va = self.axis().direction();
        let nv = va.dot(ray.direction());
        if is_zero(nv) {
            return None;
        }

        let t = align_zero(va.xyz().dot(center.xyz() - ray.head().xyz()) / nv);
        if t <= 0.0 {
            return None;
        }

        let r = self.radius();
        if align_zero(ray.point(t).distance_squared(center) - r * r) < 0.0 {
            Some(t)
        } else {
            None
        }
    }
}

impl_surface!(Cylinder);

impl Intersectable for Cylinder {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let axis = self.axis();
        let base = axis.head();
        let top = axis.point(self.height);

        let body = self
            .tube
            .crossings(ray)
            .map(|(t1, t2)| vec![t1, t2])
            .unwrap_or_default()
            .into_iter()
            .filter(|&t| t > 0.0 && self.is_within_height(ray.point(t)));
        let caps = [base, top]
            .into_iter()
            .filter_map(|center| self.cap_distance(ray, center));

        let ts = body.chain(caps).sorted_by(|a, b| a.total_cmp(b));
        hits_at(self, ray, ts, max_distance)
    }
}

impl Geometry for Cylinder {
    fn normal(&self, p: Point3) -> Result<Vec3> {
        let va = self.axis().direction();
        let s = self.tube.axial_distance(p);
        if s == 0.0 {
            Ok(-va)
        } else if align_zero(s - self.height) == 0.0 {
            Ok(va)
        } else {
            self.tube.normal(p)
        }
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
