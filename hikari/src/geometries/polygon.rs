use super::{impl_surface, GeoPoint, Geometry, Intersectable, Plane, Surface};
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// A convex planar polygon.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
    surface: Surface,
}

impl Polygon {
    /// Creates a new `Polygon` from vertices in edge order.
    ///
    /// Fails if there are less than three vertices, the first three are on a line,
    /// or the vertices don't form a convex polygon on a single plane.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if vertices.len() > 3 {
            let n = plane.normal(vertices[0])?;
            let last = vertices.len() - 1;

            // The winding has to stay on the same side of the normal on every vertex
            let mut edge1 = vertices[last].subtract(vertices[last - 1])?;
            let mut edge2 = vertices[0].subtract(vertices[last])?;
            let positive = turn(edge1, edge2, n)? > 0.0;
            for i in 1..vertices.len() {
                if !is_zero(vertices[i].subtract(vertices[0])?.dot(n)) {
                    return Err(Error::NonCoplanarPolygon);
                }

                edge1 = edge2;
                edge2 = vertices[i].subtract(vertices[i - 1])?;
                if positive != (turn(edge1, edge2, n)? > 0.0) {
                    return Err(Error::NonConvexPolygon);
                }
            }
        }

        Ok(Self {
            vertices,
            plane,
            surface: Surface::default(),
        })
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the hit point of `ray` if it is strictly inside the polygon.
    pub(super) fn hit_point(&self, ray: &Ray, max_distance: f64) -> Option<Point3> {
        let t = self.plane.hit_distance(ray, max_distance)?;

        // The hit is inside iff it is on the same side of every edge when
        // looking from the ray head. Hits on an edge are misses.
        let head = ray.head().xyz();
        let v = ray.direction().xyz();
        let side = |a: Point3, b: Point3| {
            let v1 = a.xyz() - head;
            let v2 = b.xyz() - head;
            align_zero(v.dot(v1.cross(v2)))
        };

        let n = self.vertices.len();
        let first = side(self.vertices[1], self.vertices[0]);
        if first == 0.0 {
            return None;
        }
        let positive = first > 0.0;
        for i in (1..n).rev() {
            let prev = if i + 1 == n { 0 } else { i + 1 };
            let s = side(self.vertices[prev], self.vertices[i]);
            if s == 0.0 || positive != (s > 0.0) {
                return None;
            }
        }

        Some(ray.point(t))
    }
}

// Signed turn from `edge1` to `edge2` around `n`
fn turn(edge1: Vec3, edge2: Vec3, n: Vec3) -> Result<f64> {
    // Parallel consecutive edges mean a degenerate vertex
    let cross = edge1.cross(edge2).map_err(|_| Error::NonConvexPolygon)?;
    Ok(cross.dot(n))
}

impl_surface!(Polygon);

impl Intersectable for Polygon {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let p = self.hit_point(ray, max_distance)?;
        Some(vec![GeoPoint {
            geometry: self,
            point: p,
        }])
    }
}

impl Geometry for Polygon {
    fn normal(&self, p: Point3) -> Result<Vec3> {
        self.plane.normal(p)
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
