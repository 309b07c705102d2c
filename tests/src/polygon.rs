#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::{
        geometries::{Geometry, Intersectable, Polygon, Triangle},
        math::{Point3, Ray, Vec3},
        Error,
    };

    fn down(x: f64, y: f64) -> Ray {
        Ray::new(Point3::new(x, y, 1.0), -Vec3::Z).unwrap()
    }

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    fn xy_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn new() {
        // Convex quad on a tilted plane
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 1.0),
        ])
        .is_ok());
        assert_eq!(unit_square().vertices().len(), 4);
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            Polygon::new(vec![Point3::ZERO, Point3::new(1.0, 0.0, 0.0)]),
            Err(Error::TooFewVertices(2))
        ));
        // Last vertex off the plane
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 2.0, 2.0),
        ])
        .is_err());
        // Concave
        assert!(Polygon::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.5, 0.25, 0.5),
        ])
        .is_err());
        // Collinear
        assert!(matches!(
            Triangle::new(
                Point3::ZERO,
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(2.0, 2.0, 0.0)
            ),
            Err(Error::CollinearPoints)
        ));
    }

    #[test]
    fn coplanarity_is_checked() {
        // Convex in projection onto the xy-plane but the last vertex is lifted
        let result = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.5),
        ]);
        assert!(matches!(result, Err(Error::NonCoplanarPolygon)));
    }

    #[test]
    fn normal() {
        let n = unit_square().normal(Point3::new(0.5, 0.5, 0.0)).unwrap();
        assert_eq!(n, Vec3::Z);
        let n = xy_triangle().normal(Point3::new(0.5, 0.5, 0.0)).unwrap();
        assert_eq!(n, Vec3::Z);

        let tilted = Polygon::new(vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 1.0),
        ])
        .unwrap();
        let n = tilted.normal(Point3::new(0.0, 0.0, 1.0)).unwrap();
        let expected = Vec3::new(1.0, 1.0, 1.0).unwrap().normalize().unwrap();
        assert_abs_diff_eq!(n.dot(expected).abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_intersect() {
        let square = unit_square();
        assert_eq!(
            square.find_intersections(&down(0.5, 0.5)),
            Some(vec![Point3::new(0.5, 0.5, 0.0)])
        );
        assert_eq!(square.find_intersections(&down(1.5, 0.5)), None);
        assert_eq!(square.find_intersections(&down(-0.5, -0.5)), None);
    }

    #[test]
    fn triangle_intersect() {
        let t = xy_triangle();
        assert_eq!(
            t.find_intersections(&down(0.5, 0.5)),
            Some(vec![Point3::new(0.5, 0.5, 0.0)])
        );
        // Outside against an edge and a vertex
        assert_eq!(t.find_intersections(&down(2.0, 2.0)), None);
        assert_eq!(t.find_intersections(&down(3.0, -1.0)), None);
        // Edge continuation
        assert_eq!(t.find_intersections(&down(3.0, 0.0)), None);
        // On an edge and on a vertex
        assert_eq!(t.find_intersections(&down(1.0, 0.0)), None);
        assert_eq!(t.find_intersections(&down(1.0, 1.0)), None);
        assert_eq!(t.find_intersections(&down(0.0, 0.0)), None);
    }

    #[test]
    fn hit_refers_to_triangle() {
        let t = xy_triangle();
        let hits = t.intersect(&down(0.5, 0.5), f64::INFINITY).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].geometry.normal(hits[0].point).unwrap(), Vec3::Z);
        assert!(t.intersect(&down(0.5, 0.5), 0.5).is_none());
    }
}
