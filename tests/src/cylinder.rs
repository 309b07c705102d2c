#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::{
        geometries::{Cylinder, Geometry, Intersectable},
        math::{Point3, Ray, Vec3},
        Error,
    };

    fn ray(head: (f64, f64, f64), direction: (f64, f64, f64)) -> Ray {
        Ray::new(
            Point3::new(head.0, head.1, head.2),
            Vec3::new(direction.0, direction.1, direction.2).unwrap(),
        )
        .unwrap()
    }

    // Radius 1 around the z-axis from z=0 to z=2
    fn z_cylinder() -> Cylinder {
        Cylinder::new(Ray::new(Point3::ZERO, Vec3::Z).unwrap(), 1.0, 2.0).unwrap()
    }

    #[test]
    fn new() {
        let axis = Ray::new(Point3::ZERO, Vec3::Z).unwrap();
        assert!(matches!(
            Cylinder::new(axis, 1.0, 0.0),
            Err(Error::NonPositiveHeight(_))
        ));
        assert!(matches!(
            Cylinder::new(axis, -1.0, 1.0),
            Err(Error::NonPositiveRadius(_))
        ));
        let c = z_cylinder();
        assert_eq!(c.radius(), 1.0);
        assert_eq!(c.height(), 2.0);
    }

    #[test]
    fn normal() {
        let c = z_cylinder();
        // Caps face outward
        assert_eq!(c.normal(Point3::new(0.5, 0.0, 0.0)).unwrap(), -Vec3::Z);
        assert_eq!(c.normal(Point3::ZERO).unwrap(), -Vec3::Z);
        assert_eq!(c.normal(Point3::new(0.0, 0.5, 2.0)).unwrap(), Vec3::Z);
        assert_eq!(c.normal(Point3::new(0.0, 0.0, 2.0)).unwrap(), Vec3::Z);
        assert_eq!(c.normal(Point3::new(1.0, 0.0, 1.0)).unwrap(), Vec3::X);
    }

    #[test]
    fn through_side() {
        let c = z_cylinder();
        let hits = c
            .find_intersections(&ray((-2.0, 0.0, 1.0), (1.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0], Point3::new(-1.0, 0.0, 1.0), epsilon = 1e-9);
        assert_abs_diff_eq!(hits[1], Point3::new(1.0, 0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn through_caps() {
        let c = z_cylinder();
        let hits = c
            .find_intersections(&ray((0.5, 0.0, -1.0), (0.0, 0.0, 1.0)))
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0], Point3::new(0.5, 0.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(hits[1], Point3::new(0.5, 0.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn cap_then_side() {
        let c = z_cylinder();
        let hits = c
            .find_intersections(&ray((0.0, 0.0, -1.0), (1.0, 0.0, 2.0)))
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0], Point3::new(0.5, 0.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(hits[1], Point3::new(1.0, 0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn inside() {
        let c = z_cylinder();
        let hits = c
            .find_intersections(&ray((0.0, 0.0, 1.0), (1.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0], Point3::new(1.0, 0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn misses() {
        let c = z_cylinder();
        // Above, below and beside the finite part
        assert_eq!(c.find_intersections(&ray((-2.0, 0.0, 3.0), (1.0, 0.0, 0.0))), None);
        assert_eq!(c.find_intersections(&ray((-2.0, 0.0, -1.0), (1.0, 0.0, 0.0))), None);
        assert_eq!(c.find_intersections(&ray((2.0, 0.0, -1.0), (0.0, 0.0, 1.0))), None);
        // Going away
        assert_eq!(c.find_intersections(&ray((0.5, 0.0, 3.0), (0.0, 0.0, 1.0))), None);
    }

    #[test]
    fn max_distance() {
        let c = z_cylinder();
        let r = ray((0.5, 0.0, -1.0), (0.0, 0.0, 1.0));
        let hits = c.intersect(&r, 2.0).unwrap();
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].point, Point3::new(0.5, 0.0, 0.0), epsilon = 1e-9);
    }
}
