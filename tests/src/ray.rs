#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use hikari::math::{Point3, Ray, Vec3, DELTA};

    #[test]
    fn new() {
        let head = Point3::new(1.0, 2.0, 3.0);
        let r = Ray::new(head, Vec3::new(0.0, 0.0, 4.0).unwrap()).unwrap();
        assert_eq!(r.head(), head);
        assert_eq!(r.direction(), Vec3::Z);

        let r = Ray::new(head, Vec3::new(1.0, -2.0, 5.0).unwrap()).unwrap();
        assert_relative_eq!(r.direction().length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn point() {
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::Z).unwrap();
        assert_eq!(r.point(2.0), Point3::new(1.0, 0.0, 2.0));
        assert_eq!(r.point(-1.0), Point3::new(1.0, 0.0, -1.0));
        assert_eq!(r.point(0.0), r.head());
    }

    #[test]
    fn offset() {
        let head = Point3::ZERO;
        // Moved to the side the direction points to
        let r = Ray::offset(head, Vec3::new(1.0, 0.0, 1.0).unwrap(), Vec3::Z).unwrap();
        assert_eq!(r.head(), Point3::new(0.0, 0.0, DELTA));
        let r = Ray::offset(head, Vec3::new(1.0, 0.0, -1.0).unwrap(), Vec3::Z).unwrap();
        assert_eq!(r.head(), Point3::new(0.0, 0.0, -DELTA));
        // Directions along the surface count as the normal side
        let r = Ray::offset(head, Vec3::X, Vec3::Z).unwrap();
        assert_eq!(r.head(), Point3::new(0.0, 0.0, DELTA));
        assert_eq!(r.direction(), Vec3::X);
    }

    #[test]
    fn find_closest_point() {
        let r = Ray::new(Point3::ZERO, Vec3::X).unwrap();
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(3.0, 0.0, 0.0);
        let c = Point3::new(5.0, 0.0, 0.0);

        assert_eq!(r.find_closest_point(&[]), None);
        // First, middle and last of the list
        assert_eq!(r.find_closest_point(&[a, b, c]), Some(a));
        assert_eq!(r.find_closest_point(&[b, a, c]), Some(a));
        assert_eq!(r.find_closest_point(&[c, b, a]), Some(a));
    }
}
