#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use hikari::{
        math::{Point3, Vec3},
        Error,
    };

    #[test]
    fn new() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
        assert_eq!(Point3::ZERO, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn add_vector() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(-1.0, -2.0, -3.0).unwrap();
        assert_eq!(p + v, Point3::ZERO);
        assert_eq!(p - v, Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn subtract() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            Point3::new(2.0, 3.0, 4.0).subtract(p).unwrap(),
            Vec3::new(1.0, 1.0, 1.0).unwrap()
        );
        assert!(matches!(p.subtract(p), Err(Error::ZeroVector)));
    }

    #[test]
    fn round_trip() {
        let p = Point3::new(0.3, -7.1, 2.5);
        for v in [
            Vec3::new(1.0, 2.0, 3.0).unwrap(),
            Vec3::new(-0.1, 1e3, 0.7).unwrap(),
        ] {
            assert_relative_eq!((p + v).subtract(p).unwrap(), v, epsilon = 1e-9);
        }
    }

    #[test]
    fn distance() {
        let p = Point3::new(0.0, 3.0, 4.0);
        assert_eq!(Point3::ZERO.distance_squared(p), 25.0);
        assert_eq!(p.distance(Point3::ZERO), 5.0);
        assert_eq!(p.distance(p), 0.0);
    }
}
