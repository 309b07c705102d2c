#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use hikari::{
        geometries::{Geometry, Intersectable},
        math::{Color, Point3, Ray, Vec3},
        scene::SceneDescription,
        Error,
    };

    const SCENE: &str = r#"
name: test
background: [10, 20, 30]
ambient:
  intensity: [255, 255, 255]
  ka: [0.1, 0.1, 0.1]
geometries:
  - sphere:
      center: [0, 0, -50]
      radius: 10
      surface:
        emission: [0, 0, 100]
        material:
          kd: [0.5, 0.5, 0.5]
          shininess: 30
  - plane:
      point: [0, -10, 0]
      normal: [0, 1, 0]
  - group:
      geometries:
        - triangle:
            vertices: [[0, 0, 0], [1, 0, 0], [0, 1, 0]]
        - cylinder:
            axis: { head: [0, 0, 0], direction: [0, 1, 0] }
            radius: 1
            height: 2
lights:
  - spot:
      intensity: [100, 100, 100]
      position: [0, 50, 0]
      direction: [0, -1, 0]
      narrow_beam: 4
  - directional:
      intensity: [50, 50, 50]
      direction: [0, 0, -1]
camera:
  location: [0, 0, 100]
  width: 50
  height: 40
  distance: 100
film:
  width: 64
  height: 32
tracer:
  max_level: 3
"#;

    #[test]
    fn parse() {
        let loaded = SceneDescription::from_yaml(SCENE).unwrap().build().unwrap();

        let scene = &loaded.scene;
        assert_eq!(scene.name(), "test");
        assert_eq!(scene.background(), Color::new(10.0, 20.0, 30.0));
        assert_relative_eq!(
            scene.ambient_light().intensity(),
            Color::new(25.5, 25.5, 25.5)
        );
        assert_eq!(scene.geometries().len(), 3);
        assert_eq!(scene.lights().len(), 2);

        assert_eq!((loaded.film.width, loaded.film.height), (64, 32));
        assert_eq!(loaded.tracer.max_level, 3);
        assert_eq!(loaded.tracer.min_k, 0.001);
        assert!(!loaded.render.use_single_render_thread);

        let camera = loaded.camera.build().unwrap();
        assert_eq!(camera.location(), Point3::new(0.0, 0.0, 100.0));
        assert_eq!(camera.to(), Vec3::new(0.0, 0.0, -1.0).unwrap());
        assert_eq!(camera.view_plane_width(), 50.0);
        assert_eq!(camera.view_plane_height(), 40.0);
        assert_eq!(camera.view_plane_distance(), 100.0);

        // Only the sphere is in the way
        let ray = Ray::new(
            Point3::new(0.0, 5.0, 100.0),
            Vec3::new(0.0, 0.0, -1.0).unwrap(),
        )
        .unwrap();
        let hits = scene.geometries().find_geo_intersections(&ray).unwrap();
        assert_eq!(hits.len(), 2);
        let closest = ray.find_closest_geo_point(&hits).unwrap();
        assert_relative_eq!(closest.point.z(), -50.0 + 75.0f64.sqrt(), epsilon = 1e-9);
        assert_eq!(closest.geometry.emission(), Color::new(0.0, 0.0, 100.0));
        assert_eq!(closest.geometry.material().shininess, 30);
        assert_eq!(closest.geometry.material().kd.x, 0.5);
        assert_eq!(closest.geometry.material().kt.x, 0.0);
    }

    #[test]
    fn defaults() {
        let description = SceneDescription::from_yaml("{}").unwrap();
        assert!(description.geometries.is_empty());
        assert!(description.lights.is_empty());
        assert_eq!(description.tracer.max_level, 10);

        let loaded = description.build().unwrap();
        assert_eq!(loaded.scene.background(), Color::BLACK);
        assert_eq!(loaded.scene.ambient_light().intensity(), Color::BLACK);
        assert_eq!((loaded.film.width, loaded.film.height), (500, 500));
        assert!(loaded.camera.build().is_ok());
    }

    #[test]
    fn invalid() {
        let description = SceneDescription::from_yaml(
            r#"
geometries:
  - sphere:
      center: [0, 0, 0]
      radius: -1
"#,
        )
        .unwrap();
        assert!(matches!(
            description.build(),
            Err(Error::NonPositiveRadius(r)) if r == -1.0
        ));

        let description = SceneDescription::from_yaml(
            r#"
lights:
  - directional:
      intensity: [1, 1, 1]
      direction: [0, 0, 0]
"#,
        )
        .unwrap();
        assert!(matches!(description.build(), Err(Error::ZeroVector)));

        assert!(SceneDescription::from_yaml("geometries:\n  - torus: {}\n").is_err());
    }

    #[test]
    fn load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unnamed.yaml");
        let text = SceneDescription::from_yaml(SCENE)
            .unwrap()
            .to_yaml()
            .unwrap()
            .replace("name: test", "name: ''");
        std::fs::write(&path, text).unwrap();

        let loaded = SceneDescription::load(&path).unwrap();
        assert_eq!(loaded.scene.name(), "unnamed");
        assert_eq!(loaded.scene.geometries().len(), 3);
        assert_eq!(loaded.scene.lights().len(), 2);

        assert!(matches!(
            SceneDescription::load(&dir.path().join("missing.yaml")),
            Err(Error::Io(_))
        ));
    }
}
