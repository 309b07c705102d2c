use super::{LoadedScene, Scene};
use crate::{
    camera::{Camera, RenderSettings},
    error::Result,
    film::FilmSettings,
    geometries::{Cylinder, Plane, Sphere, Triangle},
    integrators::TracerParams,
    lights::{AmbientLight, DirectionalLight, PointLight, SpotLight},
    materials::Material,
    math::{Color, Point3, Ray, Vec3},
};

/// Constructs a glass ball holding a smaller sphere, two mirrors and a cylinder on a floor.
pub fn demo() -> Result<LoadedScene> {
    let shiny = Material::default()
        .with_kd(0.5)
        .with_ks(0.5)
        .with_shininess(60);

    let scene = Scene::new("demo")
        .with_background(Color::new(10.0, 10.0, 25.0))
        .with_ambient_light(AmbientLight::new(Color::WHITE, 0.08))
        // Glass ball with a core
        .with_geometry(
            Sphere::new(Point3::new(-20.0, 0.0, -50.0), 50.0)?
                .with_emission(Color::new(0.0, 0.0, 100.0))
                .with_material(
                    Material::default()
                        .with_kd(0.4)
                        .with_ks(0.3)
                        .with_kt(0.3)
                        .with_shininess(100),
                ),
        )
        .with_geometry(
            Sphere::new(Point3::new(-20.0, 0.0, -50.0), 25.0)?
                .with_emission(Color::new(100.0, 50.0, 20.0))
                .with_material(shiny.with_shininess(100)),
        )
        // Mirrors
        .with_geometry(
            Triangle::new(
                Point3::new(-150.0, -150.0, -115.0),
                Point3::new(150.0, -150.0, -135.0),
                Point3::new(75.0, 75.0, -150.0),
            )?
            .with_emission(Color::new(20.0, 20.0, 20.0))
            .with_material(Material::default().with_kr(0.8)),
        )
        .with_geometry(
            Triangle::new(
                Point3::new(-150.0, -150.0, -115.0),
                Point3::new(-70.0, 70.0, -140.0),
                Point3::new(75.0, 75.0, -150.0),
            )?
            .with_emission(Color::new(20.0, 20.0, 20.0))
            .with_material(Material::default().with_kr(0.5)),
        )
        .with_geometry(
            Cylinder::new(
                Ray::new(Point3::new(65.0, -50.0, -30.0), Vec3::Y)?,
                15.0,
                60.0,
            )?
            .with_emission(Color::new(60.0, 20.0, 60.0))
            .with_material(shiny.with_shininess(30)),
        )
        .with_geometry(
            Plane::new(Point3::new(0.0, -50.0, 0.0), Vec3::Y)?
                .with_emission(Color::new(15.0, 30.0, 15.0))
                .with_material(shiny.with_ks(0.2).with_kr(0.2)),
        )
        .with_light(
            SpotLight::new(
                Color::new(700.0, 400.0, 400.0),
                Point3::new(60.0, 50.0, 0.0),
                Vec3::new(0.0, -1.0, -2.0)?,
            )?
            .with_kl(4e-5)
            .with_kq(2e-7),
        )
        .with_light(
            PointLight::new(Color::new(250.0, 250.0, 300.0), Point3::new(-100.0, 100.0, 100.0))
                .with_kl(5e-4)
                .with_kq(5e-6),
        )
        .with_light(DirectionalLight::new(
            Color::new(60.0, 60.0, 60.0),
            Vec3::new(1.0, -1.0, -1.0)?,
        )?);

    let camera = Camera::builder()
        .location(Point3::new(0.0, 0.0, 1000.0))
        .direction(-Vec3::Z, Vec3::Y)
        .view_plane_size(200.0, 200.0)
        .view_plane_distance(1000.0);

    Ok(LoadedScene {
        scene,
        camera,
        film: FilmSettings::default(),
        tracer: TracerParams::default(),
        render: RenderSettings::default(),
    })
}
