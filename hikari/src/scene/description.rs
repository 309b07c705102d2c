use serde::{Deserialize, Serialize};

use std::{path::Path, time::Instant};

use super::Scene;
use crate::{
    camera::{Camera, CameraBuilder, RenderSettings},
    error::Result,
    film::FilmSettings,
    geometries::{
        Cylinder, Geometries, Intersectable, Plane, Polygon, Sphere, Surface, Triangle, Tube,
    },
    hikari_info, hikari_warn,
    integrators::TracerParams,
    lights::{AmbientLight, DirectionalLight, Light, PointLight, SpotLight},
    math::{Color, Point3, Ray, Triple, Vec3},
};

/// A scene with the camera and settings it is rendered with.
pub struct LoadedScene {
    pub scene: Scene,
    pub camera: CameraBuilder,
    pub film: FilmSettings,
    pub tracer: TracerParams,
    pub render: RenderSettings,
}

/// Serialized form of a [`LoadedScene`].
///
/// Points and directions are written as `[x, y, z]`, colors as `[r, g, b]`.
/// Any missing section is set to its default.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneDescription {
    pub name: String,
    pub background: Color,
    pub ambient: AmbientDescription,
    // Variants are written as single key maps, e.g. `- sphere: { .. }`
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub geometries: Vec<GeometryDescription>,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub lights: Vec<LightDescription>,
    pub camera: CameraDescription,
    pub film: FilmSettings,
    pub tracer: TracerParams,
    pub render: RenderSettings,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AmbientDescription {
    pub intensity: Color,
    pub ka: Triple,
}

impl Default for AmbientDescription {
    fn default() -> Self {
        Self {
            intensity: Color::BLACK,
            ka: Triple::ONE,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct AxisDescription {
    pub head: Triple,
    pub direction: Triple,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryDescription {
    Plane {
        point: Triple,
        normal: Triple,
        #[serde(default)]
        surface: Surface,
    },
    PlaneFromPoints {
        points: [Triple; 3],
        #[serde(default)]
        surface: Surface,
    },
    Sphere {
        center: Triple,
        radius: f64,
        #[serde(default)]
        surface: Surface,
    },
    Tube {
        axis: AxisDescription,
        radius: f64,
        #[serde(default)]
        surface: Surface,
    },
    Cylinder {
        axis: AxisDescription,
        radius: f64,
        height: f64,
        #[serde(default)]
        surface: Surface,
    },
    Polygon {
        vertices: Vec<Triple>,
        #[serde(default)]
        surface: Surface,
    },
    Triangle {
        vertices: [Triple; 3],
        #[serde(default)]
        surface: Surface,
    },
    Group {
        geometries: Vec<GeometryDescription>,
    },
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Attenuation {
    pub kc: f64,
    pub kl: f64,
    pub kq: f64,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }
}

fn default_narrow_beam() -> f64 {
    1.0
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightDescription {
    Directional {
        intensity: Color,
        direction: Triple,
    },
    Point {
        intensity: Color,
        position: Triple,
        #[serde(default)]
        attenuation: Attenuation,
    },
    Spot {
        intensity: Color,
        position: Triple,
        direction: Triple,
        #[serde(default)]
        attenuation: Attenuation,
        #[serde(default = "default_narrow_beam")]
        narrow_beam: f64,
    },
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraDescription {
    pub location: Triple,
    pub to: Triple,
    pub up: Triple,
    pub width: f64,
    pub height: f64,
    pub distance: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            location: Triple::ZERO,
            to: Triple::new(0.0, 0.0, -1.0),
            up: Triple::new(0.0, 1.0, 0.0),
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

impl SceneDescription {
    /// Loads a YAML scene description and builds it.
    pub fn load(path: &Path) -> Result<LoadedScene> {
        let load_start = Instant::now();

        let text = std::fs::read_to_string(path)?;
        let mut description: SceneDescription = serde_yaml::from_str(&text)?;
        if description.name.is_empty() {
            description.name = path
                .file_stem()
                .map_or_else(|| "scene".into(), |s| s.to_string_lossy().into_owned());
            hikari_warn!("Scene has no name, using '{}'", description.name);
        }
        let loaded = description.build()?;

        hikari_info!(
            "YAML: Loading took {:.2}s in total",
            load_start.elapsed().as_secs_f32()
        );

        Ok(loaded)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the described scene, validating every object.
    pub fn build(&self) -> Result<LoadedScene> {
        let mut geometries = Geometries::new();
        for geometry in &self.geometries {
            geometries.add_boxed(geometry.build()?);
        }

        let mut scene = Scene::new(&self.name)
            .with_background(self.background)
            .with_ambient_light(AmbientLight::new(self.ambient.intensity, self.ambient.ka))
            .with_geometries(geometries);
        for light in &self.lights {
            scene.add_light(light.build()?);
        }

        Ok(LoadedScene {
            scene,
            camera: self.camera.build()?,
            film: self.film,
            tracer: self.tracer,
            render: self.render,
        })
    }
}

fn point(xyz: Triple) -> Point3 {
    Point3::from(xyz)
}

fn vector(xyz: Triple) -> Result<Vec3> {
    Vec3::try_from(xyz)
}

impl AxisDescription {
    fn build(&self) -> Result<Ray> {
        Ray::new(point(self.head), vector(self.direction)?)
    }
}

impl GeometryDescription {
    pub fn build(&self) -> Result<Box<dyn Intersectable>> {
        let geometry: Box<dyn Intersectable> = match self {
            GeometryDescription::Plane {
                point: q,
                normal,
                surface,
            } => Box::new(Plane::new(point(*q), vector(*normal)?)?.with_surface(*surface)),
            GeometryDescription::PlaneFromPoints { points, surface } => Box::new(
                Plane::from_points(point(points[0]), point(points[1]), point(points[2]))?
                    .with_surface(*surface),
            ),
            GeometryDescription::Sphere {
                center,
                radius,
                surface,
            } => Box::new(Sphere::new(point(*center), *radius)?.with_surface(*surface)),
            GeometryDescription::Tube {
                axis,
                radius,
                surface,
            } => Box::new(Tube::new(axis.build()?, *radius)?.with_surface(*surface)),
            GeometryDescription::Cylinder {
                axis,
                radius,
                height,
                surface,
            } => Box::new(
                Cylinder::new(axis.build()?, *radius, *height)?.with_surface(*surface),
            ),
            GeometryDescription::Polygon { vertices, surface } => Box::new(
                Polygon::new(vertices.iter().copied().map(point).collect())?
                    .with_surface(*surface),
            ),
            GeometryDescription::Triangle { vertices, surface } => Box::new(
                Triangle::new(point(vertices[0]), point(vertices[1]), point(vertices[2]))?
                    .with_surface(*surface),
            ),
            GeometryDescription::Group { geometries } => {
                let mut group = Geometries::new();
                for geometry in geometries {
                    group.add_boxed(geometry.build()?);
                }
                Box::new(group)
            }
        };
        Ok(geometry)
    }
}

impl LightDescription {
    pub fn build(&self) -> Result<Box<dyn Light>> {
        let light: Box<dyn Light> = match *self {
            LightDescription::Directional {
                intensity,
                direction,
            } => Box::new(DirectionalLight::new(intensity, vector(direction)?)?),
            LightDescription::Point {
                intensity,
                position,
                attenuation,
            } => Box::new(
                PointLight::new(intensity, point(position))
                    .with_kc(attenuation.kc)
                    .with_kl(attenuation.kl)
                    .with_kq(attenuation.kq),
            ),
            LightDescription::Spot {
                intensity,
                position,
                direction,
                attenuation,
                narrow_beam,
            } => Box::new(
                SpotLight::new(intensity, point(position), vector(direction)?)?
                    .with_kc(attenuation.kc)
                    .with_kl(attenuation.kl)
                    .with_kq(attenuation.kq)
                    .with_narrow_beam(narrow_beam),
            ),
        };
        Ok(light)
    }
}

impl CameraDescription {
    /// Returns a builder for the described camera.
    pub fn build(&self) -> Result<CameraBuilder> {
        Ok(Camera::builder()
            .location(point(self.location))
            .direction(vector(self.to)?, vector(self.up)?)
            .view_plane_size(self.width, self.height)
            .view_plane_distance(self.distance))
    }
}
