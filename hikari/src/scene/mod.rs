mod demo;
mod description;

pub use demo::demo;
pub use description::{
    AmbientDescription, CameraDescription, GeometryDescription, LightDescription, LoadedScene,
    SceneDescription,
};

use crate::{
    geometries::{Geometries, Intersectable},
    lights::{AmbientLight, Light},
    math::Color,
};

/// Everything a ray can interact with.
///
/// A `Scene` is assembled before rendering and only read while tracing.
#[derive(Debug)]
pub struct Scene {
    name: String,
    background: Color,
    ambient_light: AmbientLight,
    geometries: Geometries,
    lights: Vec<Box<dyn Light>>,
}

impl Scene {
    /// Creates a new empty `Scene` with a black background and no ambient light.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            background: Color::BLACK,
            ambient_light: AmbientLight::NONE,
            geometries: Geometries::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    pub fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    pub fn with_geometry(mut self, geometry: impl Intersectable + 'static) -> Self {
        self.geometries.add(geometry);
        self
    }

    pub fn with_light(mut self, light: impl Light + 'static) -> Self {
        self.lights.push(Box::new(light));
        self
    }

    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn ambient_light(&self) -> AmbientLight {
        self.ambient_light
    }

    pub fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }
}
