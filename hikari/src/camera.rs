use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use std::{path::PathBuf, time::Instant};

use crate::{
    error::{Error, Result},
    film::ImageWriter,
    hikari_debug, hikari_info,
    integrators::RayTracer,
    math::{align_zero, is_zero, Color, Point3, Ray, Vec3},
};

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub use_single_render_thread: bool,
}

/// A pinhole camera shooting one ray through the center of each pixel of its view plane.
pub struct Camera {
    location: Point3,
    to: Vec3,
    up: Vec3,
    right: Vec3,
    width: f64,
    height: f64,
    distance: f64,
    image_writer: Option<ImageWriter>,
    ray_tracer: Option<Box<dyn RayTracer>>,
    render_settings: RenderSettings,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    pub fn location(&self) -> Point3 {
        self.location
    }

    pub fn to(&self) -> Vec3 {
        self.to
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn view_plane_width(&self) -> f64 {
        self.width
    }

    pub fn view_plane_height(&self) -> f64 {
        self.height
    }

    pub fn view_plane_distance(&self) -> f64 {
        self.distance
    }

    pub fn image_writer(&self) -> Option<&ImageWriter> {
        self.image_writer.as_ref()
    }

    /// Creates the [Ray] through the center of pixel (`j`, `i`) of a `nx` by `ny` grid.
    ///
    /// `j` is the column and `i` the row, rows going down the image.
    pub fn construct_ray(&self, nx: u32, ny: u32, j: u32, i: u32) -> Result<Ray> {
        if nx == 0 || ny == 0 {
            return Err(Error::InvalidResolution {
                width: nx,
                height: ny,
            });
        }

        let pc = self.location + self.to.scale(self.distance)?;
        let rx = self.width / nx as f64;
        let ry = self.height / ny as f64;
        let xj = (j as f64 - (nx as f64 - 1.0) / 2.0) * rx;
        let yi = (i as f64 - (ny as f64 - 1.0) / 2.0) * ry;

        // Skip zero offsets as they can't be represented as vectors
        let mut pij = pc;
        if !is_zero(xj) {
            pij = pij + self.right.scale(xj)?;
        }
        if !is_zero(yi) {
            pij = pij + self.up.scale(-yi)?;
        }

        Ray::new(self.location, pij.subtract(self.location)?)
    }

    /// Traces the ray through pixel (`j`, `i`) and writes the result to the image.
    pub fn cast_ray(&mut self, j: u32, i: u32) -> Result<()> {
        let ray_tracer = self
            .ray_tracer
            .as_ref()
            .ok_or(Error::MissingResource("ray tracer"))?;
        let image_writer = self
            .image_writer
            .as_ref()
            .ok_or(Error::MissingResource("image writer"))?;

        let ray = self.construct_ray(image_writer.width(), image_writer.height(), j, i)?;
        let color = ray_tracer.trace_ray(&ray)?;
        self.image_writer
            .as_mut()
            .ok_or(Error::MissingResource("image writer"))?
            .write_pixel(j, i, color)
    }

    /// Renders every pixel of the image.
    ///
    /// Any failing pixel fails the whole render and leaves the image untouched.
    pub fn render_image(&mut self) -> Result<()> {
        let image_writer = self
            .image_writer
            .as_ref()
            .ok_or(Error::MissingResource("image writer"))?;
        let ray_tracer = self
            .ray_tracer
            .as_ref()
            .ok_or(Error::MissingResource("ray tracer"))?;

        let nx = image_writer.width();
        let ny = image_writer.height();
        hikari_info!(
            "Rendering {}x{}{}",
            nx,
            ny,
            if self.render_settings.use_single_render_thread {
                " on a single thread"
            } else {
                ""
            }
        );
        let render_start = Instant::now();

        // Fits as the image writer holds a buffer this size
        let pixel_count = nx as usize * ny as usize;
        let pixel_at = |index: usize| {
            let nx = nx as usize;
            ((index % nx) as u32, (index / nx) as u32)
        };

        let trace_pixel = |index: usize| -> Result<Color> {
            let (j, i) = pixel_at(index);
            let ray = self.construct_ray(nx, ny, j, i)?;
            ray_tracer.trace_ray(&ray)
        };
        let colors = if self.render_settings.use_single_render_thread {
            (0..pixel_count)
                .map(trace_pixel)
                .collect::<Result<Vec<Color>>>()?
        } else {
            (0..pixel_count)
                .into_par_iter()
                .map(trace_pixel)
                .collect::<Result<Vec<Color>>>()?
        };

        let image_writer = self
            .image_writer
            .as_mut()
            .ok_or(Error::MissingResource("image writer"))?;
        for (index, color) in colors.into_iter().enumerate() {
            let (j, i) = pixel_at(index);
            image_writer.write_pixel(j, i, color)?;
        }

        hikari_info!(
            "Render took {:.2}s",
            render_start.elapsed().as_secs_f32()
        );

        Ok(())
    }

    /// Draws grid lines every `interval` pixels.
    pub fn print_grid(&mut self, interval: u32, color: Color) -> Result<()> {
        self.image_writer
            .as_mut()
            .ok_or(Error::MissingResource("image writer"))?
            .print_grid(interval, color)
    }

    /// Writes the image to disk and returns its path.
    pub fn write_to_image(&self) -> Result<PathBuf> {
        self.image_writer
            .as_ref()
            .ok_or(Error::MissingResource("image writer"))?
            .write_to_image()
    }
}

/// Collects and validates the parameters of a [Camera].
#[derive(Default)]
pub struct CameraBuilder {
    location: Option<Point3>,
    direction: Option<(Vec3, Vec3)>,
    width: f64,
    height: f64,
    distance: f64,
    image_writer: Option<ImageWriter>,
    ray_tracer: Option<Box<dyn RayTracer>>,
    render_settings: RenderSettings,
}

impl CameraBuilder {
    pub fn location(mut self, location: Point3) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the forward and up directions, which have to be orthogonal.
    pub fn direction(mut self, to: Vec3, up: Vec3) -> Self {
        self.direction = Some((to, up));
        self
    }

    pub fn view_plane_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn view_plane_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn image_writer(mut self, image_writer: ImageWriter) -> Self {
        self.image_writer = Some(image_writer);
        self
    }

    pub fn ray_tracer(mut self, ray_tracer: impl RayTracer + 'static) -> Self {
        self.ray_tracer = Some(Box::new(ray_tracer));
        self
    }

    pub fn render_settings(mut self, render_settings: RenderSettings) -> Self {
        self.render_settings = render_settings;
        self
    }

    /// Validates the parameters and builds the [Camera].
    ///
    /// The image writer and ray tracer are only required when rendering.
    pub fn build(self) -> Result<Camera> {
        let location = self.location.ok_or(Error::MissingResource("camera location"))?;
        let (to, up) = self
            .direction
            .ok_or(Error::MissingResource("camera direction"))?;

        for (what, value) in [
            ("width", self.width),
            ("height", self.height),
            ("distance", self.distance),
        ] {
            if align_zero(value) <= 0.0 {
                return Err(Error::NonPositiveViewPlane { what, value });
            }
        }

        if !to.is_orthogonal(up) {
            return Err(Error::NonOrthogonalDirections);
        }
        let to = to.normalize()?;
        let up = up.normalize()?;
        let right = to.cross(up)?.normalize()?;

        hikari_debug!(
            "Camera at {:?} looking along {:?}, view plane {}x{} at {}",
            location,
            to,
            self.width,
            self.height,
            self.distance
        );

        Ok(Camera {
            location,
            to,
            up,
            right,
            width: self.width,
            height: self.height,
            distance: self.distance,
            image_writer: self.image_writer,
            ray_tracer: self.ray_tracer,
            render_settings: self.render_settings,
        })
    }
}
