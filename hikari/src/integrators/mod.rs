mod whitted;

pub use whitted::Whitted;

use crate::{
    error::Result,
    math::{Color, Ray},
};

pub type TracerParams = whitted::Params;

pub trait RayTracer: Send + Sync {
    /// Returns the color seen along `ray`.
    fn trace_ray(&self, ray: &Ray) -> Result<Color>;
}
