#[macro_use]
mod macros;

pub mod camera;
pub mod error;
pub mod film;
pub mod geometries;
pub mod integrators;
pub mod lights;
pub mod materials;
pub mod math;
pub mod scene;

pub use error::{Error, Result};
