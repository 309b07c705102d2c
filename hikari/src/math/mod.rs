pub mod common;
mod color;
mod point;
mod ray;
mod triple;
mod vector;

pub use color::Color;
pub use common::{align_zero, compare_sign, is_zero, EPSILON};
pub use point::Point3;
pub use ray::{Ray, DELTA};
pub use triple::Triple;
pub use vector::Vec3;
