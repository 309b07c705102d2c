mod ambient_light;
mod directional_light;
mod point_light;
mod spot_light;

pub use ambient_light::AmbientLight;
pub use directional_light::DirectionalLight;
pub use point_light::PointLight;
pub use spot_light::SpotLight;

use crate::{
    error::Result,
    math::{Color, Point3, Vec3},
};

pub trait Light: Send + Sync + std::fmt::Debug {
    /// Returns the intensity arriving at `p`.
    fn intensity_at(&self, p: Point3) -> Color;
    /// Returns the unit direction from this `Light` toward `p`.
    fn direction_toward(&self, p: Point3) -> Result<Vec3>;
    /// Returns the distance from this `Light` to `p`, infinite for lights without a position.
    fn distance_to(&self, p: Point3) -> f64;
}
