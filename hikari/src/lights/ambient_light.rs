use crate::math::{Color, Triple};

/// Constant light added to every surface hit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::BLACK,
    };

    /// Creates a new `AmbientLight` of `ia` attenuated by `ka`.
    pub fn new(ia: Color, ka: impl Into<Triple>) -> Self {
        Self {
            intensity: ia * ka.into(),
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}
