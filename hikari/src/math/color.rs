use hikari_derive::*;
use serde::{Deserialize, Serialize};

use super::Triple;

/// A linear RGB color.
///
/// Channels are on the 8-bit display scale, i.e. `255.0` is full intensity,
/// but are not bounded while shading. They are clamped only when written out.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Add,
    AddAssign,
    MulScalar,
    DivScalar,
    AbsDiffEq,
    RelativeEq,
    Deserialize,
    Serialize,
)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Returns the color clamped to `[0, 255]` per channel.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let clamp = |v: f64| v.clamp(0.0, 255.0) as u8;
        [clamp(self.r), clamp(self.g), clamp(self.b)]
    }
}

impl std::ops::Mul<Triple> for Color {
    type Output = Color;

    fn mul(self, k: Triple) -> Color {
        Color::new(self.r * k.x, self.g * k.y, self.b * k.z)
    }
}

impl From<[f64; 3]> for Color {
    fn from(v: [f64; 3]) -> Self {
        Color::new(v[0], v[1], v[2])
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}
