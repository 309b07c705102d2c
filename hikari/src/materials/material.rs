use serde::{Deserialize, Serialize};

use crate::math::Triple;

/// Phong style surface response with per-channel coefficients.
///
/// The default material absorbs everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse
    pub kd: Triple,
    /// Specular
    pub ks: Triple,
    /// Transparency
    pub kt: Triple,
    /// Reflectivity
    pub kr: Triple,
    pub shininess: i32,
}

impl Material {
    pub fn with_kd(mut self, kd: impl Into<Triple>) -> Self {
        self.kd = kd.into();
        self
    }

    pub fn with_ks(mut self, ks: impl Into<Triple>) -> Self {
        self.ks = ks.into();
        self
    }

    pub fn with_kt(mut self, kt: impl Into<Triple>) -> Self {
        self.kt = kt.into();
        self
    }

    pub fn with_kr(mut self, kr: impl Into<Triple>) -> Self {
        self.kr = kr.into();
        self
    }

    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}
