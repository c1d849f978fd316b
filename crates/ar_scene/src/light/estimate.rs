//! Ambient light estimate sample

/// Per-frame ambient lighting sample from the tracking pipeline
///
/// Ephemeral: consumed the frame it arrives, never stored. A frame may carry
/// no estimate at all, which is a normal condition rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightEstimate {
    /// Estimated ambient intensity in lumen-like platform units
    pub ambient_intensity: f32,

    /// Estimated ambient color temperature in Kelvin
    pub ambient_color_temperature: f32,
}

impl LightEstimate {
    /// Create an estimate sample
    pub fn new(ambient_intensity: f32, ambient_color_temperature: f32) -> Self {
        Self {
            ambient_intensity,
            ambient_color_temperature,
        }
    }
}
