//! Point light data
//!
//! Pure data, no logic: updates are applied by
//! [`LightSynchronizer`](crate::light::LightSynchronizer).

/// Omnidirectional light source attached to a scene node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light intensity in lumen-like platform units
    pub intensity: f32,

    /// Color temperature in Kelvin
    pub temperature: f32,
}

impl PointLight {
    /// Create a light with explicit intensity and color temperature
    pub fn new(intensity: f32, temperature: f32) -> Self {
        Self {
            intensity,
            temperature,
        }
    }

    /// Create a light that emits nothing until a synchronizer drives it
    pub fn dark() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::dark()
    }
}
