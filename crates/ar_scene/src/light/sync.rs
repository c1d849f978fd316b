//! Light synchronization system
//!
//! Drives every tracked light from one control signal. Two mutually
//! exclusive sources exist, selected by [`ControlMode`]:
//!
//! - `Manual`: slider values, written on each slider change
//! - `Estimated`: the session's ambient estimate, written once per frame
//!
//! Switching modes immediately re-synchronizes the lights with the new
//! source of truth, so leaving `Estimated` restores the last manual values
//! instead of freezing whatever the estimate last wrote.

use crate::light::LightEstimate;
use crate::scene::{NodeKey, SceneGraph};

/// Source of truth for tracked light attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Lights follow the manual slider values
    Manual,
    /// Lights follow the per-frame ambient light estimate
    Estimated,
}

/// System that mirrors one control signal onto all tracked lights
///
/// Holds non-owning [`NodeKey`]s; the scene graph owns the lights. All
/// tracked lights are updated identically and in the same call - per-light
/// divergence is not supported.
#[derive(Debug)]
pub struct LightSynchronizer {
    tracked: Vec<NodeKey>,
    mode: ControlMode,
    intensity: f32,
    temperature: f32,
}

impl LightSynchronizer {
    /// Create a synchronizer in manual mode with the given slider values
    pub fn new(intensity: f32, temperature: f32) -> Self {
        Self {
            tracked: Vec::new(),
            mode: ControlMode::Manual,
            intensity,
            temperature,
        }
    }

    /// Start driving the light at `key`
    ///
    /// Tracked lights are never released within a session.
    pub fn track(&mut self, key: NodeKey) {
        log::debug!("tracking light node {key:?}");
        self.tracked.push(key);
    }

    /// Keys of all tracked lights
    pub fn tracked(&self) -> &[NodeKey] {
        &self.tracked
    }

    /// Current control mode
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Last manual intensity value
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Last manual color temperature value
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Handle a manual intensity slider change
    ///
    /// The value is remembered regardless of mode; lights are only written
    /// in manual mode, since estimated mode owns them while active.
    pub fn set_intensity(&mut self, scene: &mut SceneGraph, value: f32) {
        self.intensity = value;
        if self.mode == ControlMode::Estimated {
            return;
        }
        log::debug!("manual intensity -> {value}");
        for &key in &self.tracked {
            if let Some(light) = scene.light_mut(key) {
                light.intensity = value;
            }
        }
    }

    /// Handle a manual color temperature slider change
    ///
    /// Symmetric to [`Self::set_intensity`]; intensity is left untouched.
    pub fn set_temperature(&mut self, scene: &mut SceneGraph, value: f32) {
        self.temperature = value;
        if self.mode == ControlMode::Estimated {
            return;
        }
        log::debug!("manual color temperature -> {value}");
        for &key in &self.tracked {
            if let Some(light) = scene.light_mut(key) {
                light.temperature = value;
            }
        }
    }

    /// Switch control mode and re-synchronize with the new source of truth
    ///
    /// Equivalent to replaying both manual slider handlers back-to-back: in
    /// manual mode that rewrites the remembered slider values, in estimated
    /// mode the writes are skipped and the next frame's estimate takes over.
    pub fn set_mode(&mut self, scene: &mut SceneGraph, mode: ControlMode) {
        log::info!("light control mode -> {mode:?}");
        self.mode = mode;
        let (intensity, temperature) = (self.intensity, self.temperature);
        self.set_intensity(scene, intensity);
        self.set_temperature(scene, temperature);
    }

    /// Per-frame tick: mirror the ambient estimate onto all tracked lights
    ///
    /// No-op unless the mode is `Estimated` and a sample is present this
    /// frame. An absent sample is normal, not an error.
    pub fn apply_estimate(&mut self, scene: &mut SceneGraph, estimate: Option<&LightEstimate>) {
        if self.mode != ControlMode::Estimated {
            return;
        }
        let Some(estimate) = estimate else {
            return;
        };

        log::trace!(
            "estimated lighting: intensity {}, temperature {}",
            estimate.ambient_intensity,
            estimate.ambient_color_temperature
        );
        for &key in &self.tracked {
            if let Some(light) = scene.light_mut(key) {
                light.intensity = estimate.ambient_intensity;
                light.temperature = estimate.ambient_color_temperature;
            }
        }
    }
}
