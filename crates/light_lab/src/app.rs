//! Demo application controller
//!
//! Owns the scene, the light synchronizer, and the HUD state, and wires the
//! tracking session's delegate callbacks to them. The counterpart of a
//! platform view controller, minus the actual widgets: label and visibility
//! changes are logged instead of drawn.

use crate::config::{ConfigError, DemoConfig};
use ar_scene::foundation::math::Vec3;
use ar_scene::light::{ControlMode, LightEstimate, LightSynchronizer};
use ar_scene::scene::{Node, NodeKey, SceneError, SceneGraph};
use ar_scene::tracking::{Anchor, SessionDelegate};
use ar_scene::ui::{HudState, Slider};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Scene graph operation failed
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// The light-lab demo application
pub struct LightLabApp {
    scene: SceneGraph,
    root: NodeKey,
    sync: LightSynchronizer,
    hud: HudState,
    marker_radius: f32,
    marker_margin: f32,
    light_offset: Vec3,
}

impl LightLabApp {
    /// Build the app from demo configuration
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = SceneGraph::new();
        let root = scene.add_node(Node::new(Vec3::zeros()));

        let sliders = &config.sliders;
        let hud = HudState::new(
            Slider::new(sliders.intensity_initial, 0.0, sliders.intensity_max),
            Slider::new(sliders.temperature_initial, 0.0, sliders.temperature_max),
        );
        let sync = LightSynchronizer::new(sliders.intensity_initial, sliders.temperature_initial);

        let [x, y, z] = config.light.offset;
        Self {
            scene,
            root,
            sync,
            hud,
            marker_radius: config.marker.radius,
            marker_margin: config.marker.margin,
            light_offset: Vec3::new(x, y, z),
        }
    }

    /// Place a sphere marker with its light at a detected plane's center
    ///
    /// The marker sits above the plane surface by its own radius plus a
    /// margin; the light hangs laterally off the marker, initially dark.
    fn spawn_marker(&mut self, center: Vec3) -> Result<NodeKey, AppError> {
        let mut position = center;
        position.y += self.marker_radius + self.marker_margin;

        let marker = self
            .scene
            .add_node(Node::sphere(position, self.marker_radius));
        let light = self.scene.add_node(Node::point_light(self.light_offset));

        self.scene.attach(marker, light)?;
        self.scene.attach(self.root, marker)?;
        self.sync.track(light);

        log::debug!("placed marker at {position:?} with light at {:?}", self.light_offset);
        Ok(marker)
    }

    /// Handle an intensity slider move
    pub fn on_intensity_slider(&mut self, value: f32) {
        let value = self.hud.set_intensity_value(value);
        log::debug!("label: {}", self.hud.intensity_label.text);
        self.sync.set_intensity(&mut self.scene, value);
    }

    /// Handle a temperature slider move
    pub fn on_temperature_slider(&mut self, value: f32) {
        let value = self.hud.set_temperature_value(value);
        log::debug!("label: {}", self.hud.temperature_label.text);
        self.sync.set_temperature(&mut self.scene, value);
    }

    /// Handle the estimation toggle being flipped
    ///
    /// Switching modes re-applies both current slider values, so turning
    /// estimation off restores the last manual values rather than leaving
    /// stale estimated ones frozen on the lights.
    pub fn on_estimation_toggle(&mut self, enabled: bool) {
        self.hud.set_estimation_enabled(enabled);
        let mode = if enabled {
            ControlMode::Estimated
        } else {
            ControlMode::Manual
        };
        self.sync.set_mode(&mut self.scene, mode);

        let intensity = self.hud.intensity_slider.value;
        let temperature = self.hud.temperature_slider.value;
        self.hud.set_intensity_value(intensity);
        self.hud.set_temperature_value(temperature);
    }

    /// Scene graph accessor
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// HUD state accessor
    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    /// Light synchronizer accessor
    pub fn sync(&self) -> &LightSynchronizer {
        &self.sync
    }
}

impl SessionDelegate for LightLabApp {
    fn on_anchor_added(&mut self, anchor: &Anchor) {
        // Only planar anchors get a marker; everything else is ignored
        let Some(center) = anchor.plane_center() else {
            return;
        };

        match self.spawn_marker(center) {
            Ok(_) => self.hud.set_plane_detected(),
            // Keys are created and attached in the same call, so this
            // cannot happen with a live scene; log and carry on.
            Err(e) => log::error!("failed to place marker: {e}"),
        }
    }

    fn on_frame(&mut self, estimate: Option<&LightEstimate>) {
        self.sync.apply_estimate(&mut self.scene, estimate);
    }
}
