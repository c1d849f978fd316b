//! UI state for the light controls HUD
//!
//! Widget drawing belongs to the host UI toolkit; this module only models
//! the state the toolkit binds to: labels, sliders, the estimation toggle,
//! and the panel visibility derived from plane detection.

mod hud;

pub use hud::{HudState, Label, PanelVisibility, Slider, Toggle};
