//! Lighting data and synchronization
//!
//! Components are pure data ([`PointLight`], [`LightEstimate`]); the logic
//! lives in [`LightSynchronizer`], which drives every tracked light from a
//! single control signal - either manual slider values or the tracking
//! session's per-frame ambient estimate.

mod estimate;
mod point;
mod sync;

pub use estimate::LightEstimate;
pub use point::PointLight;
pub use sync::{ControlMode, LightSynchronizer};
