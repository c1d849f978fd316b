//! Tracking session interfaces
//!
//! The tracking pipeline itself (pose estimation, plane detection, light
//! sensing) is a black box behind the [`TrackingSession`] trait. It delivers
//! two kinds of events: anchors it has detected, and per-frame ticks with an
//! optional ambient light estimate. Events are queued and drained on the
//! app's designated update thread; see [`SessionEventQueue`].

mod events;

pub use events::{SessionDelegate, SessionEvent, SessionEventQueue};

use crate::foundation::math::Vec3;

/// What a tracked anchor represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// A detected horizontal flat surface
    HorizontalPlane,
    /// A detected vertical flat surface
    VerticalPlane,
    /// A tracked feature point with no surface semantics
    FeaturePoint,
}

/// A tracking-service reference point in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// What kind of feature the anchor represents
    pub kind: AnchorKind,

    /// Center of the anchored feature, relative to the anchor's node
    pub center: Vec3,
}

impl Anchor {
    /// Create a horizontal plane anchor
    pub fn horizontal_plane(center: Vec3) -> Self {
        Self {
            kind: AnchorKind::HorizontalPlane,
            center,
        }
    }

    /// Create a feature point anchor
    pub fn feature_point(center: Vec3) -> Self {
        Self {
            kind: AnchorKind::FeaturePoint,
            center,
        }
    }

    /// Center of the detected plane, or `None` for non-planar anchors
    pub fn plane_center(&self) -> Option<Vec3> {
        match self.kind {
            AnchorKind::HorizontalPlane | AnchorKind::VerticalPlane => Some(self.center),
            AnchorKind::FeaturePoint => None,
        }
    }
}

/// Configuration handed to a session when it starts running
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Whether the session should detect and report horizontal planes
    pub detect_horizontal_planes: bool,
}

/// A running AR tracking session
///
/// Sessions have run/pause boundaries matching the hosting screen's
/// lifetime: state is session-scoped and reset on each `run`.
pub trait TrackingSession {
    /// Start (or restart) the session with the given configuration
    fn run(&mut self, config: SessionConfig);

    /// Stop delivering events until the next `run`
    fn pause(&mut self);

    /// Whether the session is currently delivering events
    fn is_running(&self) -> bool;

    /// Produce this tick's events into the queue
    ///
    /// Called once per main-loop iteration. A paused session produces
    /// nothing.
    fn poll(&mut self, queue: &SessionEventQueue);
}
