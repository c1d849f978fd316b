//! # AR Scene
//!
//! A small scene-graph and lighting toolkit for augmented-reality tracking
//! sessions. It models the pieces an AR light-estimation app needs on the CPU
//! side: a scene graph with attachable point lights, a per-frame light
//! synchronizer driven either by manual controls or by the platform's ambient
//! light estimate, and a session event queue that funnels tracking callbacks
//! onto the app's designated update thread.
//!
//! Pose estimation, plane-mesh geometry, and rendering are deliberately out of
//! scope; they are black-box collaborators that deliver anchor events and a
//! per-frame [`light::LightEstimate`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ar_scene::prelude::*;
//!
//! let mut scene = SceneGraph::new();
//! let marker = scene.add_node(Node::sphere(Vec3::zeros(), 0.1));
//! let light = scene.add_node(Node::point_light(Vec3::new(-1.0, 0.0, 0.0)));
//! scene.attach(marker, light).unwrap();
//!
//! let mut sync = LightSynchronizer::new(0.0, 0.0);
//! sync.track(light);
//! sync.apply_estimate(&mut scene, Some(&LightEstimate::new(800.0, 5000.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod light;
pub mod scene;
pub mod tracking;
pub mod ui;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        foundation::{
            math::Vec3,
            time::Timer,
        },
        light::{ControlMode, LightEstimate, LightSynchronizer, PointLight},
        scene::{Geometry, Node, NodeKey, SceneError, SceneGraph},
        tracking::{
            Anchor, AnchorKind, SessionConfig, SessionDelegate, SessionEvent,
            SessionEventQueue, TrackingSession,
        },
        ui::HudState,
    };
}
