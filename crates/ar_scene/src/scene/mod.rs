//! Scene management
//!
//! A small retained scene graph for AR content: markers placed on detected
//! planes, lights hung off those markers. Nodes live in a slotmap and are
//! addressed by generational [`NodeKey`]s, so stale handles are detected
//! rather than aliased.
//!
//! ## Architecture
//!
//! ```text
//! Tracking session (anchors)
//!        ↓
//! Scene graph (nodes, attachments)
//!        ↓
//! Renderer (out of scope, black box)
//! ```

mod graph;

pub use graph::{Geometry, Node, NodeKey, SceneError, SceneGraph};
