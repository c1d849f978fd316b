//! Session event queue and delegate dispatch
//!
//! Tracking callbacks can originate on the session's own threads; all scene
//! and UI state is owned by one designated update thread. Producers enqueue
//! [`SessionEvent`]s from anywhere, and the owning thread drains and
//! dispatches them once per main-loop iteration. Dispatch is synchronous and
//! each handler runs to completion; there is no cancellation.

use crate::light::LightEstimate;
use crate::tracking::Anchor;
use std::sync::Mutex;

/// Event delivered by a tracking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A new anchor was detected and added to the session
    AnchorAdded {
        /// The detected anchor
        anchor: Anchor,
    },

    /// A frame was rendered
    FrameTick {
        /// Ambient light estimate for the frame, if the pipeline produced one
        estimate: Option<LightEstimate>,
    },
}

/// Receiver for session events, invoked on the designated update thread
pub trait SessionDelegate {
    /// A new anchor was added to the session
    fn on_anchor_added(&mut self, anchor: &Anchor);

    /// A frame tick occurred, with the frame's light estimate if any
    fn on_frame(&mut self, estimate: Option<&LightEstimate>);
}

/// Thread-safe queue bridging session callbacks onto the update thread
#[derive(Debug, Default)]
pub struct SessionEventQueue {
    pending: Mutex<Vec<SessionEvent>>,
}

impl SessionEventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event; safe to call from any thread
    pub fn send(&self, event: SessionEvent) {
        self.pending.lock().unwrap().push(event);
    }

    /// Number of events waiting for dispatch
    pub fn pending_len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Drain all pending events in arrival order
    pub fn drain(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.pending.lock().unwrap())
    }

    /// Drain and deliver all pending events to the delegate
    ///
    /// Must be called from the thread that owns scene and UI state.
    pub fn dispatch(&self, delegate: &mut dyn SessionDelegate) {
        for event in self.drain() {
            match event {
                SessionEvent::AnchorAdded { anchor } => {
                    log::debug!("dispatching anchor: {:?} at {:?}", anchor.kind, anchor.center);
                    delegate.on_anchor_added(&anchor);
                }
                SessionEvent::FrameTick { estimate } => {
                    delegate.on_frame(estimate.as_ref());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[derive(Default)]
    struct RecordingDelegate {
        anchors: Vec<Anchor>,
        frames: Vec<Option<LightEstimate>>,
    }

    impl SessionDelegate for RecordingDelegate {
        fn on_anchor_added(&mut self, anchor: &Anchor) {
            self.anchors.push(*anchor);
        }

        fn on_frame(&mut self, estimate: Option<&LightEstimate>) {
            self.frames.push(estimate.copied());
        }
    }

    #[test]
    fn test_dispatch_preserves_arrival_order() {
        let queue = SessionEventQueue::new();
        queue.send(SessionEvent::AnchorAdded {
            anchor: Anchor::horizontal_plane(Vec3::zeros()),
        });
        queue.send(SessionEvent::FrameTick {
            estimate: Some(LightEstimate::new(800.0, 5000.0)),
        });
        queue.send(SessionEvent::FrameTick { estimate: None });

        let mut delegate = RecordingDelegate::default();
        queue.dispatch(&mut delegate);

        assert_eq!(delegate.anchors.len(), 1);
        assert_eq!(delegate.frames.len(), 2);
        assert_eq!(delegate.frames[0], Some(LightEstimate::new(800.0, 5000.0)));
        assert_eq!(delegate.frames[1], None);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn test_send_is_usable_across_threads() {
        let queue = std::sync::Arc::new(SessionEventQueue::new());
        let producer = std::sync::Arc::clone(&queue);

        let handle = std::thread::spawn(move || {
            producer.send(SessionEvent::FrameTick { estimate: None });
        });
        handle.join().unwrap();

        assert_eq!(queue.pending_len(), 1);
    }
}
