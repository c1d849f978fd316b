//! Simulated tracking session
//!
//! Stands in for the device AR pipeline so the demo can run headless: emits
//! horizontal plane detections on a schedule and a per-frame ambient light
//! estimate following a slow sinusoid with random jitter.

use crate::config::{EstimateConfig, SessionSimConfig};
use ar_scene::foundation::math::Vec3;
use ar_scene::light::LightEstimate;
use ar_scene::tracking::{Anchor, SessionConfig, SessionEvent, SessionEventQueue, TrackingSession};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scripted tracking session for headless demo runs
pub struct SimulatedSession {
    schedule: SessionSimConfig,
    estimate: EstimateConfig,
    rng: StdRng,
    running: bool,
    detect_planes: bool,
    frame: u64,
    planes_emitted: u32,
}

impl SimulatedSession {
    /// Create a session from its schedule and estimate shape
    pub fn new(schedule: SessionSimConfig, estimate: EstimateConfig) -> Self {
        let rng = StdRng::seed_from_u64(schedule.seed);
        Self {
            schedule,
            estimate,
            rng,
            running: false,
            detect_planes: false,
            frame: 0,
            planes_emitted: 0,
        }
    }

    fn sample_estimate(&mut self) -> Option<LightEstimate> {
        let dropout = self.estimate.dropout_every;
        if dropout > 0 && self.frame % dropout == 0 {
            return None;
        }

        let t = self.frame as f32 / self.schedule.frame_rate_hz;
        let phase = (t / self.estimate.period_seconds) * std::f32::consts::TAU;
        let jitter = self.estimate.jitter;

        let intensity = self.estimate.base_intensity
            + self.estimate.intensity_swing * phase.sin()
            + self.rng.gen_range(-jitter..=jitter);
        let temperature = self.estimate.base_temperature
            + self.estimate.temperature_swing * phase.cos()
            + self.rng.gen_range(-jitter..=jitter);

        Some(LightEstimate::new(intensity.max(0.0), temperature.max(0.0)))
    }

    fn plane_due(&self) -> bool {
        self.detect_planes
            && self.planes_emitted < self.schedule.plane_count
            && self.frame == self.schedule.plane_frame * u64::from(self.planes_emitted + 1)
    }
}

impl TrackingSession for SimulatedSession {
    fn run(&mut self, config: SessionConfig) {
        log::info!(
            "simulated session running (plane detection: {})",
            config.detect_horizontal_planes
        );
        self.running = true;
        self.detect_planes = config.detect_horizontal_planes;
        self.frame = 0;
        self.planes_emitted = 0;
        self.rng = StdRng::seed_from_u64(self.schedule.seed);
    }

    fn pause(&mut self) {
        log::info!("simulated session paused after {} frames", self.frame);
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll(&mut self, queue: &SessionEventQueue) {
        if !self.running {
            return;
        }
        self.frame += 1;

        if self.plane_due() {
            self.planes_emitted += 1;
            let [x, y, z] = self.schedule.plane_center;
            // Subsequent planes land slightly offset so their markers don't overlap
            let spread = 0.3 * (self.planes_emitted - 1) as f32;
            let anchor = Anchor::horizontal_plane(Vec3::new(x + spread, y, z));
            log::info!("plane detected at frame {}: {:?}", self.frame, anchor.center);
            queue.send(SessionEvent::AnchorAdded { anchor });
        }

        let estimate = self.sample_estimate();
        queue.send(SessionEvent::FrameTick { estimate });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EstimateConfig, SessionSimConfig};

    fn session() -> SimulatedSession {
        SimulatedSession::new(SessionSimConfig::default(), EstimateConfig::default())
    }

    fn drain_kinds(queue: &SessionEventQueue) -> (usize, usize) {
        let mut anchors = 0;
        let mut frames = 0;
        for event in queue.drain() {
            match event {
                SessionEvent::AnchorAdded { .. } => anchors += 1,
                SessionEvent::FrameTick { .. } => frames += 1,
            }
        }
        (anchors, frames)
    }

    #[test]
    fn test_paused_session_produces_nothing() {
        let mut session = session();
        let queue = SessionEventQueue::new();

        assert!(!session.is_running());
        session.poll(&queue);
        assert_eq!(queue.pending_len(), 0);

        session.run(SessionConfig {
            detect_horizontal_planes: true,
        });
        assert!(session.is_running());

        session.pause();
        assert!(!session.is_running());
        session.poll(&queue);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn test_plane_emitted_on_schedule() {
        let mut session = session();
        let queue = SessionEventQueue::new();
        session.run(SessionConfig {
            detect_horizontal_planes: true,
        });

        let plane_frame = SessionSimConfig::default().plane_frame;
        for _ in 0..plane_frame - 1 {
            session.poll(&queue);
        }
        let (anchors, frames) = drain_kinds(&queue);
        assert_eq!(anchors, 0);
        assert_eq!(frames as u64, plane_frame - 1);

        session.poll(&queue);
        let (anchors, frames) = drain_kinds(&queue);
        assert_eq!(anchors, 1);
        assert_eq!(frames, 1);
    }

    #[test]
    fn test_no_planes_without_plane_detection() {
        let mut session = session();
        let queue = SessionEventQueue::new();
        session.run(SessionConfig {
            detect_horizontal_planes: false,
        });

        for _ in 0..400 {
            session.poll(&queue);
        }
        let (anchors, _) = drain_kinds(&queue);
        assert_eq!(anchors, 0);
    }

    #[test]
    fn test_dropout_frames_carry_no_estimate() {
        let schedule = SessionSimConfig::default();
        let estimate = EstimateConfig {
            dropout_every: 3,
            ..EstimateConfig::default()
        };
        let mut session = SimulatedSession::new(schedule, estimate);
        let queue = SessionEventQueue::new();
        session.run(SessionConfig::default());

        let mut missing = 0;
        for _ in 0..9 {
            session.poll(&queue);
        }
        for event in queue.drain() {
            if let SessionEvent::FrameTick { estimate: None } = event {
                missing += 1;
            }
        }
        assert_eq!(missing, 3);
    }

    #[test]
    fn test_estimates_stay_non_negative() {
        let estimate = EstimateConfig {
            base_intensity: 10.0,
            intensity_swing: 500.0,
            ..EstimateConfig::default()
        };
        let mut session = SimulatedSession::new(SessionSimConfig::default(), estimate);
        let queue = SessionEventQueue::new();
        session.run(SessionConfig::default());

        for _ in 0..600 {
            session.poll(&queue);
        }
        for event in queue.drain() {
            if let SessionEvent::FrameTick {
                estimate: Some(sample),
            } = event
            {
                assert!(sample.ambient_intensity >= 0.0);
                assert!(sample.ambient_color_temperature >= 0.0);
            }
        }
    }
}
