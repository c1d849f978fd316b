//! Headless AR light-estimation demo
//!
//! Runs a simulated tracking session against the light-lab controller: a
//! horizontal plane is detected after a short while, a marker with a point
//! light is placed on it, and scripted slider/toggle input exercises manual
//! and estimated light control. Watch it with `RUST_LOG=debug`.

mod app;
mod config;
mod sim;

use app::{AppError, LightLabApp};
use ar_scene::foundation::time::Timer;
use ar_scene::tracking::{SessionConfig, SessionEventQueue, TrackingSession};
use config::DemoConfig;
use sim::SimulatedSession;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    ar_scene::foundation::logging::init();

    if let Err(e) = run() {
        eprintln!("light_lab error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = DemoConfig::load_or_default(config_path.as_deref())?;

    let mut app = LightLabApp::new(&config);
    let mut session = SimulatedSession::new(config.session.clone(), config.estimate.clone());
    let queue = SessionEventQueue::new();

    session.run(SessionConfig {
        detect_horizontal_planes: true,
    });

    let frame_time = Duration::from_secs_f32(1.0 / config.session.frame_rate_hz);
    let mut timer = Timer::new();
    let script = &config.script;

    for frame in 1..=config.session.frames {
        session.poll(&queue);
        queue.dispatch(&mut app);

        // Scripted HUD input standing in for a human poking the controls
        if frame == script.sliders_frame {
            app.on_intensity_slider(script.intensity_value);
            app.on_temperature_slider(script.temperature_value);
        }
        if frame == script.estimation_on_frame {
            app.on_estimation_toggle(true);
        }
        if frame == script.estimation_off_frame {
            app.on_estimation_toggle(false);
        }

        timer.update();
        std::thread::sleep(frame_time);
    }

    session.pause();

    let visibility = app.hud().visibility();
    log::info!(
        "done after {} frames ({:.1}s): {} scene node(s), {} light(s), instruction panel {}",
        timer.frame_count(),
        timer.total_time(),
        app.scene().node_count(),
        app.sync().tracked().len(),
        if visibility.instruction { "shown" } else { "hidden" }
    );
    log::info!("{}", app.hud().intensity_label.text);
    log::info!("{}", app.hud().temperature_label.text);

    Ok(())
}
