//! Demo configuration
//!
//! Loaded from a TOML file when one is given on the command line; every
//! section and field falls back to defaults otherwise.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading the demo configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid TOML for this schema
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Marker placement settings
    pub marker: MarkerConfig,
    /// Light placement settings
    pub light: LightConfig,
    /// Manual slider setups
    pub sliders: SliderConfig,
    /// Simulated session schedule
    pub session: SessionSimConfig,
    /// Simulated ambient estimate shape
    pub estimate: EstimateConfig,
    /// Scripted HUD input schedule
    pub script: ScriptConfig,
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from `path` if given, falling back to defaults on absence
    ///
    /// A present-but-invalid file is still an error; only a missing path
    /// argument silently uses defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("loading demo config from {}", path.display());
                Self::load(path)
            }
            None => {
                log::info!("no config file given; using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Marker placement settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Sphere radius in meters
    pub radius: f32,
    /// Extra upward margin above the plane surface, in meters
    pub margin: f32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 0.1,
            margin: 1.0,
        }
    }
}

/// Light placement settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Offset of the light from its marker, in meters
    pub offset: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            offset: [-1.0, 0.0, 0.0],
        }
    }
}

/// Manual slider setups
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Initial intensity slider value
    pub intensity_initial: f32,
    /// Intensity slider maximum (minimum is 0)
    pub intensity_max: f32,
    /// Initial color temperature slider value, Kelvin
    pub temperature_initial: f32,
    /// Temperature slider maximum (minimum is 0)
    pub temperature_max: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            intensity_initial: 1000.0,
            intensity_max: 2000.0,
            temperature_initial: 6500.0,
            temperature_max: 10_000.0,
        }
    }
}

/// Simulated session schedule
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSimConfig {
    /// Total frames to simulate
    pub frames: u64,
    /// Simulated frame rate, Hz
    pub frame_rate_hz: f32,
    /// Frame at which the first plane is detected
    pub plane_frame: u64,
    /// Center of the detected plane, meters
    pub plane_center: [f32; 3],
    /// How many planes the session will detect in total
    pub plane_count: u32,
    /// RNG seed for estimate jitter
    pub seed: u64,
}

impl Default for SessionSimConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_rate_hz: 60.0,
            plane_frame: 90,
            plane_center: [0.0, 0.0, -0.5],
            plane_count: 1,
            seed: 7,
        }
    }
}

/// Simulated ambient estimate shape: a slow sinusoid plus jitter
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Mean ambient intensity
    pub base_intensity: f32,
    /// Intensity swing amplitude
    pub intensity_swing: f32,
    /// Mean color temperature, Kelvin
    pub base_temperature: f32,
    /// Temperature swing amplitude
    pub temperature_swing: f32,
    /// Uniform jitter amplitude applied to both channels
    pub jitter: f32,
    /// Sinusoid period in seconds
    pub period_seconds: f32,
    /// Emit a frame without an estimate every N frames (0 = never)
    pub dropout_every: u64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            base_intensity: 1000.0,
            intensity_swing: 400.0,
            base_temperature: 6500.0,
            temperature_swing: 1000.0,
            jitter: 25.0,
            period_seconds: 8.0,
            dropout_every: 0,
        }
    }
}

/// Scripted HUD input schedule for the demo run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Frame at which both sliders are moved to the scripted values
    pub sliders_frame: u64,
    /// Scripted intensity slider value
    pub intensity_value: f32,
    /// Scripted temperature slider value
    pub temperature_value: f32,
    /// Frame at which estimated lighting is switched on
    pub estimation_on_frame: u64,
    /// Frame at which estimated lighting is switched back off
    pub estimation_off_frame: u64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            sliders_frame: 150,
            intensity_value: 750.0,
            temperature_value: 4500.0,
            estimation_on_frame: 240,
            estimation_off_frame: 450,
        }
    }
}
