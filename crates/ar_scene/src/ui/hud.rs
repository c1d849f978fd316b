//! HUD state: labels, sliders, toggle, and panel visibility

/// Text label state
#[derive(Debug, Clone, Default)]
pub struct Label {
    /// Current text content
    pub text: String,
}

impl Label {
    /// Create a label with initial text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Slider state with a clamped value range
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    /// Current value
    pub value: f32,
    /// Minimum selectable value
    pub min: f32,
    /// Maximum selectable value
    pub max: f32,
}

impl Slider {
    /// Create a slider, clamping the initial value into range
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// Set the slider value, clamped into range; returns the applied value
    pub fn set(&mut self, value: f32) -> f32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }
}

/// On/off toggle state
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggle {
    /// Whether the toggle is on
    pub on: bool,
}

/// Which HUD panel groupings are visible
///
/// Derived solely from the plane-detected flag: before the first detection
/// only the instruction panel shows; afterwards the controls take over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    /// "Move around to detect a surface" instruction panel
    pub instruction: bool,
    /// Main control panel (sliders and labels)
    pub controls: bool,
    /// Estimation sub-panel (toggle)
    pub estimation: bool,
}

/// UI-bound state for the light controls HUD
#[derive(Debug, Clone)]
pub struct HudState {
    /// Label mirroring the intensity slider
    pub intensity_label: Label,
    /// Label mirroring the color temperature slider
    pub temperature_label: Label,
    /// Manual ambient intensity slider
    pub intensity_slider: Slider,
    /// Manual color temperature slider
    pub temperature_slider: Slider,
    /// "Use estimated lighting" toggle
    pub estimation_toggle: Toggle,

    plane_detected: bool,
}

impl HudState {
    /// Create HUD state with the given slider setups
    pub fn new(intensity_slider: Slider, temperature_slider: Slider) -> Self {
        let mut hud = Self {
            intensity_label: Label::default(),
            temperature_label: Label::default(),
            intensity_slider,
            temperature_slider,
            estimation_toggle: Toggle::default(),
            plane_detected: false,
        };
        hud.set_intensity_value(intensity_slider.value);
        hud.set_temperature_value(temperature_slider.value);
        hud
    }

    /// Record that a plane has been detected
    ///
    /// Latches: once true it never reverts for the rest of the session, and
    /// repeat detections are idempotent for the UI.
    pub fn set_plane_detected(&mut self) {
        if !self.plane_detected {
            log::info!("first horizontal plane detected; showing light controls");
        }
        self.plane_detected = true;
    }

    /// Whether a plane has been detected this session
    pub fn plane_detected(&self) -> bool {
        self.plane_detected
    }

    /// Panel visibility derived from the plane-detected flag
    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility {
            instruction: !self.plane_detected,
            controls: self.plane_detected,
            estimation: self.plane_detected,
        }
    }

    /// Apply an intensity slider move: clamp, update the label, return the
    /// applied value
    pub fn set_intensity_value(&mut self, value: f32) -> f32 {
        let value = self.intensity_slider.set(value);
        self.intensity_label.text = format!("Ambient intensity: {value:.1}");
        value
    }

    /// Apply a temperature slider move: clamp, update the label, return the
    /// applied value
    pub fn set_temperature_value(&mut self, value: f32) -> f32 {
        let value = self.temperature_slider.set(value);
        self.temperature_label.text = format!("Ambient color temperature: {value:.1} K");
        value
    }

    /// Flip the estimation toggle
    pub fn set_estimation_enabled(&mut self, on: bool) {
        self.estimation_toggle.on = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud() -> HudState {
        HudState::new(
            Slider::new(1000.0, 0.0, 2000.0),
            Slider::new(6500.0, 0.0, 10_000.0),
        )
    }

    #[test]
    fn test_instruction_panel_until_first_detection() {
        let hud = hud();
        assert_eq!(
            hud.visibility(),
            PanelVisibility {
                instruction: true,
                controls: false,
                estimation: false,
            }
        );
    }

    #[test]
    fn test_plane_detected_latches() {
        let mut hud = hud();
        hud.set_plane_detected();
        hud.set_plane_detected();

        assert!(hud.plane_detected());
        assert_eq!(
            hud.visibility(),
            PanelVisibility {
                instruction: false,
                controls: true,
                estimation: true,
            }
        );
    }

    #[test]
    fn test_slider_moves_update_labels() {
        let mut hud = hud();
        hud.set_intensity_value(800.0);
        hud.set_temperature_value(5000.0);

        assert_eq!(hud.intensity_label.text, "Ambient intensity: 800.0");
        assert_eq!(
            hud.temperature_label.text,
            "Ambient color temperature: 5000.0 K"
        );
    }

    #[test]
    fn test_slider_clamps_to_range() {
        let mut hud = hud();
        assert_eq!(hud.set_intensity_value(-10.0), 0.0);
        assert_eq!(hud.set_intensity_value(99_999.0), 2000.0);
    }
}
