//! Adjustment panel controller.

use crate::action::{ActionRegistry, PanelAction};
use crate::aspect::{AspectCycle, ORIGINAL_ASPECT};
use crate::display::StatusDisplay;
use crate::engine::{PlaybackEngine, PropertyValue};
use crate::error::PanelError;
use crate::feedback;
use crate::settings::{HWDEC_KEY, PanelSettings, Preferences};

use log::debug;
use std::sync::Arc;

pub(crate) const ASPECT_OVERRIDE: &str = "video-aspect-override";
pub(crate) const ROTATE: &str = "video-rotate";
pub(crate) const ZOOM: &str = "video-zoom";
pub(crate) const SPEED: &str = "speed";

pub(crate) const HFLIP_LABEL: &str = "@hflip";
pub(crate) const VFLIP_LABEL: &str = "@vflip";
const HFLIP_FILTER: &str = "@hflip:hflip";
const VFLIP_FILTER: &str = "@vflip:vflip";

const ZOOM_STEP: f64 = 0.1;
const SPEED_STEP: f64 = 0.1;
const DELAY_STEP: f64 = 0.1;
const COLOR_STEP: i64 = 1;
const ROTATE_STEP: i64 = 90;

/// Decoder names containing this marker copy frames back to system memory,
/// where video filters still apply.
const COPY_MODE_MARKER: &str = "-copy";

/// Picture equalizer properties, adjusted in whole steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorAdjustment {
    /// `contrast`
    Contrast,
    /// `brightness`
    Brightness,
    /// `gamma`
    Gamma,
    /// `saturation`
    Saturation,
}

impl ColorAdjustment {
    /// All equalizer properties, in panel order.
    pub const ALL: [Self; 4] = [Self::Contrast, Self::Brightness, Self::Gamma, Self::Saturation];

    /// Engine property name.
    pub fn property(self) -> &'static str {
        match self {
            Self::Contrast => "contrast",
            Self::Brightness => "brightness",
            Self::Gamma => "gamma",
            Self::Saturation => "saturation",
        }
    }

    /// Display name used in feedback.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contrast => "Contrast",
            Self::Brightness => "Brightness",
            Self::Gamma => "Gamma",
            Self::Saturation => "Saturation",
        }
    }
}

/// Streams whose timing offset the panel adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayTrack {
    /// `sub-delay`
    Subtitle,
    /// `audio-delay`
    Audio,
}

impl DelayTrack {
    /// Engine property name (value in seconds).
    pub fn property(self) -> &'static str {
        match self {
            Self::Subtitle => "sub-delay",
            Self::Audio => "audio-delay",
        }
    }

    /// Display name used in feedback.
    pub fn label(self) -> &'static str {
        match self {
            Self::Subtitle => "Subtitle Delay",
            Self::Audio => "Audio Delay",
        }
    }
}

/// Whether the adjustment controls can be used with the current decoder.
///
/// Hardware decoding without a copy-back mode bypasses the filter chain,
/// so the controls are only available when hardware decoding is off or the
/// active decoder is a `-copy` variant.
pub fn controls_sensitive(hwdec_enabled: bool, decode_mode: &str) -> bool {
    !(hwdec_enabled && !decode_mode.contains(COPY_MODE_MARKER))
}

/// The video adjustment panel.
///
/// Translates button presses into engine commands and reports the result
/// on the status display. Apart from the aspect ratio position, no value is
/// cached: every feedback message re-reads the engine.
///
/// # Example
///
/// ```
/// use cine_options_core::{MockEngine, OptionsPanel, PanelAction, PanelSettings, RecordingDisplay};
/// use std::sync::Arc;
///
/// let engine = Arc::new(MockEngine::new());
/// let display = Arc::new(RecordingDisplay::new());
/// let mut panel = OptionsPanel::from_settings(engine, display.clone(), PanelSettings::default())?;
///
/// panel.trigger(PanelAction::RotateLeft)?;
/// assert_eq!(display.last().as_deref(), Some("Rotate: 270°"));
/// # Ok::<(), cine_options_core::PanelError>(())
/// ```
pub struct OptionsPanel {
    engine: Arc<dyn PlaybackEngine>,
    display: Arc<dyn StatusDisplay>,
    preferences: Arc<dyn Preferences>,
    aspect: AspectCycle,
    registry: ActionRegistry,
    sensitive: bool,
}

impl OptionsPanel {
    /// Create a panel over the given collaborators.
    pub fn new(
        engine: Arc<dyn PlaybackEngine>,
        display: Arc<dyn StatusDisplay>,
        preferences: Arc<dyn Preferences>,
        aspect: AspectCycle,
    ) -> Self {
        Self {
            engine,
            display,
            preferences,
            aspect,
            registry: ActionRegistry::new(),
            sensitive: true,
        }
    }

    /// Create a panel whose aspect list and preferences come from `settings`.
    ///
    /// # Errors
    /// Returns [`PanelError::EmptyAspectRatios`] if the settings list no ratios.
    pub fn from_settings(
        engine: Arc<dyn PlaybackEngine>,
        display: Arc<dyn StatusDisplay>,
        settings: PanelSettings,
    ) -> Result<Self, PanelError> {
        let aspect = AspectCycle::new(settings.aspect_ratios.clone())?;
        Ok(Self::new(engine, display, Arc::new(settings), aspect))
    }

    /// Current aspect ratio position.
    pub fn aspect(&self) -> &AspectCycle {
        &self.aspect
    }

    /// Result of the last [`activate`](Self::activate) call (`true` before any).
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Run the handler bound to `action`.
    pub fn trigger(&mut self, action: PanelAction) -> Result<(), PanelError> {
        debug!("panel action: {}", action.id());
        match self.registry.handler(action) {
            Some(handler) => handler(self),
            None => Err(PanelError::UnknownAction(action.id().to_string())),
        }
    }

    /// Run the handler bound to the action identifier `id`.
    ///
    /// # Errors
    /// Returns [`PanelError::UnknownAction`] if `id` names no action.
    pub fn trigger_id(&mut self, id: &str) -> Result<(), PanelError> {
        let action: PanelAction = id.parse()?;
        self.trigger(action)
    }

    /// Re-evaluate whether the controls are usable; call when the panel is shown.
    pub fn activate(&mut self) -> Result<bool, PanelError> {
        let hwdec_enabled = self.preferences.get_boolean(HWDEC_KEY);
        let mode = self.engine.decode_mode()?.unwrap_or_default();
        self.sensitive = controls_sensitive(hwdec_enabled, &mode);
        debug!(
            "gate: hwdec={}, decoder='{}', sensitive={}",
            hwdec_enabled, mode, self.sensitive
        );
        Ok(self.sensitive)
    }

    // --- reset all ---

    /// Restore every adjustment to its default without waiting for the
    /// engine and without feedback.
    pub fn reset_all(&mut self) -> Result<(), PanelError> {
        let set = |name: &str, value: PropertyValue| -> [PropertyValue; 3] {
            ["set".into(), name.into(), value]
        };
        let remove = |label: &str| -> [PropertyValue; 3] {
            ["vf".into(), "remove".into(), label.into()]
        };

        let commands = [
            set(ASPECT_OVERRIDE, ORIGINAL_ASPECT.into()),
            set(ROTATE, 0.into()),
            remove(HFLIP_LABEL),
            remove(VFLIP_LABEL),
            set(ZOOM, 0.into()),
            set(ColorAdjustment::Contrast.property(), 0.into()),
            set(ColorAdjustment::Brightness.property(), 0.into()),
            set(ColorAdjustment::Gamma.property(), 0.into()),
            set(ColorAdjustment::Saturation.property(), 0.into()),
            set(DelayTrack::Subtitle.property(), 0.into()),
            set(DelayTrack::Audio.property(), 0.into()),
            set(SPEED, 1.0.into()),
        ];
        for args in &commands {
            self.engine.command_async(args)?;
        }
        Ok(())
    }

    // --- aspect ratio ---

    /// Select the next aspect ratio.
    pub fn aspect_next(&mut self) -> Result<(), PanelError> {
        let token = self.aspect.next().to_string();
        self.apply_aspect(&token)
    }

    /// Select the previous aspect ratio.
    pub fn aspect_previous(&mut self) -> Result<(), PanelError> {
        let token = self.aspect.previous().to_string();
        self.apply_aspect(&token)
    }

    /// Return to the source aspect ratio.
    pub fn aspect_reset(&mut self) -> Result<(), PanelError> {
        self.aspect.reset();
        self.apply_aspect(ORIGINAL_ASPECT)
    }

    fn apply_aspect(&self, token: &str) -> Result<(), PanelError> {
        self.engine.set(ASPECT_OVERRIDE, token.into())?;
        self.show(feedback::aspect(token));
        Ok(())
    }

    // --- rotation ---

    /// Rotate clockwise by a quarter turn.
    pub fn rotate_right(&mut self) -> Result<(), PanelError> {
        self.rotate_by(ROTATE_STEP)
    }

    /// Rotate counter-clockwise by a quarter turn.
    pub fn rotate_left(&mut self) -> Result<(), PanelError> {
        self.rotate_by(-ROTATE_STEP)
    }

    /// Remove any rotation.
    pub fn rotate_reset(&mut self) -> Result<(), PanelError> {
        self.engine.set(ROTATE, 0.into())?;
        self.show(feedback::rotation(0));
        Ok(())
    }

    fn rotate_by(&self, degrees: i64) -> Result<(), PanelError> {
        let current = self.engine.get_property(ROTATE)?.as_i64(ROTATE)?;
        let rotated = (current + degrees).rem_euclid(360);
        self.engine.set(ROTATE, rotated.into())?;
        self.show(feedback::rotation(rotated));
        Ok(())
    }

    // --- flip ---

    /// Toggle the horizontal flip filter.
    pub fn flip_horizontal(&mut self) -> Result<(), PanelError> {
        self.engine.command(&["vf".into(), "toggle".into(), HFLIP_FILTER.into()])?;
        self.show("Flip: Horizontal".to_string());
        Ok(())
    }

    /// Toggle the vertical flip filter.
    pub fn flip_vertical(&mut self) -> Result<(), PanelError> {
        self.engine.command(&["vf".into(), "toggle".into(), VFLIP_FILTER.into()])?;
        self.show("Flip: Vertical".to_string());
        Ok(())
    }

    /// Remove both flip filters; a no-op for filters that are not active.
    pub fn flip_reset(&mut self) -> Result<(), PanelError> {
        self.engine.command(&["vf".into(), "remove".into(), HFLIP_LABEL.into()])?;
        self.engine.command(&["vf".into(), "remove".into(), VFLIP_LABEL.into()])?;
        self.show("Flip: Reset".to_string());
        Ok(())
    }

    // --- zoom ---

    /// Zoom in by one step.
    pub fn zoom_increase(&mut self) -> Result<(), PanelError> {
        self.zoom_by(ZOOM_STEP)
    }

    /// Zoom out by one step.
    pub fn zoom_decrease(&mut self) -> Result<(), PanelError> {
        self.zoom_by(-ZOOM_STEP)
    }

    /// Remove any zoom.
    pub fn zoom_reset(&mut self) -> Result<(), PanelError> {
        self.engine.set(ZOOM, 0.into())?;
        self.show("Zoom: 0x".to_string());
        Ok(())
    }

    fn zoom_by(&self, delta: f64) -> Result<(), PanelError> {
        self.engine.add(ZOOM, delta.into())?;
        let value = self.read_f64(ZOOM)?;
        self.show(feedback::zoom(value));
        Ok(())
    }

    // --- equalizer ---

    /// Raise an equalizer property by one.
    pub fn color_increase(&mut self, color: ColorAdjustment) -> Result<(), PanelError> {
        self.color_by(color, COLOR_STEP)
    }

    /// Lower an equalizer property by one.
    pub fn color_decrease(&mut self, color: ColorAdjustment) -> Result<(), PanelError> {
        self.color_by(color, -COLOR_STEP)
    }

    /// Reset an equalizer property to zero.
    pub fn color_reset(&mut self, color: ColorAdjustment) -> Result<(), PanelError> {
        self.engine.set(color.property(), 0.into())?;
        self.show(feedback::color(color.label(), 0));
        Ok(())
    }

    fn color_by(&self, color: ColorAdjustment, delta: i64) -> Result<(), PanelError> {
        let property = color.property();
        self.engine.add(property, delta.into())?;
        let value = self.engine.get_property(property)?;
        self.show(feedback::color(color.label(), value));
        Ok(())
    }

    // --- delays ---

    /// Delay a track by one step.
    pub fn delay_increase(&mut self, track: DelayTrack) -> Result<(), PanelError> {
        self.delay_by(track, DELAY_STEP)
    }

    /// Advance a track by one step.
    pub fn delay_decrease(&mut self, track: DelayTrack) -> Result<(), PanelError> {
        self.delay_by(track, -DELAY_STEP)
    }

    /// Remove a track's delay.
    pub fn delay_reset(&mut self, track: DelayTrack) -> Result<(), PanelError> {
        self.engine.set(track.property(), 0.into())?;
        self.show(feedback::delay_reset(track.label()));
        Ok(())
    }

    fn delay_by(&self, track: DelayTrack, delta: f64) -> Result<(), PanelError> {
        self.engine.add(track.property(), delta.into())?;
        let seconds = self.read_f64(track.property())?;
        self.show(feedback::delay(track.label(), seconds));
        Ok(())
    }

    // --- playback speed ---

    /// Play faster by one step.
    pub fn speed_increase(&mut self) -> Result<(), PanelError> {
        self.speed_by(SPEED_STEP)
    }

    /// Play slower by one step.
    pub fn speed_decrease(&mut self) -> Result<(), PanelError> {
        self.speed_by(-SPEED_STEP)
    }

    /// Return to normal speed.
    pub fn speed_reset(&mut self) -> Result<(), PanelError> {
        self.engine.set(SPEED, 1.0.into())?;
        self.show("Speed: 1.0x".to_string());
        Ok(())
    }

    fn speed_by(&self, delta: f64) -> Result<(), PanelError> {
        self.engine.add(SPEED, delta.into())?;
        let value = self.read_f64(SPEED)?;
        self.show(feedback::speed(value));
        Ok(())
    }

    fn read_f64(&self, name: &str) -> Result<f64, PanelError> {
        Ok(self.engine.get_property(name)?.as_f64(name)?)
    }

    fn show(&self, message: String) {
        self.display.show_text(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{EngineCall, MockEngine, RecordingDisplay};

    fn panel_with(engine: &Arc<MockEngine>, display: &Arc<RecordingDisplay>) -> OptionsPanel {
        OptionsPanel::new(
            engine.clone(),
            display.clone(),
            Arc::new(PanelSettings::default()),
            AspectCycle::new(["-1", "16:9", "4:3"]).unwrap(),
        )
    }

    fn setup() -> (Arc<MockEngine>, Arc<RecordingDisplay>, OptionsPanel) {
        let engine = Arc::new(MockEngine::new());
        let display = Arc::new(RecordingDisplay::new());
        let panel = panel_with(&engine, &display);
        (engine, display, panel)
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_aspect_cycle_scenario() {
        let (engine, display, mut panel) = setup();

        panel.aspect_next().unwrap();
        assert_eq!(engine.last_command(), Some(args(&["set", ASPECT_OVERRIDE, "16:9"])));
        assert_eq!(display.last().as_deref(), Some("Aspect Ratio: 16:9"));

        panel.aspect_next().unwrap();
        assert_eq!(engine.last_command(), Some(args(&["set", ASPECT_OVERRIDE, "4:3"])));

        panel.aspect_next().unwrap();
        assert_eq!(engine.last_command(), Some(args(&["set", ASPECT_OVERRIDE, "-1"])));
        assert_eq!(display.last().as_deref(), Some("Aspect Ratio: Original"));
    }

    #[test]
    fn test_aspect_previous_wraps_and_reset_returns_to_original() {
        let (engine, display, mut panel) = setup();

        panel.aspect_previous().unwrap();
        assert_eq!(panel.aspect().index(), 2);
        assert_eq!(engine.last_command(), Some(args(&["set", ASPECT_OVERRIDE, "4:3"])));

        panel.aspect_reset().unwrap();
        assert_eq!(panel.aspect().index(), 0);
        assert_eq!(engine.last_command(), Some(args(&["set", ASPECT_OVERRIDE, "-1"])));
        assert_eq!(display.last().as_deref(), Some("Aspect Ratio: Original"));
    }

    #[test]
    fn test_rotation_round_trip_stays_in_range() {
        let (engine, display, mut panel) = setup();

        for start in [0, 90, 180, 270] {
            engine.set_property(ROTATE, PropertyValue::Int(start));

            panel.rotate_right().unwrap();
            let after_right = engine.property(ROTATE).unwrap().as_i64(ROTATE).unwrap();
            assert!((0..360).contains(&after_right));
            assert_eq!(after_right, (start + 90) % 360);

            panel.rotate_left().unwrap();
            assert_eq!(engine.property(ROTATE), Some(PropertyValue::Int(start)));
            assert_eq!(display.last(), Some(format!("Rotate: {start}°")));
        }
    }

    #[test]
    fn test_rotate_left_from_zero_normalizes() {
        let (engine, display, mut panel) = setup();

        panel.rotate_left().unwrap();
        assert_eq!(engine.last_command(), Some(args(&["set", ROTATE, "270"])));
        assert_eq!(display.last().as_deref(), Some("Rotate: 270°"));

        panel.rotate_reset().unwrap();
        assert_eq!(display.last().as_deref(), Some("Rotate: 0°"));
    }

    #[test]
    fn test_reset_all_issues_twelve_async_commands() {
        let (engine, display, mut panel) = setup();
        panel.zoom_increase().unwrap();
        panel.flip_horizontal().unwrap();
        engine.clear_calls();
        let shown = display.messages().len();

        panel.reset_all().unwrap();

        let expected = vec![
            args(&["set", "video-aspect-override", "-1"]),
            args(&["set", "video-rotate", "0"]),
            args(&["vf", "remove", "@hflip"]),
            args(&["vf", "remove", "@vflip"]),
            args(&["set", "video-zoom", "0"]),
            args(&["set", "contrast", "0"]),
            args(&["set", "brightness", "0"]),
            args(&["set", "gamma", "0"]),
            args(&["set", "saturation", "0"]),
            args(&["set", "sub-delay", "0"]),
            args(&["set", "audio-delay", "0"]),
            args(&["set", "speed", "1"]),
        ];
        let calls = engine.calls();
        assert_eq!(calls.len(), 12);
        assert!(calls.iter().all(|c| matches!(c, EngineCall::CommandAsync(_))));
        let issued: Vec<Vec<String>> = calls.iter().map(EngineCall::rendered).collect();
        assert_eq!(issued, expected);

        assert_eq!(display.messages().len(), shown, "reset all shows no feedback");
        assert!(engine.active_filters().is_empty());
        assert_eq!(engine.property(SPEED), Some(PropertyValue::Double(1.0)));
    }

    #[test]
    fn test_reset_all_keeps_aspect_position() {
        let (_engine, _display, mut panel) = setup();
        panel.aspect_next().unwrap();
        panel.reset_all().unwrap();
        assert_eq!(panel.aspect().index(), 1);
    }

    #[test]
    fn test_sub_delay_down_scenario() {
        let (engine, display, mut panel) = setup();
        engine.set_property("sub-delay", PropertyValue::Double(0.2));

        panel.delay_decrease(DelayTrack::Subtitle).unwrap();

        assert!(engine.calls().contains(&EngineCall::Command(vec![
            "add".into(),
            "sub-delay".into(),
            PropertyValue::Double(-0.1),
        ])));
        assert_eq!(display.last().as_deref(), Some("Subtitle Delay: 100 ms"));
    }

    #[test]
    fn test_audio_delay_up_and_reset() {
        let (_engine, display, mut panel) = setup();

        panel.delay_increase(DelayTrack::Audio).unwrap();
        assert_eq!(display.last().as_deref(), Some("Audio Delay: 100 ms"));
        panel.delay_decrease(DelayTrack::Audio).unwrap();
        panel.delay_decrease(DelayTrack::Audio).unwrap();
        assert_eq!(display.last().as_deref(), Some("Audio Delay: -100 ms"));

        panel.delay_reset(DelayTrack::Audio).unwrap();
        assert_eq!(display.last().as_deref(), Some("Audio Delay: 0ms"));
    }

    #[test]
    fn test_flip_toggles_and_reset_is_idempotent() {
        let (engine, display, mut panel) = setup();

        panel.flip_reset().unwrap();
        assert_eq!(display.last().as_deref(), Some("Flip: Reset"));
        assert!(engine.active_filters().is_empty());

        panel.flip_horizontal().unwrap();
        panel.flip_vertical().unwrap();
        assert_eq!(engine.active_filters(), vec!["@hflip", "@vflip"]);
        assert_eq!(display.last().as_deref(), Some("Flip: Vertical"));

        panel.flip_horizontal().unwrap();
        assert_eq!(engine.active_filters(), vec!["@vflip"]);

        panel.flip_reset().unwrap();
        panel.flip_reset().unwrap();
        assert!(engine.active_filters().is_empty());
    }

    #[test]
    fn test_zoom_and_speed_read_back() {
        let (_engine, display, mut panel) = setup();

        panel.zoom_increase().unwrap();
        panel.zoom_increase().unwrap();
        panel.zoom_increase().unwrap();
        assert_eq!(display.last().as_deref(), Some("Zoom: 0.3x"));
        panel.zoom_reset().unwrap();
        assert_eq!(display.last().as_deref(), Some("Zoom: 0x"));

        panel.speed_decrease().unwrap();
        assert_eq!(display.last().as_deref(), Some("Speed: 0.9x"));
        panel.speed_increase().unwrap();
        panel.speed_increase().unwrap();
        assert_eq!(display.last().as_deref(), Some("Speed: 1.1x"));
        panel.speed_reset().unwrap();
        assert_eq!(display.last().as_deref(), Some("Speed: 1.0x"));
    }

    #[test]
    fn test_color_adjustments() {
        let (engine, display, mut panel) = setup();

        for color in ColorAdjustment::ALL {
            panel.color_increase(color).unwrap();
            panel.color_increase(color).unwrap();
            assert_eq!(display.last(), Some(format!("{}: 2", color.label())));

            panel.color_decrease(color).unwrap();
            assert_eq!(display.last(), Some(format!("{}: 1", color.label())));

            panel.color_reset(color).unwrap();
            assert_eq!(display.last(), Some(format!("{}: 0", color.label())));
            assert_eq!(engine.property(color.property()), Some(PropertyValue::Int(0)));
        }
    }

    #[test]
    fn test_feedback_reflects_engine_state() {
        let (engine, display, mut panel) = setup();
        engine.set_property("gamma", PropertyValue::Int(-7));

        panel.color_increase(ColorAdjustment::Gamma).unwrap();
        assert_eq!(display.last().as_deref(), Some("Gamma: -6"));
    }

    #[test]
    fn test_fractional_equalizer_value_is_reported() {
        let (engine, display, mut panel) = setup();
        engine.set_property("contrast", PropertyValue::Double(2.5));

        panel.color_increase(ColorAdjustment::Contrast).unwrap();
        assert_eq!(engine.property("contrast"), Some(PropertyValue::Double(3.5)));
        assert_eq!(display.last().as_deref(), Some("Contrast: 3.5"));

        panel.color_decrease(ColorAdjustment::Contrast).unwrap();
        panel.color_decrease(ColorAdjustment::Contrast).unwrap();
        assert_eq!(display.last().as_deref(), Some("Contrast: 1.5"));
    }

    #[test]
    fn test_gate() {
        assert!(!controls_sensitive(true, "nvdec"));
        assert!(controls_sensitive(true, "nvdec-copy"));
        assert!(controls_sensitive(false, "nvdec"));
        assert!(controls_sensitive(false, ""));
        assert!(!controls_sensitive(true, ""));
    }

    #[test]
    fn test_activate_reads_preference_and_decoder() {
        let engine = Arc::new(MockEngine::new());
        let display = Arc::new(RecordingDisplay::new());

        let mut panel = panel_with(&engine, &display);
        assert!(panel.is_sensitive());

        engine.set_decode_mode(Some("vaapi"));
        assert!(!panel.activate().unwrap());
        assert!(!panel.is_sensitive());

        engine.set_decode_mode(Some("vaapi-copy"));
        assert!(panel.activate().unwrap());

        let settings = PanelSettings {
            hwdec: false,
            ..PanelSettings::default()
        };
        let mut panel = OptionsPanel::from_settings(engine.clone(), display, settings).unwrap();
        engine.set_decode_mode(Some("vaapi"));
        assert!(panel.activate().unwrap());
    }

    #[test]
    fn test_activate_without_decoder_uses_empty_mode() {
        let (engine, _display, mut panel) = setup();
        engine.set_decode_mode(None);
        assert!(!panel.activate().unwrap());
    }

    #[test]
    fn test_engine_errors_propagate_without_feedback() {
        let (engine, display, mut panel) = setup();
        engine.set_property(ROTATE, PropertyValue::Text("no".into()));

        let result = panel.rotate_right();
        assert!(matches!(result, Err(PanelError::Engine(_))));
        assert!(display.messages().is_empty());
    }

    #[test]
    fn test_trigger_dispatches_by_id() {
        let (_engine, display, mut panel) = setup();

        panel.trigger_id("speed-decrease").unwrap();
        assert_eq!(display.last().as_deref(), Some("Speed: 0.9x"));

        assert!(matches!(
            panel.trigger_id("speed-warp"),
            Err(PanelError::UnknownAction(id)) if id == "speed-warp"
        ));
    }
}
