//! Mock engine and display for testing.

use crate::display::StatusDisplay;
use crate::engine::{HWDEC_CURRENT, PlaybackEngine, PropertyValue};
use crate::error::EngineError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// A call received by [`MockEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    /// Synchronous command.
    Command(Vec<PropertyValue>),
    /// Fire-and-forget command.
    CommandAsync(Vec<PropertyValue>),
    /// Property read.
    GetProperty(String),
}

impl EngineCall {
    /// The call's arguments in the textual form the engine receives.
    pub fn rendered(&self) -> Vec<String> {
        match self {
            Self::Command(args) | Self::CommandAsync(args) => {
                args.iter().map(ToString::to_string).collect()
            }
            Self::GetProperty(name) => vec!["get_property".to_string(), name.clone()],
        }
    }
}

#[derive(Debug)]
struct MockState {
    properties: HashMap<String, PropertyValue>,
    filters: Vec<String>,
    decode_mode: Option<String>,
    calls: Vec<EngineCall>,
}

/// An in-memory playback engine for testing.
///
/// Interprets `set`, `add`, `vf toggle` and `vf remove` against a property
/// store seeded with the player's defaults, applies async commands
/// immediately, and records every call.
///
/// # Example
///
/// ```
/// use cine_options_core::{MockEngine, PlaybackEngine, PropertyValue};
///
/// let mock = MockEngine::new();
/// mock.add("video-zoom", 0.5.into()).unwrap();
/// assert_eq!(mock.get_property("video-zoom").unwrap(), PropertyValue::Double(0.5));
/// ```
pub struct MockEngine {
    state: Mutex<MockState>,
}

impl MockEngine {
    /// Create a mock engine with default playback properties and no decoder.
    pub fn new() -> Self {
        let properties = [
            ("video-aspect-override", PropertyValue::Text("-1".into())),
            ("video-rotate", PropertyValue::Int(0)),
            ("video-zoom", PropertyValue::Double(0.0)),
            ("contrast", PropertyValue::Int(0)),
            ("brightness", PropertyValue::Int(0)),
            ("gamma", PropertyValue::Int(0)),
            ("saturation", PropertyValue::Int(0)),
            ("sub-delay", PropertyValue::Double(0.0)),
            ("audio-delay", PropertyValue::Double(0.0)),
            ("speed", PropertyValue::Double(1.0)),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        Self {
            state: Mutex::new(MockState {
                properties,
                filters: Vec::new(),
                decode_mode: None,
                calls: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Overwrite a property without recording a call.
    pub fn set_property(&self, name: &str, value: PropertyValue) {
        self.lock().properties.insert(name.to_string(), value);
    }

    /// Current value of a property, without recording a call.
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.lock().properties.get(name).cloned()
    }

    /// Set the decoder reported as `hwdec-current` (`None`: unavailable).
    pub fn set_decode_mode(&self, mode: Option<&str>) {
        self.lock().decode_mode = mode.map(str::to_string);
    }

    /// Labels of the active video filters, in insertion order.
    pub fn active_filters(&self) -> Vec<String> {
        self.lock().filters.clone()
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.lock().calls.clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// The most recent synchronous command, rendered.
    pub fn last_command(&self) -> Option<Vec<String>> {
        self.lock()
            .calls
            .iter()
            .rev()
            .find(|call| matches!(call, EngineCall::Command(_)))
            .map(EngineCall::rendered)
    }

    fn apply(state: &mut MockState, args: &[PropertyValue]) -> Result<(), EngineError> {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        let words: Vec<&str> = rendered.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["set", name, ..] if args.len() == 3 => {
                state.properties.insert(name.to_string(), args[2].clone());
                Ok(())
            }
            ["add", name, ..] if args.len() == 3 => {
                let current = state
                    .properties
                    .get(*name)
                    .cloned()
                    .unwrap_or(PropertyValue::Int(0));
                let sum = match (&current, &args[2]) {
                    (PropertyValue::Int(a), PropertyValue::Int(b)) => PropertyValue::Int(a + b),
                    (a, b) => PropertyValue::Double(a.as_f64(name)? + b.as_f64(name)?),
                };
                state.properties.insert(name.to_string(), sum);
                Ok(())
            }
            ["vf", "toggle", filter] => {
                let label = filter.split(':').next().unwrap_or(*filter).to_string();
                if let Some(pos) = state.filters.iter().position(|f| *f == label) {
                    state.filters.remove(pos);
                } else {
                    state.filters.push(label);
                }
                Ok(())
            }
            ["vf", "remove", label] => {
                state.filters.retain(|f| f != label);
                Ok(())
            }
            _ => Err(EngineError::Mpv {
                command: rendered.first().cloned().unwrap_or_default(),
                message: "invalid parameter".to_string(),
            }),
        }
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackEngine for MockEngine {
    fn command(&self, args: &[PropertyValue]) -> Result<(), EngineError> {
        let mut state = self.lock();
        state.calls.push(EngineCall::Command(args.to_vec()));
        Self::apply(&mut state, args)
    }

    fn command_async(&self, args: &[PropertyValue]) -> Result<(), EngineError> {
        let mut state = self.lock();
        state.calls.push(EngineCall::CommandAsync(args.to_vec()));
        Self::apply(&mut state, args)
    }

    fn get_property(&self, name: &str) -> Result<PropertyValue, EngineError> {
        let mut state = self.lock();
        state.calls.push(EngineCall::GetProperty(name.to_string()));

        let value = if name == HWDEC_CURRENT {
            state.decode_mode.clone().map(PropertyValue::Text)
        } else {
            state.properties.get(name).cloned()
        };
        value.ok_or_else(|| EngineError::Mpv {
            command: "get_property".to_string(),
            message: "property unavailable".to_string(),
        })
    }
}

/// A status display that keeps every message it is asked to show.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    messages: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    /// Create an empty display.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn show_text(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vf_toggle_and_remove() {
        let mock = MockEngine::new();
        mock.command(&["vf".into(), "toggle".into(), "@hflip:hflip".into()])
            .unwrap();
        assert_eq!(mock.active_filters(), vec!["@hflip"]);

        mock.command(&["vf".into(), "remove".into(), "@vflip".into()])
            .unwrap();
        assert_eq!(mock.active_filters(), vec!["@hflip"]);

        mock.command(&["vf".into(), "toggle".into(), "@hflip:hflip".into()])
            .unwrap();
        assert!(mock.active_filters().is_empty());
    }

    #[test]
    fn test_add_keeps_integer_properties_integral() {
        let mock = MockEngine::new();
        mock.add("brightness", PropertyValue::Int(-1)).unwrap();
        assert_eq!(mock.property("brightness"), Some(PropertyValue::Int(-1)));

        mock.add("speed", PropertyValue::Double(0.5)).unwrap();
        assert_eq!(mock.property("speed"), Some(PropertyValue::Double(1.5)));
    }

    #[test]
    fn test_unavailable_decoder_maps_to_none() {
        let mock = MockEngine::new();
        assert_eq!(mock.decode_mode().unwrap(), None);

        mock.set_decode_mode(Some("nvdec-copy"));
        assert_eq!(mock.decode_mode().unwrap().as_deref(), Some("nvdec-copy"));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let mock = MockEngine::new();
        let err = mock.command(&["frobnicate".into()]).unwrap_err();
        assert!(matches!(err, EngineError::Mpv { ref command, .. } if command == "frobnicate"));
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn test_recording_display() {
        let display = RecordingDisplay::new();
        assert_eq!(display.last(), None);
        display.show_text("Flip: Reset");
        display.show_text("Zoom: 0x");
        assert_eq!(display.messages(), vec!["Flip: Reset", "Zoom: 0x"]);
        assert_eq!(display.last().as_deref(), Some("Zoom: 0x"));
    }
}
