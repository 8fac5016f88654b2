//! Error types for the adjustment panel and its playback engines.

/// Errors reported by a [`PlaybackEngine`](crate::PlaybackEngine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The transport to the engine failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A request or reply could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine closed the connection before replying.
    #[error("Engine disconnected")]
    Disconnected,

    /// The engine rejected a command.
    #[error("Command '{command}' failed: {message}")]
    Mpv {
        /// The command name (first argument).
        command: String,
        /// The engine's error string.
        message: String,
    },

    /// A property read returned a value of an unexpected type.
    #[error("Property '{name}' has unexpected type (expected {expected}, got {found})")]
    PropertyType {
        /// The property name.
        name: String,
        /// The expected type.
        expected: &'static str,
        /// The received value, rendered.
        found: String,
    },
}

impl EngineError {
    /// Whether the engine reported the property as currently unavailable
    /// (e.g. `hwdec-current` while nothing is playing).
    pub fn is_property_unavailable(&self) -> bool {
        matches!(self, Self::Mpv { message, .. } if message == "property unavailable")
    }
}

/// Errors from loading or saving [`PanelSettings`](crate::PanelSettings).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for the settings schema.
    #[error("Malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when driving the adjustment panel.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The playback engine failed to apply or report a value.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// The aspect ratio list was empty.
    #[error("Aspect ratio list must not be empty")]
    EmptyAspectRatios,

    /// An action identifier did not match any panel action.
    #[error("Unknown panel action '{0}'")]
    UnknownAction(String),

    /// Settings could not be loaded.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}
