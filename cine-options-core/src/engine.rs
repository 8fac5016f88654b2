//! Playback engine capability.

use crate::error::EngineError;
use std::fmt;

/// Property read while the active decoder is queried.
pub const HWDEC_CURRENT: &str = "hwdec-current";

/// A typed value crossing the engine boundary.
///
/// Command arguments are rendered with [`Display`](fmt::Display), which is
/// the textual form the engine parses for option values.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// `yes`/`no` flag.
    Flag(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Double(f64),
    /// String value (also used for command names and filter specs).
    Text(String),
}

impl PropertyValue {
    /// Read the value as a float, accepting integer properties.
    pub fn as_f64(&self, name: &str) -> Result<f64, EngineError> {
        match self {
            Self::Double(v) => Ok(*v),
            Self::Int(v) => Ok(*v as f64),
            other => Err(other.type_error(name, "number")),
        }
    }

    /// Read the value as an integer.
    ///
    /// Doubles with no fractional part are accepted, since some engines
    /// report integral properties as floats.
    pub fn as_i64(&self, name: &str) -> Result<i64, EngineError> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Double(v) if v.fract() == 0.0 => Ok(*v as i64),
            other => Err(other.type_error(name, "integer")),
        }
    }

    /// Borrow the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn type_error(&self, name: &str, expected: &'static str) -> EngineError {
        EngineError::PropertyType {
            name: name.to_string(),
            expected,
            found: self.to_string(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Trait for media engines the adjustment panel drives.
///
/// This allows for mock implementations in tests.
pub trait PlaybackEngine: Send + Sync {
    /// Run a command and wait until the engine has applied it.
    fn command(&self, args: &[PropertyValue]) -> Result<(), EngineError>;

    /// Submit a command without waiting for it to be applied.
    ///
    /// An error only means the command could not be submitted.
    fn command_async(&self, args: &[PropertyValue]) -> Result<(), EngineError>;

    /// Read the current value of a property.
    fn get_property(&self, name: &str) -> Result<PropertyValue, EngineError>;

    /// Assign a property (`set <name> <value>`).
    fn set(&self, name: &str, value: PropertyValue) -> Result<(), EngineError> {
        self.command(&["set".into(), name.into(), value])
    }

    /// Adjust a numeric property relative to its current value (`add <name> <delta>`).
    fn add(&self, name: &str, delta: PropertyValue) -> Result<(), EngineError> {
        self.command(&["add".into(), name.into(), delta])
    }

    /// The decoder currently in use, or `None` when the engine has none
    /// (nothing loaded yet).
    fn decode_mode(&self) -> Result<Option<String>, EngineError> {
        match self.get_property(HWDEC_CURRENT) {
            Ok(value) => Ok(Some(value.to_string())),
            Err(e) if e.is_property_unavailable() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
