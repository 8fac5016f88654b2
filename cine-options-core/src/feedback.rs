//! Status text shown after each panel action.

use crate::aspect::AspectCycle;
use std::fmt;

pub(crate) fn aspect(token: &str) -> String {
    format!("Aspect Ratio: {}", AspectCycle::label(token))
}

pub(crate) fn rotation(degrees: i64) -> String {
    format!("Rotate: {degrees}°")
}

pub(crate) fn zoom(value: f64) -> String {
    format!("Zoom: {value:.1}x")
}

pub(crate) fn color(name: &str, value: impl fmt::Display) -> String {
    format!("{name}: {value}")
}

pub(crate) fn speed(value: f64) -> String {
    format!("Speed: {value:.1}x")
}

pub(crate) fn delay(name: &str, seconds: f64) -> String {
    format!("{name}: {} ms", seconds_to_millis(seconds))
}

/// Reset text for delays omits the space before the unit.
pub(crate) fn delay_reset(name: &str) -> String {
    format!("{name}: 0ms")
}

/// Seconds to whole milliseconds, ties rounding to even.
pub(crate) fn seconds_to_millis(seconds: f64) -> i64 {
    (seconds * 1000.0).round_ties_even() as i64
}
