//! Video adjustment panel for mpv-based players.
//!
//! This crate provides the logic behind a player's "video options" menu:
//! aspect ratio, rotation, flip, zoom, picture equalizer, subtitle/audio
//! delay and playback speed. Each action is forwarded to a playback engine
//! and the resulting value is reported as a short on-screen message.
//!
//! The engine and the message surface are traits, so the panel runs against
//! a live mpv ([`MpvIpcEngine`], unix only) or against [`MockEngine`] in tests.
//!
//! # Example
//!
//! ```no_run
//! use cine_options_core::{MpvIpcEngine, OptionsPanel, PanelAction, PanelSettings};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // mpv started with --input-ipc-server=/tmp/mpvsocket
//!     let mpv = Arc::new(MpvIpcEngine::connect("/tmp/mpvsocket")?);
//!     let settings = PanelSettings::load("settings.json")?;
//!
//!     // mpv's OSD doubles as the status display
//!     let mut panel = OptionsPanel::from_settings(mpv.clone(), mpv, settings)?;
//!
//!     // Check whether filters can be applied with the current decoder
//!     if panel.activate()? {
//!         panel.trigger(PanelAction::FlipHorizontal)?;
//!     }
//!
//!     panel.trigger(PanelAction::AspectNext)?;
//!     panel.trigger_id("speed-increase")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockEngine`] and [`RecordingDisplay`] to test code without mpv:
//!
//! ```
//! use cine_options_core::{MockEngine, OptionsPanel, PanelAction, PanelSettings, RecordingDisplay};
//! use std::sync::Arc;
//!
//! let engine = Arc::new(MockEngine::new());
//! let display = Arc::new(RecordingDisplay::new());
//! let mut panel =
//!     OptionsPanel::from_settings(engine, display.clone(), PanelSettings::default()).unwrap();
//!
//! panel.trigger(PanelAction::AspectNext).unwrap();
//! assert_eq!(display.last().as_deref(), Some("Aspect Ratio: 16:9"));
//! ```

#![warn(missing_docs)]

mod action;
mod aspect;
mod display;
mod engine;
mod error;
mod feedback;
mod mock;
#[cfg(unix)]
mod mpv;
mod panel;
mod settings;

// Re-export public API
pub use action::{ActionRegistry, Handler, PanelAction};
pub use aspect::{AspectCycle, DEFAULT_ASPECT_RATIOS, ORIGINAL_ASPECT};
pub use display::StatusDisplay;
pub use engine::{HWDEC_CURRENT, PlaybackEngine, PropertyValue};
pub use error::{EngineError, PanelError, SettingsError};
pub use mock::{EngineCall, MockEngine, RecordingDisplay};
#[cfg(unix)]
pub use mpv::{MpvIpcEngine, REPLY_TIMEOUT};
pub use panel::{ColorAdjustment, DelayTrack, OptionsPanel, controls_sensitive};
pub use settings::{HWDEC_KEY, PanelSettings, Preferences};
