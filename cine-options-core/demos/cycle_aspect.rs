//! Example: Step a running mpv through every aspect ratio.
//!
//! Start mpv with `--input-ipc-server=/tmp/mpvsocket`, then run with:
//! `cargo run --example cycle_aspect -- /tmp/mpvsocket`

use cine_options_core::{MpvIpcEngine, OptionsPanel, PanelAction, PanelError, PanelSettings};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<(), PanelError> {
    // Initialize logging (optional)
    env_logger::init();

    let socket = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/mpvsocket".to_string());

    // The OSD of the same mpv shows the feedback
    let mpv = Arc::new(MpvIpcEngine::connect(&socket)?);
    let mut panel = OptionsPanel::from_settings(mpv.clone(), mpv, PanelSettings::default())?;

    println!("Filters available: {}", panel.activate()?);

    for _ in 0..panel.aspect().len() {
        panel.trigger(PanelAction::AspectNext)?;
        println!("Aspect: {}", panel.aspect().current());
        std::thread::sleep(Duration::from_secs(1));
    }

    // Leave the player as we found it
    panel.trigger(PanelAction::ResetAll)?;

    Ok(())
}
