use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use cine_options_core::{
    MpvIpcEngine, OptionsPanel, PanelAction, PanelError, PanelSettings, StatusDisplay,
};
use iced::widget::{Column, Row, button, column, container, text};
use iced::{Element, Task, Theme};
use log::{error, info};

const DEFAULT_SOCKET: &str = "/tmp/mpvsocket";
const SOCKET_ENV: &str = "CINE_MPV_SOCKET";

/// Button rows: group label, then (button label, action) triples.
const GROUPS: &[(&str, [(&str, PanelAction); 3])] = &[
    (
        "Aspect Ratio",
        [
            ("Previous", PanelAction::AspectPrevious),
            ("Next", PanelAction::AspectNext),
            ("Reset", PanelAction::AspectReset),
        ],
    ),
    (
        "Rotate",
        [
            ("Left", PanelAction::RotateLeft),
            ("Right", PanelAction::RotateRight),
            ("Reset", PanelAction::RotateReset),
        ],
    ),
    (
        "Flip",
        [
            ("Horizontal", PanelAction::FlipHorizontal),
            ("Vertical", PanelAction::FlipVertical),
            ("Reset", PanelAction::FlipReset),
        ],
    ),
    (
        "Zoom",
        [
            ("-", PanelAction::ZoomDecrease),
            ("+", PanelAction::ZoomIncrease),
            ("Reset", PanelAction::ZoomReset),
        ],
    ),
    (
        "Contrast",
        [
            ("-", PanelAction::ContrastDecrease),
            ("+", PanelAction::ContrastIncrease),
            ("Reset", PanelAction::ContrastReset),
        ],
    ),
    (
        "Brightness",
        [
            ("-", PanelAction::BrightnessDecrease),
            ("+", PanelAction::BrightnessIncrease),
            ("Reset", PanelAction::BrightnessReset),
        ],
    ),
    (
        "Gamma",
        [
            ("-", PanelAction::GammaDecrease),
            ("+", PanelAction::GammaIncrease),
            ("Reset", PanelAction::GammaReset),
        ],
    ),
    (
        "Saturation",
        [
            ("-", PanelAction::SaturationDecrease),
            ("+", PanelAction::SaturationIncrease),
            ("Reset", PanelAction::SaturationReset),
        ],
    ),
    (
        "Subtitle Delay",
        [
            ("-", PanelAction::SubDelayDown),
            ("+", PanelAction::SubDelayUp),
            ("Reset", PanelAction::SubDelayReset),
        ],
    ),
    (
        "Audio Delay",
        [
            ("-", PanelAction::AudioDelayDown),
            ("+", PanelAction::AudioDelayUp),
            ("Reset", PanelAction::AudioDelayReset),
        ],
    ),
    (
        "Speed",
        [
            ("-", PanelAction::SpeedDecrease),
            ("+", PanelAction::SpeedIncrease),
            ("Reset", PanelAction::SpeedReset),
        ],
    ),
];

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(CineOptionsApp::new, CineOptionsApp::update, CineOptionsApp::view)
        .title("Cine - Video Options")
        .theme(CineOptionsApp::theme)
        .run()
}

/// Forwards feedback to mpv's OSD and keeps the last message for the window.
struct WindowOsd {
    inner: Arc<dyn StatusDisplay>,
    last: Mutex<Option<String>>,
}

impl WindowOsd {
    fn last(&self) -> Option<String> {
        self.last.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl StatusDisplay for WindowOsd {
    fn show_text(&self, message: &str) {
        self.inner.show_text(message);
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
    }
}

struct CineOptionsApp {
    panel: Option<OptionsPanel>,
    osd: Option<Arc<WindowOsd>>,
    error_message: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Action(PanelAction),
    Activate,
}

impl CineOptionsApp {
    fn new() -> Self {
        let mut app = Self {
            panel: None,
            osd: None,
            error_message: None,
        };

        match Self::connect() {
            Ok((mut panel, osd)) => {
                if let Err(e) = panel.activate() {
                    error!("gate evaluation failed: {}", e);
                    app.error_message = Some(format!("Decoder check error: {}", e));
                }
                app.panel = Some(panel);
                app.osd = Some(osd);
            }
            Err(e) => {
                error!("failed to initialize: {}", e);
                app.error_message = Some(format!("Failed to initialize: {}", e));
            }
        }

        app
    }

    fn connect() -> Result<(OptionsPanel, Arc<WindowOsd>), PanelError> {
        let settings = match settings_path() {
            Some(path) => PanelSettings::load(path)?,
            None => PanelSettings::default(),
        };

        let socket = socket_path();
        info!("connecting to mpv at {}", socket.display());
        let mpv = Arc::new(MpvIpcEngine::connect(&socket)?);

        let osd = Arc::new(WindowOsd {
            inner: mpv.clone(),
            last: Mutex::new(None),
        });
        let panel = OptionsPanel::from_settings(mpv, osd.clone(), settings)?;
        Ok((panel, osd))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.error_message = None;

        match message {
            Message::Action(action) => {
                if let Some(ref mut panel) = self.panel {
                    if let Err(e) = panel.trigger(action) {
                        error!("{} failed: {}", action, e);
                        self.error_message = Some(format!("{} error: {}", action, e));
                    }
                }
            }

            Message::Activate => {
                if let Some(ref mut panel) = self.panel {
                    if let Err(e) = panel.activate() {
                        error!("gate evaluation failed: {}", e);
                        self.error_message = Some(format!("Decoder check error: {}", e));
                    }
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let title = text("Video Options").size(24);

        let connected = self.panel.is_some();
        let sensitive = self.panel.as_ref().is_some_and(OptionsPanel::is_sensitive);

        // Error or last feedback message
        let status = match (&self.error_message, &self.osd) {
            (Some(msg), _) => text(msg.clone()).size(14),
            (None, Some(osd)) => text(osd.last().unwrap_or_default()).size(14),
            (None, None) => text("").size(14),
        };

        let rows: Vec<Element<'_, Message>> = GROUPS
            .iter()
            .map(|(label, buttons)| {
                let enabled = connected && (sensitive || !buttons[0].1.is_gated());
                let mut items: Vec<Element<'_, Message>> =
                    vec![text(*label).size(16).width(140.0).into()];
                items.extend(
                    buttons
                        .iter()
                        .map(|(name, action)| action_button(name, *action, enabled)),
                );
                Row::with_children(items).spacing(10).into()
            })
            .collect();

        let gate_hint = if connected && !sensitive {
            text("Flip needs hardware decoding off or a -copy decoder").size(12)
        } else {
            text("").size(12)
        };

        let footer = Row::with_children(vec![
            action_button("Reset All", PanelAction::ResetAll, connected),
            button(text("Check Decoder"))
                .on_press(Message::Activate)
                .into(),
        ])
        .spacing(10);

        let content = column![
            title,
            status,
            Column::with_children(rows).spacing(8),
            gate_hint,
            footer,
        ]
        .spacing(15)
        .padding(20);

        container(content).into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn action_button(label: &str, action: PanelAction, enabled: bool) -> Element<'_, Message> {
    let btn = button(text(label));
    if enabled {
        btn.on_press(Message::Action(action)).into()
    } else {
        btn.into()
    }
}

fn socket_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SOCKET_ENV).ok())
        .unwrap_or_else(|| DEFAULT_SOCKET.to_string())
        .into()
}

fn settings_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("cine-options")
        .get_config_home()
        .map(|dir| dir.join("settings.json"))
}
