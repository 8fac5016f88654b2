//! Panel actions and their handler bindings.

use crate::error::PanelError;
use crate::panel::{ColorAdjustment, DelayTrack, OptionsPanel};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A button on the adjustment panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PanelAction {
    ResetAll,

    AspectNext,
    AspectPrevious,
    AspectReset,

    RotateRight,
    RotateLeft,
    RotateReset,

    FlipHorizontal,
    FlipVertical,
    FlipReset,

    ZoomIncrease,
    ZoomDecrease,
    ZoomReset,

    ContrastIncrease,
    ContrastDecrease,
    ContrastReset,
    BrightnessIncrease,
    BrightnessDecrease,
    BrightnessReset,
    GammaIncrease,
    GammaDecrease,
    GammaReset,
    SaturationIncrease,
    SaturationDecrease,
    SaturationReset,

    SubDelayUp,
    SubDelayDown,
    SubDelayReset,
    AudioDelayUp,
    AudioDelayDown,
    AudioDelayReset,

    SpeedIncrease,
    SpeedDecrease,
    SpeedReset,
}

impl PanelAction {
    /// Every action, in panel order.
    pub const ALL: [Self; 34] = [
        Self::ResetAll,
        Self::AspectNext,
        Self::AspectPrevious,
        Self::AspectReset,
        Self::RotateRight,
        Self::RotateLeft,
        Self::RotateReset,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::FlipReset,
        Self::ZoomIncrease,
        Self::ZoomDecrease,
        Self::ZoomReset,
        Self::ContrastIncrease,
        Self::ContrastDecrease,
        Self::ContrastReset,
        Self::BrightnessIncrease,
        Self::BrightnessDecrease,
        Self::BrightnessReset,
        Self::GammaIncrease,
        Self::GammaDecrease,
        Self::GammaReset,
        Self::SaturationIncrease,
        Self::SaturationDecrease,
        Self::SaturationReset,
        Self::SubDelayUp,
        Self::SubDelayDown,
        Self::SubDelayReset,
        Self::AudioDelayUp,
        Self::AudioDelayDown,
        Self::AudioDelayReset,
        Self::SpeedIncrease,
        Self::SpeedDecrease,
        Self::SpeedReset,
    ];

    /// Stable identifier, e.g. `"aspect-next"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::ResetAll => "reset-all",
            Self::AspectNext => "aspect-next",
            Self::AspectPrevious => "aspect-previous",
            Self::AspectReset => "aspect-reset",
            Self::RotateRight => "rotate-right",
            Self::RotateLeft => "rotate-left",
            Self::RotateReset => "rotate-reset",
            Self::FlipHorizontal => "flip-horizontal",
            Self::FlipVertical => "flip-vertical",
            Self::FlipReset => "flip-reset",
            Self::ZoomIncrease => "zoom-increase",
            Self::ZoomDecrease => "zoom-decrease",
            Self::ZoomReset => "zoom-reset",
            Self::ContrastIncrease => "contrast-increase",
            Self::ContrastDecrease => "contrast-decrease",
            Self::ContrastReset => "contrast-reset",
            Self::BrightnessIncrease => "brightness-increase",
            Self::BrightnessDecrease => "brightness-decrease",
            Self::BrightnessReset => "brightness-reset",
            Self::GammaIncrease => "gamma-increase",
            Self::GammaDecrease => "gamma-decrease",
            Self::GammaReset => "gamma-reset",
            Self::SaturationIncrease => "saturation-increase",
            Self::SaturationDecrease => "saturation-decrease",
            Self::SaturationReset => "saturation-reset",
            Self::SubDelayUp => "sub-delay-up",
            Self::SubDelayDown => "sub-delay-down",
            Self::SubDelayReset => "sub-delay-reset",
            Self::AudioDelayUp => "audio-delay-up",
            Self::AudioDelayDown => "audio-delay-down",
            Self::AudioDelayReset => "audio-delay-reset",
            Self::SpeedIncrease => "speed-increase",
            Self::SpeedDecrease => "speed-decrease",
            Self::SpeedReset => "speed-reset",
        }
    }

    /// Whether the action drives the video filter chain, which the
    /// hardware-decode gate disables.
    pub fn is_gated(self) -> bool {
        matches!(self, Self::FlipHorizontal | Self::FlipVertical | Self::FlipReset)
    }
}

impl fmt::Display for PanelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PanelAction {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| PanelError::UnknownAction(s.to_string()))
    }
}

/// A panel operation bound to an action.
pub type Handler = fn(&mut OptionsPanel) -> Result<(), PanelError>;

/// Mapping from every [`PanelAction`] to the panel operation it runs.
pub struct ActionRegistry {
    handlers: HashMap<PanelAction, Handler>,
}

impl ActionRegistry {
    /// Build the registry with every action bound.
    pub fn new() -> Self {
        let mut handlers: HashMap<PanelAction, Handler> = HashMap::new();

        macro_rules! bind {
            ($action:ident, $handler:expr) => {{
                handlers.insert(PanelAction::$action, $handler);
            }};
        }

        bind!(ResetAll, OptionsPanel::reset_all);

        bind!(AspectNext, OptionsPanel::aspect_next);
        bind!(AspectPrevious, OptionsPanel::aspect_previous);
        bind!(AspectReset, OptionsPanel::aspect_reset);

        bind!(RotateRight, OptionsPanel::rotate_right);
        bind!(RotateLeft, OptionsPanel::rotate_left);
        bind!(RotateReset, OptionsPanel::rotate_reset);

        bind!(FlipHorizontal, OptionsPanel::flip_horizontal);
        bind!(FlipVertical, OptionsPanel::flip_vertical);
        bind!(FlipReset, OptionsPanel::flip_reset);

        bind!(ZoomIncrease, OptionsPanel::zoom_increase);
        bind!(ZoomDecrease, OptionsPanel::zoom_decrease);
        bind!(ZoomReset, OptionsPanel::zoom_reset);

        bind!(ContrastIncrease, |p| p.color_increase(ColorAdjustment::Contrast));
        bind!(ContrastDecrease, |p| p.color_decrease(ColorAdjustment::Contrast));
        bind!(ContrastReset, |p| p.color_reset(ColorAdjustment::Contrast));
        bind!(BrightnessIncrease, |p| p.color_increase(ColorAdjustment::Brightness));
        bind!(BrightnessDecrease, |p| p.color_decrease(ColorAdjustment::Brightness));
        bind!(BrightnessReset, |p| p.color_reset(ColorAdjustment::Brightness));
        bind!(GammaIncrease, |p| p.color_increase(ColorAdjustment::Gamma));
        bind!(GammaDecrease, |p| p.color_decrease(ColorAdjustment::Gamma));
        bind!(GammaReset, |p| p.color_reset(ColorAdjustment::Gamma));
        bind!(SaturationIncrease, |p| p.color_increase(ColorAdjustment::Saturation));
        bind!(SaturationDecrease, |p| p.color_decrease(ColorAdjustment::Saturation));
        bind!(SaturationReset, |p| p.color_reset(ColorAdjustment::Saturation));

        bind!(SubDelayUp, |p| p.delay_increase(DelayTrack::Subtitle));
        bind!(SubDelayDown, |p| p.delay_decrease(DelayTrack::Subtitle));
        bind!(SubDelayReset, |p| p.delay_reset(DelayTrack::Subtitle));
        bind!(AudioDelayUp, |p| p.delay_increase(DelayTrack::Audio));
        bind!(AudioDelayDown, |p| p.delay_decrease(DelayTrack::Audio));
        bind!(AudioDelayReset, |p| p.delay_reset(DelayTrack::Audio));

        bind!(SpeedIncrease, OptionsPanel::speed_increase);
        bind!(SpeedDecrease, OptionsPanel::speed_decrease);
        bind!(SpeedReset, OptionsPanel::speed_reset);

        Self { handlers }
    }

    /// The handler bound to `action`.
    pub fn handler(&self, action: PanelAction) -> Option<Handler> {
        self.handlers.get(&action).copied()
    }

    /// Number of bound actions.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no action is bound.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
