//! Transient on-screen feedback.

/// Trait for surfaces that show short, auto-dismissing status messages.
///
/// Delivery is best-effort: implementations log failures instead of
/// returning them.
pub trait StatusDisplay: Send + Sync {
    /// Show `message` for the display's own timeout.
    fn show_text(&self, message: &str);
}
