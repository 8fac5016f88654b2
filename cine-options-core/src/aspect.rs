//! Aspect ratio override cycling.

use crate::error::PanelError;

/// Token meaning "no override, use the source aspect ratio".
pub const ORIGINAL_ASPECT: &str = "-1";

/// Aspect ratio tokens offered by default, sentinel first.
pub const DEFAULT_ASPECT_RATIOS: &[&str] =
    &[ORIGINAL_ASPECT, "16:9", "4:3", "2.35:1", "1.85:1", "21:9", "1:1"];

/// Position in a fixed, ordered list of aspect ratio tokens.
///
/// The index always stays within the list: stepping past either end wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectCycle {
    ratios: Vec<String>,
    index: usize,
}

impl AspectCycle {
    /// Create a cycle over `ratios`, starting at the first token.
    ///
    /// # Errors
    /// Returns [`PanelError::EmptyAspectRatios`] if `ratios` is empty.
    pub fn new<I, S>(ratios: I) -> Result<Self, PanelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ratios: Vec<String> = ratios.into_iter().map(Into::into).collect();
        if ratios.is_empty() {
            return Err(PanelError::EmptyAspectRatios);
        }
        Ok(Self { ratios, index: 0 })
    }

    /// Current position in the list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of tokens in the cycle.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Always `false`; an empty cycle cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// The token at the current position.
    pub fn current(&self) -> &str {
        &self.ratios[self.index]
    }

    /// Advance one step, wrapping to the start.
    pub fn next(&mut self) -> &str {
        self.index = (self.index + 1) % self.ratios.len();
        self.current()
    }

    /// Step back one position, wrapping to the last token.
    pub fn previous(&mut self) -> &str {
        let len = self.ratios.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Return to the first token.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Human-readable form of a token.
    pub fn label(token: &str) -> &str {
        if token == ORIGINAL_ASPECT {
            "Original"
        } else {
            token
        }
    }
}

impl Default for AspectCycle {
    fn default() -> Self {
        Self {
            ratios: DEFAULT_ASPECT_RATIOS.iter().map(|s| s.to_string()).collect(),
            index: 0,
        }
    }
}
