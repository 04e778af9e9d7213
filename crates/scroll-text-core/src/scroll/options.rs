//! L4 Atomic Layer: Engine parameters
//!
//! Also the `[scroll]` table of the config file, so every field has a serde
//! default matching the host defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::mode::{ScrollDirection, ScrollMode};
use crate::{Error, Result};

/// Full parameter set for a [`ScrollEngine`](super::ScrollEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOptions {
    /// Text to scroll
    #[serde(default = "default_text")]
    pub text: String,
    /// Number of characters visible at once
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Milliseconds between advances
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default)]
    pub mode: ScrollMode,
    #[serde(default)]
    pub direction: ScrollDirection,
    /// Dwell after each completed cycle in milliseconds (0 = disabled)
    #[serde(default)]
    pub pause_after_scroll_ms: u64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            text: default_text(),
            window_size: default_window_size(),
            interval_ms: default_interval_ms(),
            mode: ScrollMode::default(),
            direction: ScrollDirection::default(),
            pause_after_scroll_ms: 0,
        }
    }
}

fn default_text() -> String {
    "Scroll me!".to_string()
}

fn default_window_size() -> usize {
    9
}

fn default_interval_ms() -> u64 {
    300
}

impl ScrollOptions {
    /// Create options for `text` with every other field defaulted
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_mode(mut self, mode: ScrollMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_pause_after_scroll_ms(mut self, pause_ms: u64) -> Self {
        self.pause_after_scroll_ms = pause_ms;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn pause_after_scroll(&self) -> Duration {
        Duration::from_millis(self.pause_after_scroll_ms)
    }

    /// Reject parameters the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        validate_window_size(self.window_size)?;
        validate_interval_ms(self.interval_ms)
    }
}

pub(crate) fn validate_window_size(window_size: usize) -> Result<()> {
    if window_size == 0 {
        return Err(Error::Config("window size must be at least 1".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_interval_ms(interval_ms: u64) -> Result<()> {
    if interval_ms == 0 {
        return Err(Error::Config("interval must be at least 1 ms".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ScrollOptions::default();
        assert_eq!(options.text, "Scroll me!");
        assert_eq!(options.window_size, 9);
        assert_eq!(options.interval_ms, 300);
        assert_eq!(options.mode, ScrollMode::Loop);
        assert_eq!(options.direction, ScrollDirection::Left);
        assert_eq!(options.pause_after_scroll_ms, 0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(ScrollOptions::new("x").with_window_size(0).validate().is_err());
        assert!(ScrollOptions::new("x").with_interval_ms(0).validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: ScrollOptions = toml::from_str("text = \"Now playing\"\nmode = \"bounce\"").unwrap();
        assert_eq!(options.text, "Now playing");
        assert_eq!(options.mode, ScrollMode::Bounce);
        assert_eq!(options.window_size, 9);
        assert_eq!(options.interval(), Duration::from_millis(300));
    }
}
