use serde::{Deserialize, Serialize};

use crate::scroll::{ScrollDirection, ScrollMode, ScrollOptions};

/// Per-key settings persisted by the host
///
/// Every field is optional; missing values fall back to the configured
/// defaults when the engine is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTextSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ScrollMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<ScrollDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_after_scroll: Option<u64>,
}

impl ScrollTextSettings {
    /// Fill unset fields from `defaults`
    pub fn resolve(&self, defaults: &ScrollOptions) -> ScrollOptions {
        ScrollOptions {
            text: self.text.clone().unwrap_or_else(|| defaults.text.clone()),
            window_size: self.window_size.unwrap_or(defaults.window_size),
            interval_ms: self.interval.unwrap_or(defaults.interval_ms),
            mode: self.mode.unwrap_or(defaults.mode),
            direction: self.direction.unwrap_or(defaults.direction),
            pause_after_scroll_ms: self
                .pause_after_scroll
                .unwrap_or(defaults.pause_after_scroll_ms),
        }
    }

    /// True when `other` can be applied without rebuilding the engine
    pub fn differs_only_in_pause(&self, other: &ScrollTextSettings) -> bool {
        ScrollTextSettings {
            pause_after_scroll: other.pause_after_scroll,
            ..self.clone()
        } == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_names() {
        let settings: ScrollTextSettings = serde_json::from_value(serde_json::json!({
            "text": "Hello",
            "windowSize": 5,
            "interval": 150,
            "mode": "bounce",
            "direction": "right",
            "pauseAfterScroll": 1000
        }))
        .unwrap();

        assert_eq!(settings.text.as_deref(), Some("Hello"));
        assert_eq!(settings.window_size, Some(5));
        assert_eq!(settings.interval, Some(150));
        assert_eq!(settings.mode, Some(ScrollMode::Bounce));
        assert_eq!(settings.direction, Some(ScrollDirection::Right));
        assert_eq!(settings.pause_after_scroll, Some(1000));
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let settings = ScrollTextSettings {
            window_size: Some(4),
            ..Default::default()
        };
        let options = settings.resolve(&ScrollOptions::default());
        assert_eq!(options.text, "Scroll me!");
        assert_eq!(options.window_size, 4);
        assert_eq!(options.interval_ms, 300);
    }

    #[test]
    fn test_empty_text_is_kept() {
        let settings = ScrollTextSettings {
            text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(settings.resolve(&ScrollOptions::default()).text, "");
    }

    #[test]
    fn test_differs_only_in_pause() {
        let base = ScrollTextSettings {
            text: Some("abc".into()),
            pause_after_scroll: Some(100),
            ..Default::default()
        };
        let pause_only = ScrollTextSettings {
            pause_after_scroll: Some(900),
            ..base.clone()
        };
        let text_changed = ScrollTextSettings {
            text: Some("xyz".into()),
            ..pause_only.clone()
        };

        assert!(base.differs_only_in_pause(&pause_only));
        assert!(base.differs_only_in_pause(&base));
        assert!(!base.differs_only_in_pause(&text_changed));
    }
}
