//! Host protocol definitions
//!
//! Line-delimited JSON. The host sends lifecycle events tagged by `event`
//! and addressed by `context` (one context per key instance); the plugin
//! answers with `setTitle` commands.

use serde::{Deserialize, Serialize};

use crate::action::ScrollTextSettings;
use crate::Result;

/// Payload carrying the key's persisted settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPayload {
    #[serde(default)]
    pub settings: ScrollTextSettings,
}

/// Event received from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    /// Key became visible
    WillAppear {
        context: String,
        #[serde(default)]
        payload: SettingsPayload,
    },
    /// User edited the key's settings
    DidReceiveSettings {
        context: String,
        #[serde(default)]
        payload: SettingsPayload,
    },
    /// Key is no longer visible
    WillDisappear { context: String },
    /// Key was pressed
    KeyDown { context: String },
    /// Any event this plugin does not handle
    #[serde(other)]
    Unknown,
}

impl HostEvent {
    pub fn context(&self) -> Option<&str> {
        match self {
            HostEvent::WillAppear { context, .. }
            | HostEvent::DidReceiveSettings { context, .. }
            | HostEvent::WillDisappear { context }
            | HostEvent::KeyDown { context } => Some(context),
            HostEvent::Unknown => None,
        }
    }

    /// Parse one line of host input
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePayload {
    pub title: String,
}

/// Command sent to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum PluginCommand {
    SetTitle {
        context: String,
        payload: TitlePayload,
    },
}

impl PluginCommand {
    pub fn set_title(context: impl Into<String>, title: impl Into<String>) -> Self {
        PluginCommand::SetTitle {
            context: context.into(),
            payload: TitlePayload {
                title: title.into(),
            },
        }
    }

    /// Serialize as a single JSON line (without the newline)
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
