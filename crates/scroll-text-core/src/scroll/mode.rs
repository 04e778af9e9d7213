//! L4 Atomic Layer: Scroll mode and direction
//!
//! Serialized with the lowercase names the host settings use
//! (`"loop"`, `"bounce"`, `"left"`, `"right"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How the window travels once it reaches the end of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Wrap around circularly
    #[default]
    Loop,
    /// Reverse at each end
    Bounce,
}

/// Travel direction for loop mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

impl ScrollMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollMode::Loop => "loop",
            ScrollMode::Bounce => "bounce",
        }
    }
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Left => "left",
            ScrollDirection::Right => "right",
        }
    }
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loop" => Ok(ScrollMode::Loop),
            "bounce" => Ok(ScrollMode::Bounce),
            other => Err(Error::Config(format!("Unknown scroll mode: {}", other))),
        }
    }
}

impl FromStr for ScrollDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(ScrollDirection::Left),
            "right" => Ok(ScrollDirection::Right),
            other => Err(Error::Config(format!("Unknown scroll direction: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ScrollMode::Bounce).unwrap(), "\"bounce\"");
        assert_eq!(
            serde_json::from_str::<ScrollDirection>("\"right\"").unwrap(),
            ScrollDirection::Right
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Loop".parse::<ScrollMode>().unwrap(), ScrollMode::Loop);
        assert_eq!("LEFT".parse::<ScrollDirection>().unwrap(), ScrollDirection::Left);
        assert!("sideways".parse::<ScrollDirection>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ScrollMode::default(), ScrollMode::Loop);
        assert_eq!(ScrollDirection::default(), ScrollDirection::Left);
    }
}
