//! Color mode toggled from the sidebar.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted color mode
pub const COLOR_MODE_KEY: &str = "colorMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognised is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Logo asset for this mode
    pub fn logo(&self) -> &'static str {
        match self {
            ColorMode::Light => "/logo_1000w.png",
            ColorMode::Dark => "/logo_1000w_dark.png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ColorMode::Light.toggle(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggle().toggle(), ColorMode::Dark);
    }

    #[test]
    fn test_parse_stored_value() {
        assert_eq!(ColorMode::parse("dark"), Some(ColorMode::Dark));
        assert_eq!(ColorMode::parse("sepia"), None);
    }
}
