//! Game settings
//!
//! Read from an optional JSON file named on the command line. Every field
//! has a default, so a partial file (or none at all) is fine.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_WIDTH_NARROW, PADDLE_WIDTH_WIDE};
use crate::sim::Rules;

pub use crate::sim::ToggleMode;

/// Which build of the rules to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// 36-wide paddle
    #[default]
    Wide,
    /// 32-wide paddle
    Narrow,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Wide => "Wide",
            Variant::Narrow => "Narrow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wide" => Some(Variant::Wide),
            "narrow" => Some(Variant::Narrow),
            _ => None,
        }
    }

    pub fn paddle_width(&self) -> f32 {
        match self {
            Variant::Wide => PADDLE_WIDTH_WIDE,
            Variant::Narrow => PADDLE_WIDTH_NARROW,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rule set
    pub variant: Variant,
    /// How start toggles auto-play
    pub toggle_mode: ToggleMode,

    // === Display ===
    /// Target frames per second; `None` runs uncapped and leans on vsync
    pub frame_cap: Option<u32>,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Integer window scale for the 480x272 screen
    pub window_scale: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Wide,
            toggle_mode: ToggleMode::RisingEdge,

            frame_cap: None,
            vsync: true,
            window_scale: 2,
        }
    }
}

/// Failure to read a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys, serialization can't fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Simulation rules for these settings
    pub fn rules(&self) -> Rules {
        Rules {
            paddle_width: self.variant.paddle_width(),
            toggle_mode: self.toggle_mode,
        }
    }

    /// Window scale, never below 1
    pub fn effective_window_scale(&self) -> u32 {
        self.window_scale.max(1)
    }

    /// Minimum frame duration when a cap is set
    pub fn frame_budget(&self) -> Option<std::time::Duration> {
        self.frame_cap
            .filter(|&hz| hz > 0)
            .map(|hz| std::time::Duration::from_secs_f64(1.0 / hz as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.rules().paddle_width, 36.0);
        assert_eq!(settings.rules().toggle_mode, ToggleMode::RisingEdge);
        assert!(settings.frame_budget().is_none());
        assert_eq!(settings.effective_window_scale(), 2);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "variant": "Narrow", "frame_cap": 60 }"#).unwrap();
        assert_eq!(settings.variant, Variant::Narrow);
        assert_eq!(settings.rules().paddle_width, 32.0);
        assert!(settings.vsync);
        let budget = settings.frame_budget().unwrap();
        assert!((budget.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            variant: Variant::Narrow,
            toggle_mode: ToggleMode::EveryPress,
            frame_cap: Some(30),
            vsync: false,
            window_scale: 3,
        };
        let back = Settings::from_json(&settings.to_json()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_zero_scale_and_cap() {
        let settings = Settings {
            window_scale: 0,
            frame_cap: Some(0),
            ..Default::default()
        };
        assert_eq!(settings.effective_window_scale(), 1);
        assert!(settings.frame_budget().is_none());
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::from_str("NARROW"), Some(Variant::Narrow));
        assert_eq!(Variant::from_str("wide"), Some(Variant::Wide));
        assert_eq!(Variant::from_str("huge"), None);
        assert_eq!(Variant::Narrow.as_str(), "Narrow");
    }
}
