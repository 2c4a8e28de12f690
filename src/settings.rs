//! Runtime configuration for umbrellas, loadable from JSON.
//!
//! Every field has a default, so a settings file only needs the values it
//! changes:
//!
//! ```
//! use brolly::UmbrellaSettings;
//!
//! let settings = UmbrellaSettings::from_json_str(r#"{ "minimum_height": 24.0 }"#).unwrap();
//! assert_eq!(settings.minimum_height, 24.0);
//! assert_eq!(settings.reference_screen_width, 320.0);
//! ```
use std::fs;
use std::path::Path;

use bevy::color::HexColorError;
use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::mode::UmbrellaMode;
use crate::palette::ColorPalette;
use crate::{
    DEFAULT_CANOPY_SIZE, DEFAULT_COLOR_CHANGE_DURATION_SECS, DEFAULT_HANDLE_SIZE,
    DEFAULT_REFERENCE_SCREEN_WIDTH,
};

/// Errors raised while loading or validating [`UmbrellaSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid settings JSON.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A palette entry is not a hex colour.
    #[error("invalid palette colour {value:?}: {source}")]
    Color {
        /// The rejected string.
        value: String,
        /// Why it was rejected.
        #[source]
        source: HexColorError,
    },
    /// A numeric field is out of range.
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive {
        /// Offending field name.
        field: &'static str,
        /// Value that was supplied.
        value: f32,
    },
    /// A numeric field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Offending field name.
        field: &'static str,
        /// Value that was supplied.
        value: f32,
    },
}

/// Palette colours as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Canopy tint.
    pub umbrella_top: String,
    /// Handle tint.
    pub umbrella_bottom: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            umbrella_top: "#e34f4f".to_owned(),
            umbrella_bottom: "#2f2f3a".to_owned(),
        }
    }
}

impl PaletteSettings {
    /// Parses both colours.
    ///
    /// # Errors
    /// Returns [`SettingsError::Color`] naming the first invalid entry.
    pub fn to_palette(&self) -> Result<ColorPalette, SettingsError> {
        let parse = |value: &str| {
            Srgba::hex(value)
                .map(Color::from)
                .map_err(|source| SettingsError::Color {
                    value: value.to_owned(),
                    source,
                })
        };
        Ok(ColorPalette {
            umbrella_top: parse(&self.umbrella_top)?,
            umbrella_bottom: parse(&self.umbrella_bottom)?,
        })
    }
}

/// Tunables supplied by the umbrella's collaborators.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UmbrellaSettings {
    /// Floor applied to every destination.
    pub minimum_height: f32,
    /// Canopy art width and height.
    pub canopy_size: [f32; 2],
    /// Handle art width and height.
    pub handle_size: [f32; 2],
    /// Seconds a palette change takes to fade in.
    pub color_change_duration_secs: f32,
    /// Screen width used for easing tiers when no window is available.
    pub reference_screen_width: f32,
    /// Mode used when spawning without an explicit choice.
    pub mode: UmbrellaMode,
    /// Starting palette.
    pub palette: PaletteSettings,
}

impl Default for UmbrellaSettings {
    fn default() -> Self {
        Self {
            minimum_height: 0.0,
            canopy_size: DEFAULT_CANOPY_SIZE,
            handle_size: DEFAULT_HANDLE_SIZE,
            color_change_duration_secs: DEFAULT_COLOR_CHANGE_DURATION_SECS,
            reference_screen_width: DEFAULT_REFERENCE_SCREEN_WIDTH,
            mode: UmbrellaMode::Normal,
            palette: PaletteSettings::default(),
        }
    }
}

impl UmbrellaSettings {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] for malformed JSON and any error
    /// from [`UmbrellaSettings::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Read`] when the file cannot be read, plus
    /// anything [`UmbrellaSettings::from_json_str`] reports.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|source| SettingsError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks ranges and palette colours.
    ///
    /// # Errors
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.minimum_height.is_finite() {
            return Err(SettingsError::NotFinite {
                field: "minimum_height",
                value: self.minimum_height,
            });
        }
        let [canopy_w, canopy_h] = self.canopy_size;
        let [handle_w, handle_h] = self.handle_size;
        for (field, value) in [
            ("canopy_size.width", canopy_w),
            ("canopy_size.height", canopy_h),
            ("handle_size.width", handle_w),
            ("handle_size.height", handle_h),
            ("color_change_duration_secs", self.color_change_duration_secs),
            ("reference_screen_width", self.reference_screen_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NotPositive { field, value });
            }
        }
        self.palette.to_palette().map(|_| ())
    }

    /// Canopy art size as a vector.
    #[must_use]
    pub const fn canopy_size(&self) -> Vec2 {
        Vec2::from_array(self.canopy_size)
    }

    /// Handle art size as a vector.
    #[must_use]
    pub const fn handle_size(&self) -> Vec2 {
        Vec2::from_array(self.handle_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert!(UmbrellaSettings::default().validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let settings = UmbrellaSettings::from_json_str(
            r##"{ "mode": "ping_pong", "palette": { "umbrella_top": "#ffffff" } }"##,
        )
        .expect("settings should parse");
        assert_eq!(settings.mode, UmbrellaMode::PingPong);
        assert_eq!(settings.palette.umbrella_top, "#ffffff");
        assert_eq!(settings.palette.umbrella_bottom, PaletteSettings::default().umbrella_bottom);
        assert_eq!(settings.canopy_size, DEFAULT_CANOPY_SIZE);
    }

    #[rstest]
    #[case::zero_width(r#"{ "canopy_size": [0.0, 10.0] }"#, "canopy_size.width")]
    #[case::negative_handle(r#"{ "handle_size": [10.0, -1.0] }"#, "handle_size.height")]
    #[case::zero_duration(r#"{ "color_change_duration_secs": 0.0 }"#, "color_change_duration_secs")]
    #[case::zero_screen(r#"{ "reference_screen_width": 0.0 }"#, "reference_screen_width")]
    fn out_of_range_values_are_rejected(#[case] json: &str, #[case] expected_field: &str) {
        let err = UmbrellaSettings::from_json_str(json).expect_err("should be rejected");
        match err {
            SettingsError::NotPositive { field, .. } => assert_eq!(field, expected_field),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_colour_is_reported() {
        let json = r##"{ "palette": { "umbrella_bottom": "#12" } }"##;
        let err = UmbrellaSettings::from_json_str(json).expect_err("should be rejected");
        assert!(matches!(err, SettingsError::Color { ref value, .. } if value == "#12"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = UmbrellaSettings::from_json_str("{ minimum_height: }").expect_err("should fail");
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = UmbrellaSettings::load("/definitely/not/here.json").expect_err("should fail");
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
