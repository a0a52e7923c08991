//! Button configuration files.
//!
//! A [`ButtonConfig`] is read from TOML. Every table and every key is
//! optional; missing values fall back to the defaults below.
//!
//! ```toml
//! [colors]
//! normal_background   = "#007AFF"
//! pressed_background  = "#FFFFFF"
//! disabled_background = "#C8C8C8"
//! disabled_text       = "#808080"
//! success_background  = "#28A745"
//! success_text        = "#FFFFFF"
//! failure_background  = "#DC3545"
//! failure_text        = "#FFFFFF"
//!
//! [timing]
//! transition_ms   = 200
//! revert_delay_ms = 1000
//! fade_ms         = 300
//! press_ms        = 100
//! press_scale     = 0.95
//!
//! [font]
//! family = "Helvetica Neue"
//! size   = 17.0
//! ```

use std::path::Path;
use std::time::Duration;

use segue_core::logging::targets;
use serde::Deserialize;
use segue_render::{Color, Font, FontFamily};

use crate::error::{ConfigError, Result};
use crate::style::{ButtonColors, StylePalette};
use crate::widget::animation::Easing;

/// Durations and factors that drive the button's animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonTimings {
    /// Length of a state transition.
    pub transition: Duration,
    /// Curve of state transitions.
    pub transition_easing: Easing,
    /// Delay between a completed failure transition and the revert to idle.
    pub revert_delay: Duration,
    /// Length of the fade used by the revert.
    pub fade: Duration,
    /// Curve of the revert fade.
    pub fade_easing: Easing,
    /// Length of the press and release scale animations.
    pub press: Duration,
    /// Curve of the press and release scale animations.
    pub press_easing: Easing,
    /// Scale applied while pressed.
    pub press_scale: f32,
}

impl Default for ButtonTimings {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(200),
            transition_easing: Easing::EaseOut,
            revert_delay: Duration::from_secs(1),
            fade: Duration::from_millis(300),
            fade_easing: Easing::EaseInOut,
            press: Duration::from_millis(100),
            press_easing: Easing::EaseOut,
            press_scale: 0.95,
        }
    }
}

/// Parsed button configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonConfig {
    pub colors: ColorsSection,
    pub timing: TimingSection,
    pub font: FontSection,
}

/// `[colors]`: hex strings, `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsSection {
    pub normal_background: Option<String>,
    pub pressed_background: Option<String>,
    pub disabled_background: Option<String>,
    pub disabled_text: Option<String>,
    pub success_background: Option<String>,
    pub success_text: Option<String>,
    pub failure_background: Option<String>,
    pub failure_text: Option<String>,
}

/// `[timing]`: durations in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingSection {
    pub transition_ms: Option<u64>,
    pub revert_delay_ms: Option<u64>,
    pub fade_ms: Option<u64>,
    pub press_ms: Option<u64>,
    pub press_scale: Option<f32>,
}

/// `[font]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSection {
    pub family: Option<String>,
    pub size: Option<f32>,
}

impl ButtonConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    #[tracing::instrument(
        target = "segue::config",
        level = "debug",
        skip_all,
        fields(path = %path.as_ref().display())
    )]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, "button config loaded");
        Ok(config)
    }

    /// Check every value without building anything.
    pub fn validate(&self) -> Result<()> {
        self.colors()?;
        self.timings()?;
        self.font()?;
        Ok(())
    }

    /// The configured colors, defaults filled in.
    pub fn colors(&self) -> Result<ButtonColors> {
        let defaults = ButtonColors::default();
        let c = &self.colors;
        Ok(ButtonColors {
            normal_background: color_or(
                "normal_background",
                &c.normal_background,
                defaults.normal_background,
            )?,
            pressed_background: color_or(
                "pressed_background",
                &c.pressed_background,
                defaults.pressed_background,
            )?,
            disabled_background: color_or(
                "disabled_background",
                &c.disabled_background,
                defaults.disabled_background,
            )?,
            disabled_text: color_or("disabled_text", &c.disabled_text, defaults.disabled_text)?,
            success_background: color_or(
                "success_background",
                &c.success_background,
                defaults.success_background,
            )?,
            success_text: color_or("success_text", &c.success_text, defaults.success_text)?,
            failure_background: color_or(
                "failure_background",
                &c.failure_background,
                defaults.failure_background,
            )?,
            failure_text: color_or("failure_text", &c.failure_text, defaults.failure_text)?,
        })
    }

    /// The style palette built from the configured colors.
    pub fn palette(&self) -> Result<StylePalette> {
        Ok(StylePalette::from_colors(&self.colors()?))
    }

    /// The configured timings, defaults filled in.
    pub fn timings(&self) -> Result<ButtonTimings> {
        let defaults = ButtonTimings::default();
        let t = &self.timing;

        let press_scale = t.press_scale.unwrap_or(defaults.press_scale);
        if !(press_scale > 0.0 && press_scale <= 1.0) {
            return Err(ConfigError::invalid_value(
                "press_scale",
                format!("{press_scale} is not in (0, 1]"),
            ));
        }

        Ok(ButtonTimings {
            transition: t.transition_ms.map_or(defaults.transition, Duration::from_millis),
            transition_easing: defaults.transition_easing,
            revert_delay: t.revert_delay_ms.map_or(defaults.revert_delay, Duration::from_millis),
            fade: t.fade_ms.map_or(defaults.fade, Duration::from_millis),
            fade_easing: defaults.fade_easing,
            press: t.press_ms.map_or(defaults.press, Duration::from_millis),
            press_easing: defaults.press_easing,
            press_scale,
        })
    }

    /// The configured label font.
    pub fn font(&self) -> Result<Font> {
        let defaults = Font::default();
        let size = self.font.size.unwrap_or(defaults.size());
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::invalid_value(
                "size",
                format!("font size {size} must be positive"),
            ));
        }
        let family = match &self.font.family {
            Some(name) => FontFamily::name(name.clone()),
            None => defaults.family().clone(),
        };
        Ok(Font::new(family, size))
    }
}

fn color_or(field: &'static str, value: &Option<String>, default: Color) -> Result<Color> {
    match value {
        Some(hex) => {
            Color::from_hex(hex).ok_or_else(|| ConfigError::invalid_color(field, hex.as_str()))
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PaletteRole;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ButtonConfig::from_toml_str("").unwrap();
        assert_eq!(config.timings().unwrap(), ButtonTimings::default());
        assert_eq!(config.palette().unwrap(), StylePalette::default());
        assert_eq!(config.font().unwrap(), Font::default());
    }

    #[test]
    fn test_partial_colors() {
        let config = ButtonConfig::from_toml_str(
            r##"
            [colors]
            normal_background = "#112233"
            "##,
        )
        .unwrap();
        let palette = config.palette().unwrap();

        assert_eq!(
            palette.entry(PaletteRole::Normal).background,
            Color::from_rgb8(0x11, 0x22, 0x33)
        );
        assert_eq!(palette.entry(PaletteRole::Pressed).text, Color::from_rgb8(0x11, 0x22, 0x33));
        assert_eq!(
            palette.entry(PaletteRole::Success),
            StylePalette::default().entry(PaletteRole::Success)
        );
    }

    #[test]
    fn test_invalid_color_names_field() {
        let err = ButtonConfig::from_toml_str(
            r##"
            [colors]
            failure_text = "red"
            "##,
        )
        .unwrap_err();

        match err {
            ConfigError::InvalidColor { field, value } => {
                assert_eq!(field, "failure_text");
                assert_eq!(value, "red");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_press_scale_range() {
        for bad in ["0.0", "1.5", "-0.2"] {
            let source = format!("[timing]\npress_scale = {bad}\n");
            assert!(matches!(
                ButtonConfig::from_toml_str(&source),
                Err(ConfigError::InvalidValue { field: "press_scale", .. })
            ));
        }
        let ok = ButtonConfig::from_toml_str("[timing]\npress_scale = 1.0\n").unwrap();
        assert_eq!(ok.timings().unwrap().press_scale, 1.0);
    }

    #[test]
    fn test_timings_in_milliseconds() {
        let config = ButtonConfig::from_toml_str(
            "[timing]\ntransition_ms = 150\nrevert_delay_ms = 2000\nfade_ms = 0\n",
        )
        .unwrap();
        let timings = config.timings().unwrap();

        assert_eq!(timings.transition, Duration::from_millis(150));
        assert_eq!(timings.revert_delay, Duration::from_secs(2));
        assert_eq!(timings.fade, Duration::ZERO);
        assert_eq!(timings.press, Duration::from_millis(100));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            ButtonConfig::from_toml_str("[timing]\nspeed = 3\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
