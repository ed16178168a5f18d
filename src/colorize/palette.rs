use colored::Color;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Unknown color '{value}' for {slot}")]
    UnknownColor { slot: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonPalette {
    pub separator: Color,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub null: Color,
    pub key: Color,
}

impl Default for JsonPalette {
    fn default() -> Self {
        Self {
            separator: Color::Yellow,
            string: Color::Green,
            number: Color::Magenta,
            boolean: Color::Cyan,
            null: Color::Red,
            key: Color::White,
        }
    }
}

/// Palette overrides as written in configuration, by color name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub separator: Option<String>,
    pub string: Option<String>,
    pub number: Option<String>,
    pub boolean: Option<String>,
    pub null: Option<String>,
    pub key: Option<String>,
}

impl TryFrom<&PaletteConfig> for JsonPalette {
    type Error = PaletteError;

    fn try_from(config: &PaletteConfig) -> Result<Self, Self::Error> {
        let base = JsonPalette::default();
        Ok(Self {
            separator: pick("separator", config.separator.as_deref(), base.separator)?,
            string: pick("string", config.string.as_deref(), base.string)?,
            number: pick("number", config.number.as_deref(), base.number)?,
            boolean: pick("boolean", config.boolean.as_deref(), base.boolean)?,
            null: pick("null", config.null.as_deref(), base.null)?,
            key: pick("key", config.key.as_deref(), base.key)?,
        })
    }
}

fn pick(slot: &'static str, name: Option<&str>, fallback: Color) -> Result<Color, PaletteError> {
    match name {
        None => Ok(fallback),
        Some(value) => value
            .parse::<Color>()
            .map_err(|_| PaletteError::UnknownColor {
                slot,
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() -> Result<(), PaletteError> {
        let palette = JsonPalette::try_from(&PaletteConfig::default())?;
        assert_eq!(palette, JsonPalette::default());
        Ok(())
    }

    #[test]
    fn named_colors_override_slots() -> Result<(), PaletteError> {
        let config = PaletteConfig {
            key: Some("blue".to_string()),
            null: Some("bright black".to_string()),
            ..PaletteConfig::default()
        };
        let palette = JsonPalette::try_from(&config)?;
        assert_eq!(palette.key, Color::Blue);
        assert_eq!(palette.null, Color::BrightBlack);
        assert_eq!(palette.string, Color::Green);
        Ok(())
    }

    #[test]
    fn unknown_color_names_the_slot() {
        let config = PaletteConfig {
            number: Some("chartreuse".to_string()),
            ..PaletteConfig::default()
        };
        let err = JsonPalette::try_from(&config).unwrap_err();
        assert_eq!(err.to_string(), "Unknown color 'chartreuse' for number");
    }
}
