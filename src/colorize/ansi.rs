use colored::Color;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use super::palette::JsonPalette;
use super::JsonColorizer;
use crate::builder::pretty_json;

const RESET: &str = "\x1b[0m";

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"("(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+\-]?\d+)?)"#,
    )
    .expect("valid regex")
});

/// Default colorizer: pretty-printed JSON with every token wrapped in its
/// palette color and punctuation left in the separator color.
#[derive(Debug, Clone)]
pub struct AnsiColorizer {
    pub palette: JsonPalette,
    pub indent: usize,
}

impl Default for AnsiColorizer {
    fn default() -> Self {
        Self {
            palette: JsonPalette::default(),
            indent: 2,
        }
    }
}

impl AnsiColorizer {
    pub fn new(palette: JsonPalette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    fn token_color(&self, token: &str) -> Color {
        if token.starts_with('"') {
            if token.ends_with(':') {
                self.palette.key
            } else {
                self.palette.string
            }
        } else if token == "true" || token == "false" {
            self.palette.boolean
        } else if token == "null" {
            self.palette.null
        } else {
            self.palette.number
        }
    }
}

impl JsonColorizer for AnsiColorizer {
    fn colorize(&self, value: &Value) -> String {
        let separator = escape(self.palette.separator);
        let json = pretty_json(value, self.indent);
        let body = TOKEN_PATTERN.replace_all(&json, |caps: &Captures| {
            let token = &caps[0];
            format!(
                "{}{}{}{}",
                RESET,
                escape(self.token_color(token)),
                token,
                separator
            )
        });
        format!("{}{}{}", separator, body, RESET)
    }
}

fn escape(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}
