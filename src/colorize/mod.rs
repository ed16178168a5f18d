mod ansi;
mod palette;

pub use ansi::AnsiColorizer;
pub use palette::{JsonPalette, PaletteConfig, PaletteError};

use serde_json::Value;

/// Renders a JSON value as terminal-colored text for embedding in a payload.
pub trait JsonColorizer {
    fn colorize(&self, value: &Value) -> String;
}

impl<F> JsonColorizer for F
where
    F: Fn(&Value) -> String,
{
    fn colorize(&self, value: &Value) -> String {
        self(value)
    }
}
