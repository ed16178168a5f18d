use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use super::headers::is_form_urlencoded;
use super::model::{FormatOptions, RequestBody};
use crate::colorize::JsonColorizer;

/// Widest indent the pretty printer accepts; larger widths are clamped.
pub const MAX_INDENT_WIDTH: usize = 10;

/// Parses a body into a JSON value. Text that is not valid JSON passes
/// through unchanged as a JSON string.
pub fn parse_body(body: &RequestBody) -> Value {
    match body {
        RequestBody::Text(text) | RequestBody::Json(Value::String(text)) => {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone()))
        }
        RequestBody::Json(value) => value.clone(),
    }
}

pub(crate) fn render_payload(
    body: &RequestBody,
    headers: Option<&[(String, String)]>,
    options: &FormatOptions,
    colorizer: &dyn JsonColorizer,
) -> String {
    let parsed = parse_body(body);

    if is_form_urlencoded(headers) {
        form_encode(&parsed)
    } else if options.color_json() {
        colorizer.colorize(&parsed)
    } else {
        pretty_json(&parsed, options.json_indent_width())
    }
}

/// Renders `key=value` pairs joined by `&`. Keys and values are not escaped.
pub fn form_encode(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{}={}", key, script_string(value)))
            .collect::<Vec<_>>()
            .join("&"),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{}={}", index, script_string(value)))
            .collect::<Vec<_>>()
            .join("&"),
        _ => String::new(),
    }
}

pub fn pretty_json(value: &Value, indent_width: usize) -> String {
    let indent = " ".repeat(indent_width.min(MAX_INDENT_WIDTH));
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

/// Default string conversion for loosely-typed values, as a script host
/// would stringify them.
pub fn script_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(int), _, _) => int.to_string(),
            (_, Some(uint), _) => uint.to_string(),
            (_, _, Some(float)) => script_number(float),
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => script_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Formats a float the way a script host does: exponent notation past
/// 1e21 or below 1e-6, `Infinity` for overflowed literals.
fn script_number(float: f64) -> String {
    if float.is_nan() {
        return "NaN".to_string();
    }
    if float.is_infinite() {
        return if float > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if float == 0.0 {
        return "0".to_string();
    }

    let magnitude = float.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", float);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        float.to_string()
    }
}
