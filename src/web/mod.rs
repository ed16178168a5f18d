use serde_json::Value;
use thiserror::Error;

use crate::builder::{build, FormatOptions, RequestDescriptor};

#[derive(Debug, Error)]
pub enum WebProcessError {
    #[error("Invalid {field} JSON: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type WebResult<T> = Result<T, WebProcessError>;

/// Builds a command from loosely-typed values as a script host hands them
/// over. Never fails; mistyped fields fall back to their defaults.
pub fn build_from_json(address: &str, descriptor: &Value, options: &Value) -> String {
    let descriptor = RequestDescriptor::from_json(descriptor);
    let options = FormatOptions::from_json(options);
    build(address, Some(&descriptor), Some(&options))
}

/// Same as [`build_from_json`], taking the descriptor and options as JSON
/// text. Empty text stands for an omitted argument.
pub fn process_request(address: &str, descriptor: &str, options: &str) -> WebResult<String> {
    let descriptor = parse_argument("descriptor", descriptor)?;
    let options = parse_argument("options", options)?;
    Ok(build_from_json(address, &descriptor, &options))
}

fn parse_argument(field: &'static str, text: &str) -> WebResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|source| WebProcessError::InvalidJson { field, source })
}
