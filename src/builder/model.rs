use serde::Deserialize;
use serde_json::Value;

use super::payload::script_string;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Text(String),
    Json(Value),
}

impl RequestBody {
    /// Whether the body produces a `--data` fragment at all.
    pub fn is_present(&self) -> bool {
        match self {
            RequestBody::Text(text) => !text.is_empty(),
            RequestBody::Json(value) => is_truthy(value),
        }
    }
}

impl From<&str> for RequestBody {
    fn from(value: &str) -> Self {
        RequestBody::Text(value.to_string())
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        RequestBody::Text(value)
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDescriptor {
    pub method: Option<String>,
    pub headers: Option<Vec<(String, String)>>,
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds a descriptor from a loosely-typed fetch-style object.
    ///
    /// Fields with the wrong shape are treated as absent: a non-string
    /// method falls back to GET and non-object headers are ignored.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let method = object
            .get("method")
            .and_then(Value::as_str)
            .map(str::to_string);

        let headers = object.get("headers").and_then(Value::as_object).map(|map| {
            map.iter()
                .map(|(name, value)| (name.clone(), script_string(value)))
                .collect()
        });

        let body = match object.get("body") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(RequestBody::Text(text.clone())),
            Some(other) => Some(RequestBody::Json(other.clone())),
        };

        Self {
            method,
            headers,
            body,
        }
    }

    pub(crate) fn resolved_method(&self) -> String {
        self.method
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| DEFAULT_METHOD.to_string())
    }

    pub(crate) fn present_body(&self) -> Option<&RequestBody> {
        self.body.as_ref().filter(|body| body.is_present())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    #[serde(rename = "colorJson")]
    pub color_json: Option<bool>,
    #[serde(rename = "jsonIndentWidth")]
    pub json_indent_width: Option<usize>,
}

impl FormatOptions {
    pub fn plain() -> Self {
        Self {
            color_json: Some(false),
            json_indent_width: None,
        }
    }

    pub fn with_indent(mut self, width: usize) -> Self {
        self.json_indent_width = Some(width);
        self
    }

    pub fn color_json(&self) -> bool {
        self.color_json.unwrap_or(true)
    }

    pub fn json_indent_width(&self) -> usize {
        match self.json_indent_width {
            Some(width) if width > 0 => width,
            _ => DEFAULT_INDENT_WIDTH,
        }
    }

    /// Fills fields missing here from `fallback`.
    pub fn or(&self, fallback: &FormatOptions) -> FormatOptions {
        FormatOptions {
            color_json: self.color_json.or(fallback.color_json),
            json_indent_width: self.json_indent_width.or(fallback.json_indent_width),
        }
    }

    /// Reads options the same way [`RequestDescriptor::from_json`] reads
    /// descriptors: mistyped fields count as missing.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            color_json: object.get("colorJson").map(is_truthy),
            json_indent_width: object
                .get("jsonIndentWidth")
                .and_then(Value::as_u64)
                .map(|width| width as usize),
        }
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
