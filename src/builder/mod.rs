mod headers;
mod model;
mod payload;

pub use headers::{find_header, parse_header_line, CONTENT_TYPE, FORM_URLENCODED};
pub use model::{
    FormatOptions, RequestBody, RequestDescriptor, DEFAULT_INDENT_WIDTH, DEFAULT_METHOD,
};
pub use payload::{form_encode, parse_body, pretty_json, script_string, MAX_INDENT_WIDTH};

use crate::colorize::{AnsiColorizer, JsonColorizer};

const CONTINUATION: &str = " \\\n";

/// Builds a curl command for `address` using the default ANSI colorizer.
pub fn build(
    address: &str,
    descriptor: Option<&RequestDescriptor>,
    options: Option<&FormatOptions>,
) -> String {
    build_with(&AnsiColorizer::default(), address, descriptor, options)
}

/// Builds a curl command, delegating colored JSON payloads to `colorizer`.
pub fn build_with(
    colorizer: &dyn JsonColorizer,
    address: &str,
    descriptor: Option<&RequestDescriptor>,
    options: Option<&FormatOptions>,
) -> String {
    let default_descriptor = RequestDescriptor::default();
    let descriptor = descriptor.unwrap_or(&default_descriptor);
    let default_options = FormatOptions::default();
    let options = options.unwrap_or(&default_options);

    let mut fragments = vec![
        format!("curl --request {}", descriptor.resolved_method()),
        format!("--url {}", address),
    ];

    if let Some(headers) = &descriptor.headers {
        for (name, value) in headers {
            fragments.push(format!("--header '{}: {}'", name, value));
        }
    }

    if let Some(body) = descriptor.present_body() {
        let payload =
            payload::render_payload(body, descriptor.headers.as_deref(), options, colorizer);
        fragments.push(format!("--data '{}'", payload));
    }

    fragments.join(CONTINUATION)
}
