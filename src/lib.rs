pub mod builder;
pub mod colorize;
#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "web")]
pub mod web;

pub use builder::{build, build_with, FormatOptions, RequestBody, RequestDescriptor};
pub use colorize::{AnsiColorizer, JsonColorizer};
