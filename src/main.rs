use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use curlstring::builder::{parse_header_line, FormatOptions, RequestBody, RequestDescriptor};
use curlstring::colorize::AnsiColorizer;
use curlstring::config::load_config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "curlstring",
    version,
    about = "Render a request as a readable curl command",
    disable_help_subcommand = true
)]
struct Cli {
    /// Request URL, printed verbatim
    #[arg(value_name = "URL")]
    url: String,

    /// Request method
    #[arg(short = 'X', long = "request")]
    method: Option<String>,

    /// Header in `Name: value` form (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    headers: Vec<String>,

    /// Request body, JSON or raw text
    #[arg(short, long)]
    data: Option<String>,

    /// JSON file with a fetch-style descriptor (method, headers, body)
    #[arg(long, value_name = "FILE")]
    descriptor: Option<PathBuf>,

    /// Force colored JSON payloads
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored JSON payloads
    #[arg(long)]
    no_color: bool,

    /// Indent width for plain JSON payloads
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Directory or file containing curlstring.json
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config_target = cli
        .config
        .as_ref()
        .map(|p| resolve_relative(&cwd, p))
        .unwrap_or_else(|| cwd.clone());
    let cfg = load_config(&config_target).context("loading configuration")?;

    let descriptor = build_descriptor(&cli)?;

    let config_options = cfg
        .as_ref()
        .map(|c| c.config.format_options())
        .unwrap_or_default();
    let terminal = FormatOptions {
        color_json: Some(std::io::stdout().is_terminal()),
        json_indent_width: None,
    };
    let options = cli_options(&cli).or(&config_options).or(&terminal);

    let colorizer = match &cfg {
        Some(loaded) => AnsiColorizer::new(
            loaded
                .config
                .palette()
                .with_context(|| format!("reading palette from {}", loaded.path.display()))?,
        ),
        None => AnsiColorizer::default(),
    };

    println!(
        "{}",
        curlstring::build_with(&colorizer, &cli.url, Some(&descriptor), Some(&options))
    );
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CURLSTRING_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cli_options(cli: &Cli) -> FormatOptions {
    let color_json = if cli.color {
        Some(true)
    } else if cli.no_color {
        Some(false)
    } else {
        None
    };
    FormatOptions {
        color_json,
        json_indent_width: cli.indent,
    }
}

fn build_descriptor(cli: &Cli) -> Result<RequestDescriptor> {
    let mut descriptor = match &cli.descriptor {
        Some(path) => read_descriptor(path)?,
        None => RequestDescriptor::default(),
    };

    if let Some(method) = &cli.method {
        descriptor.method = Some(method.clone());
    }

    for raw in &cli.headers {
        let (name, value) =
            parse_header_line(raw).ok_or_else(|| anyhow!("Invalid header: {raw}"))?;
        descriptor
            .headers
            .get_or_insert_with(Vec::new)
            .push((name, value));
    }

    if let Some(data) = &cli.data {
        descriptor.body = Some(RequestBody::Text(data.clone()));
    }

    Ok(descriptor)
}

fn read_descriptor(path: &Path) -> Result<RequestDescriptor> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading descriptor {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing descriptor {}", path.display()))?;
    Ok(RequestDescriptor::from_json(&value))
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("curlstring").chain(args.iter().copied()))
    }

    #[test]
    fn resolve_relative_joins_when_needed() {
        let base = Path::new("/tmp/base");
        let relative = Path::new("sub/curlstring.json");
        assert_eq!(resolve_relative(base, relative), base.join(relative));

        let absolute = Path::new("/var/data/curlstring.json");
        assert_eq!(resolve_relative(base, absolute), absolute);
    }

    #[test]
    fn flags_build_descriptor_in_order() -> Result<()> {
        let cli = parse(&[
            "http://example.com",
            "-X",
            "put",
            "-H",
            "Accept: */*",
            "-H",
            "X-Trace: 1",
            "-d",
            "{\"a\":1}",
        ]);
        let descriptor = build_descriptor(&cli)?;
        assert_eq!(descriptor.method.as_deref(), Some("put"));
        assert_eq!(
            descriptor.headers,
            Some(vec![
                ("Accept".to_string(), "*/*".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ])
        );
        assert_eq!(descriptor.body, Some(RequestBody::Text("{\"a\":1}".to_string())));
        Ok(())
    }

    #[test]
    fn flags_override_descriptor_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"method":"post","headers":{"accept":"application/json"},"body":{"ok":true}}"#,
        )?;

        let cli = parse(&[
            "http://example.com",
            "--descriptor",
            path.to_str().expect("utf-8 path"),
            "-H",
            "x-extra: yes",
        ]);
        let descriptor = build_descriptor(&cli)?;
        assert_eq!(descriptor.method.as_deref(), Some("post"));
        assert_eq!(descriptor.headers.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            descriptor.body,
            Some(RequestBody::Json(serde_json::json!({ "ok": true })))
        );
        Ok(())
    }

    #[test]
    fn invalid_header_is_rejected() {
        let cli = parse(&["http://example.com", "-H", "missing-colon"]);
        let err = build_descriptor(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid header: missing-colon"));
    }

    #[test]
    fn color_flags_map_to_options() {
        assert_eq!(cli_options(&parse(&["u", "--no-color"])).color_json, Some(false));
        assert_eq!(cli_options(&parse(&["u", "--color"])).color_json, Some(true));
        let unset = cli_options(&parse(&["u", "--indent", "4"]));
        assert_eq!(unset.color_json, None);
        assert_eq!(unset.json_indent_width, Some(4));
    }
}
