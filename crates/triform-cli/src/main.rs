//! `triform` CLI — convert a structured document between JSON, YAML, and XML.
//!
//! ## Usage
//!
//! ```sh
//! # Formats inferred from the file extensions
//! triform data.yml out.json
//!
//! # Explicit format overrides (for paths with unhelpful extensions)
//! triform export.dat report.xml --from json
//!
//! # Choose the synthesized XML root tag
//! triform config.json config.xml --root-tag config
//! ```
//!
//! The input format comes from `--from` if given, else the input path's
//! extension; likewise `--to` and the output path. `yml` and `yaml` are
//! interchangeable, matching is case-insensitive.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use triform_core::{convert_file, Format, Options};

#[derive(Parser)]
#[command(
    name = "triform",
    version,
    about = "Convert structured documents between JSON, YAML, and XML"
)]
struct Cli {
    /// Input file
    input: PathBuf,

    /// Output file (created or overwritten on success only)
    output: PathBuf,

    /// Source format (json, yaml, yml, xml); inferred from the input
    /// extension if omitted
    #[arg(long, value_parser = parse_format)]
    from: Option<Format>,

    /// Target format (json, yaml, yml, xml); inferred from the output
    /// extension if omitted
    #[arg(long, value_parser = parse_format)]
    to: Option<Format>,

    /// Root tag used when writing XML
    #[arg(long, default_value = "root")]
    root_tag: String,
}

fn parse_format(token: &str) -> Result<Format, String> {
    Format::from_token(token).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = Options {
        xml_root: cli.root_tag,
    };
    convert_file(&cli.input, &cli.output, cli.from, cli.to, &options).with_context(|| {
        format!(
            "failed to convert {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })
}
