//! Conversion dispatcher — selects a reader and writer and runs them in
//! sequence. Stateless: each call is an independent read-then-write pipeline,
//! safe to invoke from any thread as a blocking operation.

use crate::error::Result;
use crate::format::Format;
use crate::value::Value;
use crate::{json, xml, yaml};
use std::fs;
use std::path::Path;

/// Knobs for a conversion. Only the XML writer has one today.
#[derive(Debug, Clone)]
pub struct Options {
    /// Root tag synthesized when writing XML.
    pub xml_root: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            xml_root: xml::DEFAULT_ROOT_TAG.to_string(),
        }
    }
}

/// Reads `input` as `from` into the value model.
pub fn read_value(input: &[u8], from: Format) -> Result<Value> {
    match from {
        Format::Json => json::read_json(input),
        Format::Yaml => yaml::read_yaml(input),
        Format::Xml => xml::read_xml(input),
    }
}

/// Writes `value` as `to`.
pub fn write_value(value: &Value, to: Format, options: &Options) -> Result<Vec<u8>> {
    match to {
        Format::Json => json::write_json(value),
        Format::Yaml => yaml::write_yaml(value),
        Format::Xml => xml::write_xml_with_root(value, &options.xml_root),
    }
}

/// Pure byte-level conversion: `from`-formatted input bytes in, `to`-formatted
/// bytes out. Any codec failure surfaces as-is; there is no retry, fallback,
/// or partial output.
pub fn convert_bytes(input: &[u8], from: Format, to: Format) -> Result<Vec<u8>> {
    convert_bytes_with(input, from, to, &Options::default())
}

/// [`convert_bytes`] with explicit [`Options`].
pub fn convert_bytes_with(
    input: &[u8],
    from: Format,
    to: Format,
    options: &Options,
) -> Result<Vec<u8>> {
    let value = read_value(input, from)?;
    write_value(&value, to, options)
}

/// Path-based conversion. Formats come from the explicit overrides when
/// given, otherwise from the file extensions — and both are resolved before
/// any file is touched, so an unsupported extension fails without opening
/// the input. The output file is only written after the whole conversion
/// succeeded; a failing writer never leaves a truncated artifact.
pub fn convert_file(
    input: &Path,
    output: &Path,
    from: Option<Format>,
    to: Option<Format>,
    options: &Options,
) -> Result<()> {
    let from = match from {
        Some(f) => f,
        None => Format::from_path(input)?,
    };
    let to = match to {
        Some(f) => f,
        None => Format::from_path(output)?,
    };
    let bytes = fs::read(input)?;
    let converted = convert_bytes_with(&bytes, from, to, options)?;
    fs::write(output, converted)?;
    Ok(())
}
