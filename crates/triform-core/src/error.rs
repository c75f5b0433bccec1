//! Error types for reading, writing, and dispatching conversions.
//!
//! Codecs and the dispatcher never catch-and-continue: every failure is
//! surfaced to the immediate caller with the format name and cause attached.

use crate::format::Format;
use thiserror::Error;

/// Convenience alias used throughout triform-core.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level failure taxonomy for a conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes did not conform to the declared source format.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A format token or file extension outside {json, yaml, yml, xml}.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The value tree contains a shape the target writer cannot encode.
    #[error("value not representable in {format}: {message}")]
    Unrepresentable { format: Format, message: String },

    /// Reading or writing the underlying bytes failed (path-based entry
    /// point only; the byte-level pipeline never touches the filesystem).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-format parse failures. The wrapped library errors carry location
/// information (line/column for JSON and YAML, byte position for XML).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally invalid XML that quick-xml accepts event-by-event:
    /// no root element, trailing content after the root, or a non-scalar
    /// mapping key in YAML.
    #[error("{format}: {message}")]
    Invalid { format: Format, message: String },

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Shorthand for an [`Error::Unrepresentable`] with a formatted message.
    pub(crate) fn unrepresentable(format: Format, message: impl Into<String>) -> Self {
        Self::Unrepresentable {
            format,
            message: message.into(),
        }
    }

    /// Shorthand for a structural [`ParseError::Invalid`].
    pub(crate) fn invalid(format: Format, message: impl Into<String>) -> Self {
        Self::Parse(ParseError::Invalid {
            format,
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_format_and_cause() {
        let err = Error::unrepresentable(Format::Json, "non-finite number");
        assert_eq!(
            err.to_string(),
            "value not representable in JSON: non-finite number"
        );

        let err = Error::invalid(Format::Xml, "no root element");
        assert_eq!(err.to_string(), "parse error: XML: no root element");

        let err = Error::UnsupportedFormat("txt".into());
        assert_eq!(err.to_string(), "unsupported format: txt");
    }
}
