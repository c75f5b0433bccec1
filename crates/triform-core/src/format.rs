//! Format identification: explicit tokens and file-extension inference.

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    /// Resolves a format token from the closed set `{json, yaml, yml, xml}`,
    /// case-insensitively. `yml` and `yaml` both route to the YAML codec.
    pub fn from_token(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "xml" => Ok(Self::Xml),
            _ => Err(Error::UnsupportedFormat(token.to_string())),
        }
    }

    /// Infers a format from a path's extension. A missing extension and an
    /// unknown one both fail the same way.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        Self::from_token(ext).map_err(|_| Error::UnsupportedFormat(path.display().to_string()))
    }

    /// Canonical lowercase token for this format.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Xml => "XML",
        })
    }
}
