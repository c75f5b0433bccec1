//! # triform-core
//!
//! Converts structured documents between JSON, YAML, and XML while preserving
//! the data's logical shape. Every format translates through one in-memory
//! [`Value`] model, so a conversion is a pure read-then-write pipeline:
//!
//! ```text
//! input bytes → reader → Value → writer → output bytes
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use triform_core::{convert_bytes, Format};
//!
//! let yaml = convert_bytes(br#"{"name": "Ada"}"#, Format::Json, Format::Yaml).unwrap();
//! assert_eq!(String::from_utf8(yaml).unwrap(), "name: Ada\n");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the common ordered value model
//! - [`json`], [`yaml`], [`xml`] — one reader and one writer per format
//! - [`convert`] — dispatcher selecting codecs by format token or extension
//! - [`format`] — format resolution (`yml`/`yaml` alias, case-insensitive)
//! - [`error`] — the failure taxonomy

pub mod convert;
pub mod error;
pub mod format;
pub mod json;
pub mod value;
pub mod xml;
pub mod yaml;

pub use convert::{convert_bytes, convert_bytes_with, convert_file, Options};
pub use error::{Error, ParseError, Result};
pub use format::Format;
pub use value::{Mapping, Number, Value};
