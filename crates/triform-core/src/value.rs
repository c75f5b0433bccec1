//! The common value model every codec reads into and writes from.
//!
//! [`Value`] is a format-neutral tree: the JSON, YAML, and XML codecs all
//! translate through it, so a conversion is always `read` into a `Value`
//! followed by `write` out of it. Mappings use [`IndexMap`] so key insertion
//! order survives the round trip and output stays deterministic. Integers and
//! floats are kept apart in [`Number`] because the formats distinguish them
//! and a reader coercing one into the other would be lossy.

use indexmap::IndexMap;
use std::fmt;

/// A numeric scalar. Signed, unsigned, and floating-point variants are kept
/// separate so `18446744073709551615` and `1.0` both survive unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// The number as an `i64`, if it fits exactly.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::UInt(n) => i64::try_from(*n).ok(),
            Self::Float(_) => None,
        }
    }

    /// The number as an `f64` (integers widen, possibly losing precision).
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(n) => *n as f64,
            Self::UInt(n) => *n as f64,
            Self::Float(n) => *n,
        }
    }

    /// True for `Int` and `UInt`.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int(_) | Self::UInt(_))
    }

    /// True for a `Float` that is NaN or infinite. Strict JSON cannot encode
    /// these, so the JSON writer checks this before emitting.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::Float(f) if !f.is_finite())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            // Debug keeps the decimal point on whole floats (`2.0`, not `2`),
            // so a rendered float can never be re-read as an integer.
            Self::Float(n) => write!(f, "{n:?}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

/// Ordered key-value pairs of a [`Value::Mapping`].
pub type Mapping = IndexMap<String, Value>;

/// A structured document, independent of its serialized format.
///
/// A `Value` tree is produced whole by one reader call and consumed whole by
/// one writer call; there is no sharing or cycling, all three source grammars
/// are tree-shaped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Ordered list; element order is significant and preserved.
    Sequence(Vec<Value>),
    /// String-keyed pairs in insertion order; keys are unique.
    Mapping(Mapping),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Short lowercase name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(Number::Int(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(Number::UInt(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(Number::Float(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(seq: Vec<Value>) -> Self {
        Self::Sequence(seq)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}
