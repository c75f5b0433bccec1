//! JSON codec — structural mapping through `serde_json`.
//!
//! The `preserve_order` feature keeps `serde_json::Map` insertion-ordered, so
//! key order flows straight through to the value model and back. Output is
//! pretty-printed with 4-space indentation for human-diffable results;
//! non-ASCII characters are emitted literally (serde_json does not escape
//! them), and a trailing newline is appended.

use crate::error::{Error, ParseError, Result};
use crate::format::Format;
use crate::value::{Number, Value};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Reads JSON bytes into a [`Value`].
pub fn read_json(input: &[u8]) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_slice(input).map_err(ParseError::from)?;
    Ok(from_json(parsed))
}

/// Writes a [`Value`] as pretty-printed JSON.
///
/// Fails with [`Error::Unrepresentable`] if the tree contains a non-finite
/// float; strict JSON has no NaN or Infinity literal.
pub fn write_json(value: &Value) -> Result<Vec<u8>> {
    let json = to_json(value)?;
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    json.serialize(&mut ser)
        .map_err(|e| Error::Parse(ParseError::Json(e)))?;
    out.push(b'\n');
    Ok(out)
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(from_json_number(&n)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Sequence(arr.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => {
            Value::Mapping(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}

/// Integer representations are tried before falling back to `f64`, so the
/// int/float distinction is never lost on read.
fn from_json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Int(i)
    } else if let Some(u) = n.as_u64() {
        Number::UInt(u)
    } else {
        // serde_json without arbitrary_precision always has an f64 view here.
        Number::Float(n.as_f64().unwrap_or(0.0))
    }
}

fn to_json(value: &Value) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(to_json_number(n)?),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(seq) => {
            let items: Result<Vec<_>> = seq.iter().map(to_json).collect();
            serde_json::Value::Array(items?)
        }
        Value::Mapping(map) => {
            let mut obj = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                obj.insert(key.clone(), to_json(val)?);
            }
            serde_json::Value::Object(obj)
        }
    })
}

fn to_json_number(n: &Number) -> Result<serde_json::Number> {
    match n {
        Number::Int(i) => Ok(serde_json::Number::from(*i)),
        Number::UInt(u) => Ok(serde_json::Number::from(*u)),
        Number::Float(f) => serde_json::Number::from_f64(*f).ok_or_else(|| {
            Error::unrepresentable(Format::Json, format!("non-finite number {f}"))
        }),
    }
}
