//! YAML codec — safe-subset parsing through `serde_yaml`.
//!
//! `serde_yaml` implements the safe YAML grammar: scalars, sequences, and
//! mappings only. Tags are inert data and can never instantiate types or run
//! code, which is the security boundary the reader relies on. Tagged values
//! are unwrapped to their payload; the tag itself is discarded.

use crate::error::{Error, ParseError, Result};
use crate::format::Format;
use crate::value::{Number, Value};

/// Reads YAML bytes into a [`Value`].
///
/// Scalar mapping keys that are not strings (numbers, booleans, null) are
/// coerced to their scalar spelling; sequence or mapping keys fail with a
/// parse error since the value model requires string keys.
pub fn read_yaml(input: &[u8]) -> Result<Value> {
    let parsed: serde_yaml::Value = serde_yaml::from_slice(input).map_err(ParseError::from)?;
    from_yaml(parsed)
}

/// Writes a [`Value`] as YAML. Key insertion order is preserved.
pub fn write_yaml(value: &Value) -> Result<Vec<u8>> {
    let yaml = to_yaml(value);
    let text = serde_yaml::to_string(&yaml).map_err(ParseError::from)?;
    Ok(text.into_bytes())
}

fn from_yaml(value: serde_yaml::Value) -> Result<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => Value::Number(from_yaml_number(&n)),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<_>> = seq.into_iter().map(from_yaml).collect();
            Value::Sequence(items?)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = crate::value::Mapping::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key_to_string(key)?, from_yaml(val)?);
            }
            Value::Mapping(out)
        }
        // Unknown tags are ignored, not executed: keep the payload.
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn key_to_string(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => key_to_string(tagged.value),
        other => Err(Error::invalid(
            Format::Yaml,
            format!("mapping key must be a scalar, found a {}", yaml_kind(&other)),
        )),
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        _ => "scalar",
    }
}

fn from_yaml_number(n: &serde_yaml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Int(i)
    } else if let Some(u) = n.as_u64() {
        Number::UInt(u)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(n) => serde_yaml::Value::Number(match n {
            Number::Int(i) => serde_yaml::Number::from(*i),
            Number::UInt(u) => serde_yaml::Number::from(*u),
            Number::Float(f) => serde_yaml::Number::from(*f),
        }),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Sequence(seq) => serde_yaml::Value::Sequence(seq.iter().map(to_yaml).collect()),
        Value::Mapping(map) => {
            // serde_yaml::Mapping is insertion-ordered too.
            let mut out = serde_yaml::Mapping::with_capacity(map.len());
            for (key, val) in map {
                out.insert(serde_yaml::Value::String(key.clone()), to_yaml(val));
            }
            serde_yaml::Value::Mapping(out)
        }
    }
}
