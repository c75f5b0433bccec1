//! XML codec — folds element trees into the value model and back.
//!
//! XML has no native mapping/sequence distinction, so the reader applies a
//! folding rule: an element's attributes and children become a mapping in
//! encounter order, and repeated child names gather into a sequence (never
//! overwriting earlier occurrences). The writer is the inverse: a sequence
//! under key `k` unfolds into repeated `<k>` siblings.
//!
//! A single root element is required. Its tag name is not represented in the
//! value; writing synthesizes a root tag (`root` unless configured).
//!
//! Leaf text gets restricted scalar inference (`true`, `null`, integers,
//! digits-only floats) so numbers and booleans survive a trip through XML —
//! without it, `{"a": 1}` would come back as `{"a": "1"}`. Two string caveats
//! follow from reading through XML: a string that spells a scalar (`"42"`)
//! is reclassified on the way back, and leading/trailing whitespace in leaf
//! text is trimmed, so strings padded with whitespace do not round-trip.
//! Text mixed with child elements is rejected rather than half-kept.

use crate::error::{Error, ParseError, Result};
use crate::format::Format;
use crate::value::{Mapping, Number, Value};
use indexmap::map::Entry;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Default tag synthesized for the document root on write.
pub const DEFAULT_ROOT_TAG: &str = "root";

/// Reads single-root XML bytes into a [`Value`]. The root tag is discarded.
pub fn read_xml(input: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(input).map_err(ParseError::from)?;
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    loop {
        match reader.read_event().map_err(ParseError::from)? {
            Event::Start(tag) => {
                if stack.is_empty() && root.is_some() {
                    return Err(Error::invalid(Format::Xml, "multiple root elements"));
                }
                stack.push(XmlElement::from_tag(&tag)?);
            }
            Event::Empty(tag) => {
                let node = XmlElement::from_tag(&tag)?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // quick-xml has already verified the tag matches its opener.
                if let Some(node) = stack.pop() {
                    attach(node, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                let unescaped = text.unescape().map_err(ParseError::from)?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&unescaped),
                    None => {
                        return Err(Error::invalid(Format::Xml, "text outside the root element"))
                    }
                }
            }
            Event::CData(cdata) => {
                let raw = String::from_utf8_lossy(&cdata).into_owned();
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&raw),
                    None => {
                        return Err(Error::invalid(Format::Xml, "text outside the root element"))
                    }
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }
    let root = root.ok_or_else(|| Error::invalid(Format::Xml, "no root element"))?;
    fold(root)
}

/// Writes a [`Value`] as XML under the default `<root>` tag.
pub fn write_xml(value: &Value) -> Result<Vec<u8>> {
    write_xml_with_root(value, DEFAULT_ROOT_TAG)
}

/// Writes a [`Value`] as XML with a caller-chosen root tag.
///
/// Shapes XML cannot encode fail with [`Error::Unrepresentable`]: a sequence
/// at the root (nothing to repeat a tag under), a sequence directly inside a
/// sequence, empty mappings and sequences (their keys would vanish), and keys
/// that are not valid XML names.
pub fn write_xml_with_root(value: &Value, root_tag: &str) -> Result<Vec<u8>> {
    if let Value::Sequence(_) = value {
        return Err(Error::unrepresentable(
            Format::Xml,
            "a top-level sequence has no enclosing tag to repeat",
        ));
    }
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    unfold(&mut out, root_tag, value, 0)?;
    Ok(out.into_bytes())
}

/// A partially-parsed element, kept on the reader's stack until its end tag.
/// Attributes and children share one encounter-ordered list so folding keeps
/// document order.
struct XmlElement {
    name: String,
    text: String,
    entries: Vec<(String, XmlNode)>,
}

enum XmlNode {
    Attribute(String),
    Child(XmlElement),
}

impl XmlElement {
    fn from_tag(tag: &quick_xml::events::BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
        let mut entries = Vec::new();
        for attr in tag.attributes() {
            let attr = attr.map_err(|e| ParseError::Xml(e.into()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let val = attr.unescape_value().map_err(ParseError::from)?.into_owned();
            entries.push((key, XmlNode::Attribute(val)));
        }
        Ok(Self {
            name,
            text: String::new(),
            entries,
        })
    }
}

fn attach(node: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            let name = node.name.clone();
            parent.entries.push((name, XmlNode::Child(node)));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(Error::invalid(Format::Xml, "multiple root elements")),
    }
}

/// Folds an element into the value model. Leaves become inferred scalars;
/// everything else becomes a mapping with repeated names gathered into
/// sequences in encounter order.
///
/// Mixed content (text alongside child elements) has no place in the value
/// model; dropping either half would be a silent loss, so it is rejected.
fn fold(el: XmlElement) -> Result<Value> {
    if el.entries.is_empty() {
        return Ok(infer_scalar(el.text.trim()));
    }
    if !el.text.trim().is_empty() {
        return Err(Error::invalid(
            Format::Xml,
            format!("mixed text and child content in element {:?}", el.name),
        ));
    }
    let mut map = Mapping::new();
    for (name, node) in el.entries {
        let value = match node {
            XmlNode::Attribute(text) => infer_scalar(&text),
            XmlNode::Child(child) => fold(child)?,
        };
        match map.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Sequence(seq) => seq.push(value),
                other => {
                    let first = std::mem::take(other);
                    *other = Value::Sequence(vec![first, value]);
                }
            },
        }
    }
    Ok(Value::Mapping(map))
}

/// Restricted scalar inference for leaf text. Floats are only accepted from
/// digit-shaped spellings so `NaN`, `inf`, and version-like strings stay
/// strings.
fn infer_scalar(text: &str) -> Value {
    match text {
        "" => return Value::String(String::new()),
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = text.parse::<i64>() {
        return Value::Number(Number::Int(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Value::Number(Number::UInt(u));
    }
    let digit_shaped = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if digit_shaped {
        if let Ok(f) = text.parse::<f64>() {
            return Value::Number(Number::Float(f));
        }
    }
    Value::String(text.to_string())
}

fn unfold(buf: &mut String, name: &str, value: &Value, depth: usize) -> Result<()> {
    if !is_valid_xml_name(name) {
        return Err(Error::unrepresentable(
            Format::Xml,
            format!("key {name:?} is not a valid XML element name"),
        ));
    }
    let indent = "  ".repeat(depth);
    match value {
        Value::Mapping(map) => {
            if map.is_empty() {
                return Err(Error::unrepresentable(
                    Format::Xml,
                    format!("empty mapping under {name:?} would not survive a read back"),
                ));
            }
            buf.push_str(&format!("{indent}<{name}>\n"));
            for (key, child) in map {
                unfold(buf, key, child, depth + 1)?;
            }
            buf.push_str(&format!("{indent}</{name}>\n"));
        }
        Value::Sequence(items) => {
            if items.is_empty() {
                return Err(Error::unrepresentable(
                    Format::Xml,
                    format!("empty sequence under {name:?} would not survive a read back"),
                ));
            }
            for item in items {
                if let Value::Sequence(_) = item {
                    return Err(Error::unrepresentable(
                        Format::Xml,
                        format!("sequence directly inside the sequence under {name:?}"),
                    ));
                }
                unfold(buf, name, item, depth)?;
            }
        }
        scalar => {
            let text = match scalar {
                Value::Null => "null".to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::String(s) => escape_text(s),
                Value::Sequence(_) | Value::Mapping(_) => unreachable!(),
            };
            buf.push_str(&format!("{indent}<{name}>{text}</{name}>\n"));
        }
    }
    Ok(())
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_valid_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
