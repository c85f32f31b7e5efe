//! JSON-Cadence decoding
//!
//! Access nodes return script results in the JSON-Cadence interchange format,
//! where every value is wrapped as `{"type": ..., "value": ...}`. [`decode`]
//! flattens that into plain JSON: optionals are unwrapped, composites become
//! objects keyed by field name and numbers keep their exact decimal text.

use crate::error::FlowAccessError;
use serde_json::{Map, Value};

const NUMBER_KINDS: &[&str] = &[
    "Int", "Int8", "Int16", "Int32", "Int64", "Int128", "Int256", "UInt", "UInt8", "UInt16",
    "UInt32", "UInt64", "UInt128", "UInt256", "Word8", "Word16", "Word32", "Word64", "Word128",
    "Word256", "Fix64", "UFix64",
];

const COMPOSITE_KINDS: &[&str] = &["Struct", "Resource", "Event", "Contract", "Enum"];

type Result<T> = std::result::Result<T, FlowAccessError>;

/// Decode a JSON-Cadence value into plain JSON.
pub fn decode(value: &Value) -> Result<Value> {
    let object = value
        .as_object()
        .ok_or_else(|| FlowAccessError::parse_error("cadence value is not an object"))?;
    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| FlowAccessError::parse_error("cadence value has no type"))?;
    let inner = object.get("value").unwrap_or(&Value::Null);

    match kind {
        "Void" => Ok(Value::Null),
        "Optional" if inner.is_null() => Ok(Value::Null),
        "Optional" => decode(inner),
        "Bool" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| FlowAccessError::parse_error("Bool value is not a boolean")),
        "String" | "Character" | "Address" => text(kind, inner),
        kind if NUMBER_KINDS.contains(&kind) => text(kind, inner),
        "Array" => inner
            .as_array()
            .ok_or_else(|| FlowAccessError::parse_error("Array value is not a list"))?
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        "Dictionary" => decode_dictionary(inner),
        kind if COMPOSITE_KINDS.contains(&kind) => decode_composite(inner),
        "Path" => {
            let domain = field_str(inner, "domain")?;
            let identifier = field_str(inner, "identifier")?;
            Ok(Value::String(format!("/{domain}/{identifier}")))
        }
        "Type" => Ok(type_id(inner.get("staticType").unwrap_or(&Value::Null))),
        "Capability" => Ok(inner.clone()),
        other => Err(FlowAccessError::UnsupportedCadence(other.to_string())),
    }
}

fn text(kind: &str, inner: &Value) -> Result<Value> {
    inner
        .as_str()
        .map(|s| Value::String(s.to_owned()))
        .ok_or_else(|| FlowAccessError::parse_error(format!("{kind} value is not a string")))
}

fn decode_dictionary(inner: &Value) -> Result<Value> {
    let entries = inner
        .as_array()
        .ok_or_else(|| FlowAccessError::parse_error("Dictionary value is not a list"))?;

    let mut map = Map::with_capacity(entries.len());
    for entry in entries {
        let key = entry
            .get("key")
            .ok_or_else(|| FlowAccessError::parse_error("Dictionary entry without key"))?;
        let value = entry
            .get("value")
            .ok_or_else(|| FlowAccessError::parse_error("Dictionary entry without value"))?;

        let key = match decode(key)? {
            Value::String(s) => s,
            Value::Null => return Err(FlowAccessError::parse_error("Dictionary key is nil")),
            other => other.to_string(),
        };
        map.insert(key, decode(value)?);
    }
    Ok(Value::Object(map))
}

fn decode_composite(inner: &Value) -> Result<Value> {
    let fields = inner
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| FlowAccessError::parse_error("composite value has no fields"))?;

    let mut map = Map::with_capacity(fields.len());
    for field in fields {
        let name = field_str(field, "name")?;
        let value = field
            .get("value")
            .ok_or_else(|| FlowAccessError::parse_error(format!("field {name} has no value")))?;
        map.insert(name.to_owned(), decode(value)?);
    }
    Ok(Value::Object(map))
}

fn field_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| FlowAccessError::parse_error(format!("missing string field {field}")))
}

// Older nodes send the static type as a plain string, newer ones as an object.
fn type_id(static_type: &Value) -> Value {
    match static_type {
        Value::Object(obj) => obj
            .get("typeID")
            .cloned()
            .unwrap_or_else(|| static_type.clone()),
        other => other.clone(),
    }
}
