use serde_json::Value as JsonValue;

use crate::value::error::ValueError;
use crate::value::types::{Value, ValueType};

/// Largest magnitude still stored as `float` when inferring a type
const FLOAT_MAX_MAGNITUDE: f64 = 3.4e38;

/// Text accepted as `true` for `bool` values, compared after trimming and lower-casing
const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];

/// Infer a typed value from a dynamically typed input.
///
/// Booleans become `bool`, integers `dword` when they fit 32 bits and `qword`
/// otherwise, floats `float` below 3.4e38 in magnitude and `double` above,
/// arrays of scalars `list`, strings `str`. Anything else is rejected.
pub fn infer(input: &JsonValue) -> Result<Value, ValueError> {
    match input {
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Err(ValueError::OutOfRange {
                    value: i128::from(u),
                    ty: ValueType::Qword,
                })
            } else {
                let f = n.as_f64().ok_or_else(|| ValueError::UnsupportedType(n.to_string()))?;
                if f.abs() < FLOAT_MAX_MAGNITUDE {
                    Ok(Value::Float(f))
                } else {
                    Ok(Value::Double(f))
                }
            }
        }
        JsonValue::String(s) => Ok(Value::Str(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Option<Vec<_>>>()
            .map(Value::List)
            .ok_or_else(|| ValueError::UnsupportedType(describe(input))),
        JsonValue::Null | JsonValue::Object(_) => Err(ValueError::UnsupportedType(describe(input))),
    }
}

/// Type of the value [`infer`] would produce
pub fn infer_type(input: &JsonValue) -> Result<ValueType, ValueError> {
    infer(input).map(|v| v.value_type())
}

/// On-disk text of a typed value
pub fn serialize(value: &Value) -> String {
    match value {
        Value::Bool(b) => String::from(if *b { "1" } else { "0" }),
        Value::Dword(v) | Value::Qword(v) => v.to_string(),
        Value::Float(v) | Value::Double(v) => format_float(*v),
        Value::Hex(v) => format_hex(*v),
        Value::List(items) => join_list(items.iter().map(String::as_str)),
        Value::Str(s) => s.clone(),
    }
}

/// Serialize a dynamically typed input, either as an explicit type or inferred.
///
/// With an explicit type the input is stored as given: no integer range
/// checks, and string inputs are written verbatim (except `hex`, which is
/// always normalized and validated).
pub fn encode(input: &JsonValue, ty: Option<ValueType>) -> Result<(ValueType, String), ValueError> {
    let Some(ty) = ty else {
        let value = infer(input)?;
        return Ok((value.value_type(), serialize(&value)));
    };

    let mismatch = || ValueError::Mismatch { input: describe(input), ty };
    let text = match (ty, input) {
        (ValueType::Hex, JsonValue::String(s)) => normalize_hex(s)?,
        (ValueType::Hex, JsonValue::Number(n)) => n.as_u64().map(format_hex).ok_or_else(mismatch)?,
        (_, JsonValue::String(s)) => s.clone(),
        (ValueType::Bool, JsonValue::Bool(b)) => serialize(&Value::Bool(*b)),
        (ValueType::Bool, JsonValue::Number(n)) => n.to_string(),
        (ValueType::Dword | ValueType::Qword, JsonValue::Number(n)) => n.to_string(),
        (ValueType::Float | ValueType::Double, JsonValue::Number(n)) => {
            n.as_f64().map(format_float).ok_or_else(mismatch)?
        }
        (ValueType::Str, JsonValue::Number(n)) => n.to_string(),
        (ValueType::Str, JsonValue::Bool(b)) => b.to_string(),
        (ValueType::List, JsonValue::Array(items)) => {
            let items = items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(mismatch)?;
            join_list(items.iter().map(String::as_str))
        }
        _ => return Err(mismatch()),
    };
    Ok((ty, text))
}

/// Decode stored text as the given type
pub fn deserialize(text: &str, ty: ValueType) -> Result<Value, ValueError> {
    let decode_err = |reason: String| ValueError::Decode {
        text: text.to_string(),
        ty,
        reason,
    };

    match ty {
        ValueType::Dword | ValueType::Qword => {
            let v = text.trim().parse::<i64>().map_err(|e| decode_err(e.to_string()))?;
            Ok(if ty == ValueType::Dword { Value::Dword(v) } else { Value::Qword(v) })
        }
        ValueType::Float | ValueType::Double => {
            let v = text.trim().parse::<f64>().map_err(|e| decode_err(e.to_string()))?;
            Ok(if ty == ValueType::Float { Value::Float(v) } else { Value::Double(v) })
        }
        ValueType::Hex => {
            let digits = strip_hex_prefix(text.trim());
            u64::from_str_radix(digits, 16)
                .map(Value::Hex)
                .map_err(|e| decode_err(e.to_string()))
        }
        ValueType::Bool => {
            let lowered = text.trim().to_lowercase();
            Ok(Value::Bool(TRUTHY.contains(&lowered.as_str())))
        }
        ValueType::List => Ok(Value::List(split_list(text))),
        ValueType::Str => Ok(Value::Str(text.to_string())),
    }
}

/// Lower-case, strip an optional `0x`, and require an even count of hex digits
/// whose value fits 64 bits. Leading zeros are kept.
pub fn normalize_hex(input: &str) -> Result<String, ValueError> {
    let lowered = input.trim().to_lowercase();
    let digits = strip_hex_prefix(&lowered);
    let valid = !digits.is_empty()
        && digits.len() % 2 == 0
        && digits.chars().all(|c| c.is_ascii_hexdigit())
        && digits.trim_start_matches('0').len() <= MAX_HEX_DIGITS;
    if valid {
        Ok(digits.to_string())
    } else {
        Err(ValueError::InvalidHex(input.to_string()))
    }
}

/// Significant digits of a `u64`
const MAX_HEX_DIGITS: usize = 16;

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

fn format_hex(v: u64) -> String {
    let digits = format!("{v:x}");
    if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits
    }
}

// Debug keeps a fractional part ("3.0") and uses exponents for large magnitudes
fn format_float(v: f64) -> String {
    format!("{v:?}")
}

fn join_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| item.replace(',', "\\,"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split on commas not preceded by a backslash, trim, and unescape `\,`.
fn split_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                chars.next();
                current.push(',');
            }
            ',' => items.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    items.push(current);

    items.into_iter().map(|item| item.trim().to_string()).collect()
}

fn scalar_text(item: &JsonValue) -> Option<String> {
    match item {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn describe(input: &JsonValue) -> String {
    match input {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(_) => "a boolean".to_string(),
        JsonValue::Number(n) => format!("number {n}"),
        JsonValue::String(_) => "a string".to_string(),
        JsonValue::Array(_) => "an array".to_string(),
        JsonValue::Object(_) => "an object".to_string(),
    }
}
