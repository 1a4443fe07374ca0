use std::fmt;
use std::str::FromStr;

use crate::value::error::ValueError;

/// The closed set of stored value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Dword,
    Qword,
    Bool,
    Str,
    List,
    Hex,
    Float,
    Double,
}

impl ValueType {
    /// Every type in probe order. Reads and deletes of a bare name try the
    /// candidate files in exactly this order.
    pub const ALL: [ValueType; 8] = [
        ValueType::Dword,
        ValueType::Qword,
        ValueType::Bool,
        ValueType::Str,
        ValueType::List,
        ValueType::Hex,
        ValueType::Float,
        ValueType::Double,
    ];

    /// Tag used in file names and listings
    pub fn tag(&self) -> &'static str {
        match self {
            ValueType::Dword => "dword",
            ValueType::Qword => "qword",
            ValueType::Bool => "bool",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Hex => "hex",
            ValueType::Float => "float",
            ValueType::Double => "double",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ValueType {
    type Err = ValueError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::from_tag(&tag).ok_or(ValueError::UnknownType(tag))
    }
}

/// A typed registry value.
///
/// `Dword` and `Qword` both hold an `i64`: a value written with an explicit
/// type is stored as given, without range enforcement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Dword(i64),
    Qword(i64),
    Bool(bool),
    Str(String),
    List(Vec<String>),
    Hex(u64),
    Float(f64),
    Double(f64),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Dword(_) => ValueType::Dword,
            Value::Qword(_) => ValueType::Qword,
            Value::Bool(_) => ValueType::Bool,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Hex(_) => ValueType::Hex,
            Value::Float(_) => ValueType::Float,
            Value::Double(_) => ValueType::Double,
        }
    }

    /// Integer content of `Dword`, `Qword` and `Hex` values
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Dword(v) | Value::Qword(v) => Some(i128::from(*v)),
            Value::Hex(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Dword(i64::from(v))
    }
}

impl From<i64> for Value {
    /// `Dword` when the integer fits 32 bits, `Qword` otherwise
    fn from(v: i64) -> Self {
        if i32::try_from(v).is_ok() {
            Value::Dword(v)
        } else {
            Value::Qword(v)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Dword(v) | Value::Qword(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => f.write_str(&items.join("\n")),
            Value::Hex(v) => write!(f, "{v}"),
            Value::Float(v) | Value::Double(v) => write!(f, "{v:?}"),
        }
    }
}
