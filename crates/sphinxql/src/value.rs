//! Parameter values and SphinxQL attribute type tags.
//!
//! [`Value`] is the opaque parameter type carried by expressions and statement
//! builders. How a value is rendered is decided by the [`Connection`] at compile
//! time, optionally steered by a [`TypeTag`].
//!
//! [`Connection`]: crate::connection::Connection

use crate::error::{SphinxError, SphinxResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parameter value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// SQL NULL
    #[default]
    Null,
    /// Boolean, rendered as `1` / `0`
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point
    Float(f64),
    /// Text
    String(String),
    /// Ordered list (IN lists, MVA values)
    Array(Vec<Value>),
    /// JSON document
    Json(serde_json::Value),
}

/// SphinxQL attribute types that can steer value quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// 32-bit unsigned integer attribute
    Uint,
    /// Boolean attribute
    Bool,
    /// 64-bit signed integer attribute
    Bigint,
    /// Float attribute
    Float,
    /// String attribute
    String,
    /// JSON attribute
    Json,
    /// Multi-valued attribute of 32-bit unsigned integers
    Mva,
    /// Multi-valued attribute of 64-bit signed integers
    Mva64,
}

impl TypeTag {
    /// SphinxQL name of the attribute type.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Uint => "uint",
            TypeTag::Bool => "bool",
            TypeTag::Bigint => "bigint",
            TypeTag::Float => "float",
            TypeTag::String => "string",
            TypeTag::Json => "json",
            TypeTag::Mva => "mva",
            TypeTag::Mva64 => "mva64",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = SphinxError;

    fn from_str(s: &str) -> SphinxResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uint" | "integer" | "timestamp" => Ok(TypeTag::Uint),
            "bool" => Ok(TypeTag::Bool),
            "bigint" => Ok(TypeTag::Bigint),
            "float" => Ok(TypeTag::Float),
            "string" => Ok(TypeTag::String),
            "json" => Ok(TypeTag::Json),
            "mva" | "multi" => Ok(TypeTag::Mva),
            "mva64" | "multi_64" => Ok(TypeTag::Mva64),
            other => Err(SphinxError::invalid_argument(format!(
                "Unknown attribute type '{other}'"
            ))),
        }
    }
}

impl Value {
    /// Check if this is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a list value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Unquoted textual form, used when a value stands in for an identifier
    /// or for raw (unquoted) substitution.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Value::Int(i) => i.to_string(),
            Value::UInt(u) => u.to_string(),
            Value::Float(f) => format_float(*f),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(Value::to_plain_string)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Json(j) => j.to_string(),
        }
    }

    /// Truthiness used for `bool` attributes.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::UInt(u) => *u != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty() && s != "0",
            Value::Array(items) => !items.is_empty(),
            Value::Json(j) => !j.is_null(),
        }
    }

    /// Best-effort signed integer coercion (non-numeric values become 0).
    pub fn as_i64_lossy(&self) -> i64 {
        match self {
            Value::Null | Value::Array(_) | Value::Json(_) => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Int(i) => *i,
            Value::UInt(u) => i64::try_from(*u).unwrap_or(i64::MAX),
            Value::Float(f) if f.is_finite() => f.trunc() as i64,
            Value::Float(_) => 0,
            Value::String(s) => parse_leading_number(s).map_or(0, |f| f.trunc() as i64),
        }
    }

    /// Best-effort unsigned integer coercion (negatives clamp to 0).
    pub fn as_u64_lossy(&self) -> u64 {
        match self {
            Value::UInt(u) => *u,
            other => u64::try_from(other.as_i64_lossy()).unwrap_or(0),
        }
    }

    /// Best-effort float coercion.
    pub fn as_f64_lossy(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            Value::Int(i) => *i as f64,
            Value::UInt(u) => *u as f64,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::String(s) => parse_leading_number(s).unwrap_or(0.0),
            Value::Null | Value::Array(_) | Value::Json(_) => 0.0,
        }
    }

    /// Convert into a JSON document. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::UInt(u) => serde_json::Value::from(*u),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Json(j) => j.clone(),
        }
    }

    /// Elements of a list value, or the value itself as a one-element list.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Value::Array(items) => items,
            other => vec![other],
        }
    }
}

/// Render a float in its shortest round-trip decimal form.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() {
        f.to_string()
    } else {
        "NULL".to_string()
    }
}

fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .take_while(|&(i, c)| {
            c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)
        })
        .last()
        .map(|(i, c)| i + c.len_utf8())?;
    s[..end].parse().ok()
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::Array(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

/// Timestamps are stored as unix seconds in SphinxQL attributes.
impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Int(v.timestamp())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            obj @ serde_json::Value::Object(_) => Value::Json(obj),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn from_scalars() {
        assert_eq!(Value::from(1i32), Value::Int(1));
        assert_eq!(Value::from(1u32), Value::UInt(1));
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::Array(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn from_json_splits_arrays_and_objects() {
        let v = Value::from(serde_json::json!([1, "a", {"k": true}]));
        assert_eq!(
            v,
            Value::Array(vec![
                Value::Int(1),
                Value::String("a".to_string()),
                Value::Json(serde_json::json!({"k": true})),
            ])
        );
    }

    #[test]
    fn from_datetime_is_unix_seconds() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Value::from(ts), Value::Int(1_577_836_800));
    }

    #[test]
    fn lossy_coercions() {
        assert_eq!(Value::from("42abc").as_i64_lossy(), 42);
        assert_eq!(Value::from(-3i32).as_u64_lossy(), 0);
        assert_eq!(Value::from(2.9f64).as_i64_lossy(), 2);
        assert_eq!(Value::from("1.5").as_f64_lossy(), 1.5);
        assert!(!Value::from("0").truthy());
        assert!(Value::from("yes").truthy());
    }

    #[test]
    fn format_float_is_shortest() {
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(f64::NAN), "NULL");
    }

    #[test]
    fn type_tag_parses() {
        assert_eq!("BIGINT".parse::<TypeTag>().unwrap(), TypeTag::Bigint);
        assert_eq!("multi_64".parse::<TypeTag>().unwrap(), TypeTag::Mva64);
        assert!("decimal".parse::<TypeTag>().is_err());
        assert_eq!(
            serde_json::to_string(&TypeTag::Mva64).unwrap(),
            "\"mva64\""
        );
    }
}
