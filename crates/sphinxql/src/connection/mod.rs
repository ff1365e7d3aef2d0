//! The quoting capability consumed by the clause compiler and statement builders.
//!
//! A [`Connection`] only has to provide the two escaping primitives
//! ([`Connection::quote_identifier`] and [`Connection::quote_string`]); the
//! type-aware value quoting is shared by every implementation through the
//! provided [`Connection::quote_value`].
//!
//! Drivers that talk to a live searchd implement the primitives on top of their
//! own escaping routines. [`OfflineConnection`] does the escaping locally, which
//! is what tests and SQL logging use.

mod config;
mod offline;

pub use config::ConnectionConfig;
pub use offline::OfflineConnection;

use crate::value::{TypeTag, Value, format_float};

/// Quoting capability of a SphinxQL connection.
pub trait Connection {
    /// Quote a database identifier (index, column, attribute).
    fn quote_identifier(&self, name: &str) -> String;

    /// Quote and escape a raw string literal.
    fn quote_string(&self, raw: &str) -> String;

    /// Quote a value for embedding in SQL.
    ///
    /// Without a type tag the rendering follows the value's own variant:
    ///
    /// | Value | Rendering |
    /// |---|---|
    /// | `Null` | `NULL` |
    /// | `Bool` | `1` / `0` |
    /// | `Int` / `UInt` | decimal |
    /// | `Float` | shortest decimal, `NULL` when not finite |
    /// | `String` | [`quote_string`](Connection::quote_string) |
    /// | `Array` | `(a, b, c)`, every element quoted |
    /// | `Json` | quoted compact JSON |
    ///
    /// With a tag the value is coerced to that attribute type first.
    fn quote_value(&self, value: &Value, type_tag: Option<TypeTag>) -> String {
        match type_tag {
            None => self.quote_untyped(value),
            Some(TypeTag::Uint) => value.as_u64_lossy().to_string(),
            Some(TypeTag::Bigint) => value.as_i64_lossy().to_string(),
            Some(TypeTag::Float) => format_float(value.as_f64_lossy()),
            Some(TypeTag::Bool) => if value.truthy() { "1" } else { "0" }.to_string(),
            Some(TypeTag::String) => match value {
                Value::Null => "NULL".to_string(),
                other => self.quote_string(&other.to_plain_string()),
            },
            Some(TypeTag::Json) => match value {
                Value::Json(j) => self.quote_string(&j.to_string()),
                // Strings are assumed to already hold a JSON document.
                Value::String(s) => self.quote_string(s),
                other => self.quote_string(&other.to_json().to_string()),
            },
            Some(TypeTag::Mva) => {
                let items = value
                    .clone()
                    .into_items()
                    .iter()
                    .map(|v| v.as_u64_lossy().min(u64::from(u32::MAX)).to_string())
                    .collect::<Vec<_>>();
                format!("({})", items.join(", "))
            }
            Some(TypeTag::Mva64) => {
                let items = value
                    .clone()
                    .into_items()
                    .iter()
                    .map(|v| v.as_i64_lossy().to_string())
                    .collect::<Vec<_>>();
                format!("({})", items.join(", "))
            }
        }
    }

    /// Quote a value using only its own variant.
    fn quote_untyped(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Value::Int(i) => i.to_string(),
            Value::UInt(u) => u.to_string(),
            Value::Float(f) => format_float(*f),
            Value::String(s) => self.quote_string(s),
            Value::Array(items) => self.quote_value_list(items),
            Value::Json(j) => self.quote_string(&j.to_string()),
        }
    }

    /// Quote every value and wrap the list in parentheses: `(a, b, c)`.
    fn quote_value_list(&self, values: &[Value]) -> String {
        let quoted: Vec<String> = values.iter().map(|v| self.quote_untyped(v)).collect();
        format!("({})", quoted.join(", "))
    }

    /// Quote every identifier and join them with `", "`.
    fn quote_identifier_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|n| self.quote_identifier(n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<C: Connection + ?Sized> Connection for &C {
    fn quote_identifier(&self, name: &str) -> String {
        (**self).quote_identifier(name)
    }

    fn quote_string(&self, raw: &str) -> String {
        (**self).quote_string(raw)
    }

    fn quote_value(&self, value: &Value, type_tag: Option<TypeTag>) -> String {
        (**self).quote_value(value, type_tag)
    }

    fn quote_untyped(&self, value: &Value) -> String {
        (**self).quote_untyped(value)
    }

    fn quote_value_list(&self, values: &[Value]) -> String {
        (**self).quote_value_list(values)
    }

    fn quote_identifier_list(&self, names: &[String]) -> String {
        (**self).quote_identifier_list(names)
    }
}
