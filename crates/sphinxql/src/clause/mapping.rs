//! Key/value shorthand for WHERE/HAVING ingestion.

use crate::error::{SphinxError, SphinxResult};
use crate::expr::Expression;
use crate::value::Value;

/// Key of a [`Mapping`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingKey {
    /// Positional entry (no name), numbered from 0.
    Position(usize),
    /// Named entry: a column name or a template with `?` placeholders.
    Name(String),
}

impl std::fmt::Display for MappingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingKey::Position(i) => write!(f, "position {i}"),
            MappingKey::Name(name) => write!(f, "key '{name}'"),
        }
    }
}

/// Value of a [`Mapping`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingValue {
    Value(Value),
    Node(Expression),
}

impl From<Value> for MappingValue {
    fn from(v: Value) -> Self {
        MappingValue::Value(v)
    }
}

impl From<Expression> for MappingValue {
    fn from(v: Expression) -> Self {
        MappingValue::Node(v)
    }
}

macro_rules! impl_mapping_value_from {
    ($($t:ty),*) => {
        $(impl From<$t> for MappingValue {
            fn from(v: $t) -> Self {
                MappingValue::Value(Value::from(v))
            }
        })*
    };
}

impl_mapping_value_from!(bool, i32, i64, u32, u64, f64, &str, String);

/// An ordered list of keyed and positional entries.
///
/// Each entry is turned into one predicate when added to a
/// [`Where`](super::Where):
///
/// | Entry | Predicate |
/// |---|---|
/// | named, key contains `?` | raw expression, key as template, value spread into parameters |
/// | named, list value | `key IN (values...)` |
/// | named, other value | `key = value` |
/// | positional expression | the expression itself |
/// | positional string | literal SQL |
///
/// Whether a key is a template is decided by a plain scan for `?`, so a column
/// name containing `?` is always read as a template.
///
/// # Example
/// ```ignore
/// let m = Mapping::new()
///     .set("category", 3)
///     .set("tag", vec![1, 2, 3])
///     .set("price BETWEEN ? AND ?", vec![10, 20])
///     .push(Expression::match_query("rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(MappingKey, MappingValue)>,
    next_position: usize,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named entry.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((
            MappingKey::Name(key.into()),
            MappingValue::Value(value.into()),
        ));
        self
    }

    /// Add a named entry holding an expression (rejected on ingestion).
    pub fn set_node(mut self, key: impl Into<String>, expr: Expression) -> Self {
        self.entries
            .push((MappingKey::Name(key.into()), MappingValue::Node(expr)));
        self
    }

    /// Add a positional entry.
    pub fn push(mut self, value: impl Into<MappingValue>) -> Self {
        let key = MappingKey::Position(self.next_position);
        self.next_position += 1;
        self.entries.push((key, value.into()));
        self
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(MappingKey, MappingValue)] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Objects become named entries (in document order), arrays become positional
/// entries. Any other JSON value is rejected.
impl TryFrom<serde_json::Value> for Mapping {
    type Error = SphinxError;

    fn try_from(json: serde_json::Value) -> SphinxResult<Self> {
        match json {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .fold(Mapping::new(), |m, (k, v)| m.set(k, Value::from(v)))),
            serde_json::Value::Array(items) => Ok(items
                .into_iter()
                .fold(Mapping::new(), |m, v| m.push(Value::from(v)))),
            other => Err(SphinxError::invalid_argument(format!(
                "Expected a JSON object or array for a where mapping, got {other}"
            ))),
        }
    }
}
