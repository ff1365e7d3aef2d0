//! The `OPTION` clause of SELECT and UPDATE.

use crate::connection::Connection;
use crate::value::Value;

/// Value of a single option.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// Quoted through the connection: `max_matches = 1000`, `comment = 'x'`.
    Value(Value),
    /// Emitted as-is: `ranker = bm25`.
    Raw(String),
    /// Parenthesized `name = value` list: `field_weights = (title = 10, body = 3)`.
    Named(Vec<(String, Value)>),
}

impl OptionValue {
    /// A raw token emitted without quoting.
    pub fn raw(token: impl Into<String>) -> Self {
        OptionValue::Raw(token.into())
    }

    /// A parenthesized list of named values.
    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        OptionValue::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

macro_rules! impl_option_value_from {
    ($($t:ty),*) => {
        $(impl From<$t> for OptionValue {
            fn from(v: $t) -> Self {
                OptionValue::Value(Value::from(v))
            }
        })*
    };
}

impl_option_value_from!(bool, i32, i64, u32, u64, f64, &str, String, Value);

/// An ordered list of options; setting an existing name replaces its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionClause {
    options: Vec<(String, OptionValue)>,
}

impl OptionClause {
    /// Create an empty clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.options.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.options.push((name, value)),
        }
    }

    /// Check if no option is set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Render the text following `OPTION`.
    pub fn compile(&self, conn: &dyn Connection) -> String {
        self.options
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    OptionValue::Value(v) => conn.quote_value(v, None),
                    OptionValue::Raw(token) => token.clone(),
                    OptionValue::Named(pairs) => {
                        let inner: Vec<String> = pairs
                            .iter()
                            .map(|(k, v)| format!("{k} = {}", conn.quote_value(v, None)))
                            .collect();
                        format!("({})", inner.join(", "))
                    }
                };
                format!("{name} = {rendered}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
