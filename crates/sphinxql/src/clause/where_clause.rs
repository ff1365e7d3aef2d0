//! The WHERE/HAVING container shared by statement builders.

use super::compiler::compile_clause;
use super::mapping::{Mapping, MappingKey, MappingValue};
use crate::connection::Connection;
use crate::error::{SphinxError, SphinxResult};
use crate::expr::template::has_placeholder;
use crate::expr::{Expression, PredicateSet};
use crate::value::Value;
use std::fmt;

type WhereCallback = Box<dyn FnOnce(&mut Where) -> SphinxResult<()>>;

/// Everything [`Where::add`] accepts.
pub enum WhereInput {
    /// Replaces the current predicates wholesale.
    Where(Where),
    /// Replaces the current predicates wholesale.
    Predicates(PredicateSet),
    /// Appended.
    Node(Expression),
    /// Appended as literal SQL.
    Literal(String),
    /// Each entry appended as one predicate.
    Mapping(Mapping),
    /// Invoked with the container.
    Callback(WhereCallback),
}

impl WhereInput {
    /// Wrap a callback that composes predicates on the container.
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(&mut Where) -> SphinxResult<()> + 'static,
    {
        WhereInput::Callback(Box::new(f))
    }
}

impl fmt::Debug for WhereInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhereInput::Where(w) => f.debug_tuple("Where").field(w).finish(),
            WhereInput::Predicates(p) => f.debug_tuple("Predicates").field(p).finish(),
            WhereInput::Node(n) => f.debug_tuple("Node").field(n).finish(),
            WhereInput::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            WhereInput::Mapping(m) => f.debug_tuple("Mapping").field(m).finish(),
            WhereInput::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<Where> for WhereInput {
    fn from(v: Where) -> Self {
        WhereInput::Where(v)
    }
}

impl From<PredicateSet> for WhereInput {
    fn from(v: PredicateSet) -> Self {
        WhereInput::Predicates(v)
    }
}

impl From<Expression> for WhereInput {
    fn from(v: Expression) -> Self {
        WhereInput::Node(v)
    }
}

impl From<&str> for WhereInput {
    fn from(v: &str) -> Self {
        WhereInput::Literal(v.to_string())
    }
}

impl From<String> for WhereInput {
    fn from(v: String) -> Self {
        WhereInput::Literal(v)
    }
}

impl From<Mapping> for WhereInput {
    fn from(v: Mapping) -> Self {
        WhereInput::Mapping(v)
    }
}

/// A WHERE or HAVING clause: one [`PredicateSet`] plus the ingestion rules that
/// normalize caller input into predicates.
///
/// Cloning is a deep copy, so two statement builders never share predicates.
///
/// # Example
/// ```ignore
/// let mut w = Where::new();
/// w.add(Expression::eq("category", 3))?
///     .add("weight() > 10")?
///     .add(Mapping::new().set("tag", vec![1, 2]))?;
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Where {
    predicates: PredicateSet,
}

impl Where {
    /// Create an empty clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clause around an existing predicate set.
    pub fn from_predicates(predicates: PredicateSet) -> Self {
        Self { predicates }
    }

    /// The predicates, in order.
    pub fn predicates(&self) -> &PredicateSet {
        &self.predicates
    }

    /// Mutable access to the predicates.
    pub fn predicates_mut(&mut self) -> &mut PredicateSet {
        &mut self.predicates
    }

    /// Check if the clause has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Add input of any supported shape.
    ///
    /// A [`Where`] or [`PredicateSet`] replaces the current predicates; everything
    /// else appends. On error the clause is left unchanged.
    pub fn add(&mut self, input: impl Into<WhereInput>) -> SphinxResult<&mut Self> {
        match input.into() {
            WhereInput::Where(other) => Ok(self.add_where(other)),
            WhereInput::Predicates(set) => Ok(self.add_predicates(set)),
            WhereInput::Node(expr) => Ok(self.add_node(expr)),
            WhereInput::Literal(sql) => Ok(self.add_literal(sql)),
            WhereInput::Mapping(mapping) => self.add_mapping(mapping),
            WhereInput::Callback(f) => self.add_with(f),
        }
    }

    /// Replace the current predicates with those of `other`.
    pub fn add_where(&mut self, other: Where) -> &mut Self {
        self.predicates = other.predicates;
        self
    }

    /// Replace the current predicates with `set`.
    pub fn add_predicates(&mut self, set: PredicateSet) -> &mut Self {
        self.predicates = set;
        self
    }

    /// Append a node.
    pub fn add_node(&mut self, expr: Expression) -> &mut Self {
        self.predicates.add(expr);
        self
    }

    /// Append a literal SQL fragment.
    pub fn add_literal(&mut self, sql: impl Into<String>) -> &mut Self {
        self.predicates.add(Expression::literal(sql));
        self
    }

    /// Run a callback that composes predicates on this clause.
    ///
    /// The callback works on a copy that is committed only if it succeeds.
    pub fn add_with<F>(&mut self, f: F) -> SphinxResult<&mut Self>
    where
        F: FnOnce(&mut Where) -> SphinxResult<()>,
    {
        let mut scratch = self.clone();
        f(&mut scratch)?;
        *self = scratch;
        Ok(self)
    }

    /// Append one predicate per mapping entry.
    ///
    /// All entries are validated before anything is appended.
    pub fn add_mapping(&mut self, mapping: Mapping) -> SphinxResult<&mut Self> {
        let mut nodes = Vec::with_capacity(mapping.len());
        for (key, value) in mapping.entries() {
            nodes.push(entry_to_expression(key, value)?);
        }
        for node in nodes {
            self.predicates.add(node);
        }
        Ok(self)
    }

    /// Compile to the text following `WHERE` / `HAVING` (empty if there are no predicates).
    pub fn compile(&self, conn: &dyn Connection) -> String {
        compile_clause(&self.predicates, conn)
    }
}

impl From<PredicateSet> for Where {
    fn from(predicates: PredicateSet) -> Self {
        Self::from_predicates(predicates)
    }
}

fn entry_to_expression(key: &MappingKey, value: &MappingValue) -> SphinxResult<Expression> {
    match (key, value) {
        (MappingKey::Position(_), MappingValue::Node(expr)) => Ok(expr.clone()),
        (MappingKey::Position(_), MappingValue::Value(Value::String(sql))) => {
            Ok(Expression::literal(sql.clone()))
        }
        (MappingKey::Position(_), MappingValue::Value(other)) => Err(SphinxError::invalid_entry(
            key.to_string(),
            format!("expected an expression or a SQL string, got {other:?}"),
        )),
        (MappingKey::Name(_), MappingValue::Node(_)) => Err(SphinxError::invalid_entry(
            key.to_string(),
            "expressions must be added as positional entries",
        )),
        (MappingKey::Name(name), MappingValue::Value(value)) => {
            if has_placeholder(name) {
                Expression::raw(name.clone(), value.clone().into_items())
            } else if let Value::Array(items) = value {
                Expression::in_list(name.clone(), items.clone())
            } else {
                Ok(Expression::eq(name.clone(), value.clone()))
            }
        }
    }
}
