//! Expression nodes for WHERE/HAVING clauses.
//!
//! Every node reduces to an [`ExprData`]: a template with `?` placeholders, the
//! parameters in placeholder order, and one [`Kind`] per parameter. The clause
//! compiler only ever looks at that triple (plus the quoting bypass flag), so a
//! custom [`Predicate`] is as good as any built-in node.

use super::kind::{IntoKind, IntoOp, Kind, Op};
use super::template::count_placeholders;
use crate::error::{SphinxError, SphinxResult};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// The `(template, parameters, kinds)` triple every expression reduces to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprData {
    template: String,
    parameters: Vec<Value>,
    kinds: Vec<Kind>,
    bypass_quoting: bool,
}

impl ExprData {
    /// Create expression data, checking that parameters, kinds and placeholders line up.
    pub fn new(
        template: impl Into<String>,
        parameters: Vec<Value>,
        kinds: Vec<Kind>,
    ) -> SphinxResult<Self> {
        let template = template.into();
        let placeholders = count_placeholders(&template);
        if placeholders != parameters.len() {
            return Err(SphinxError::invalid_argument(format!(
                "Template '{template}' has {placeholders} placeholder(s) but {} parameter(s) were given",
                parameters.len()
            )));
        }
        if kinds.len() != parameters.len() {
            return Err(SphinxError::invalid_argument(format!(
                "Template '{template}' has {} parameter(s) but {} kind(s)",
                parameters.len(),
                kinds.len()
            )));
        }
        Ok(Self::unchecked(template, parameters, kinds))
    }

    /// Data for a verbatim SQL fragment without parameters.
    pub fn literal(sql: impl Into<String>) -> Self {
        Self::unchecked(sql.into(), Vec::new(), Vec::new())
    }

    pub(crate) fn unchecked(template: String, parameters: Vec<Value>, kinds: Vec<Kind>) -> Self {
        Self {
            template,
            parameters,
            kinds,
            bypass_quoting: false,
        }
    }

    /// Insert parameters as raw text instead of quoting them, the way `MATCH()`
    /// does. The caller is responsible for escaping.
    pub fn bypassing_quotes(mut self) -> Self {
        self.bypass_quoting = true;
        self
    }

    /// Template with `?` placeholders.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameters in placeholder order.
    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    /// Kind of every parameter.
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    /// Whether parameters are inserted as raw text instead of being quoted.
    pub fn bypass_quoting(&self) -> bool {
        self.bypass_quoting
    }
}

/// An open extension point: anything that can describe itself as [`ExprData`].
///
/// # Example
/// ```ignore
/// #[derive(Debug)]
/// struct GeoWithin { radius: f64 }
///
/// impl Predicate for GeoWithin {
///     fn data(&self) -> ExprData {
///         ExprData::new("GEODIST(lat, lon, ?, ?) < ?", /* ... */).unwrap()
///     }
/// }
/// ```
pub trait Predicate: fmt::Debug {
    fn data(&self) -> ExprData;
}

/// The variant of an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Raw,
    Operator,
    Between,
    In,
    NotIn,
    Match,
    Literal,
    Custom,
}

#[derive(Clone)]
enum ExpressionInner {
    /// Caller-supplied template.
    Raw {
        template: String,
        parameters: Vec<Value>,
        kinds: Vec<Kind>,
    },
    Operator {
        left: Value,
        op: Op,
        right: Value,
        left_kind: Kind,
        right_kind: Kind,
    },
    Between {
        identifier: String,
        min: Value,
        max: Value,
    },
    In {
        identifier: String,
        values: Vec<Value>,
    },
    NotIn {
        identifier: String,
        values: Vec<Value>,
    },
    /// Full-text query, inserted without quoting.
    Match(String),
    /// Verbatim SQL.
    Literal(String),
    Custom(Arc<dyn Predicate + Send + Sync>),
}

/// A predicate or expression node.
///
/// Nodes are immutable values; cloning one is a deep copy (custom predicates are
/// shared read-only).
#[derive(Clone)]
pub struct Expression(ExpressionInner);

impl Expression {
    /// Create a raw expression; every parameter is quoted as a value.
    ///
    /// Fails if the number of `?` placeholders differs from the number of parameters.
    pub fn raw<I, V>(template: impl Into<String>, parameters: I) -> SphinxResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let parameters: Vec<Value> = parameters.into_iter().map(Into::into).collect();
        let kinds = vec![Kind::Value; parameters.len()];
        Self::raw_with_kinds(template, parameters, kinds)
    }

    /// Create a raw expression with an explicit kind per parameter.
    pub fn raw_with_kinds<I, V, K, KI>(
        template: impl Into<String>,
        parameters: I,
        kinds: KI,
    ) -> SphinxResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
        KI: IntoIterator<Item = K>,
        K: IntoKind,
    {
        let kinds = kinds
            .into_iter()
            .map(IntoKind::into_kind)
            .collect::<SphinxResult<Vec<_>>>()?;
        let data = ExprData::new(
            template,
            parameters.into_iter().map(Into::into).collect(),
            kinds,
        )?;
        Ok(Expression(ExpressionInner::Raw {
            template: data.template,
            parameters: data.parameters,
            kinds: data.kinds,
        }))
    }

    /// Create an operator predicate: `left <op> right`, with `left` as identifier
    /// and `right` as value.
    pub fn operator<O: IntoOp>(
        left: impl Into<Value>,
        op: O,
        right: impl Into<Value>,
    ) -> SphinxResult<Self> {
        Self::operator_with_kinds(left, op, right, Kind::Identifier, Kind::Value)
    }

    /// Create an operator predicate with explicit kinds for both sides.
    pub fn operator_with_kinds<O, LK, RK>(
        left: impl Into<Value>,
        op: O,
        right: impl Into<Value>,
        left_kind: LK,
        right_kind: RK,
    ) -> SphinxResult<Self>
    where
        O: IntoOp,
        LK: IntoKind,
        RK: IntoKind,
    {
        Ok(Expression(ExpressionInner::Operator {
            left: left.into(),
            op: op.into_op()?,
            right: right.into(),
            left_kind: left_kind.into_kind()?,
            right_kind: right_kind.into_kind()?,
        }))
    }

    fn compare(identifier: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Expression(ExpressionInner::Operator {
            left: Value::String(identifier.into()),
            op,
            right: value.into(),
            left_kind: Kind::Identifier,
            right_kind: Kind::Value,
        })
    }

    /// `identifier = value`
    pub fn eq(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(identifier, Op::Eq, value)
    }

    /// `identifier != value`
    pub fn ne(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(identifier, Op::Ne, value)
    }

    /// `identifier < value`
    pub fn lt(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(identifier, Op::Lt, value)
    }

    /// `identifier <= value`
    pub fn lte(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(identifier, Op::Lte, value)
    }

    /// `identifier > value`
    pub fn gt(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(identifier, Op::Gt, value)
    }

    /// `identifier >= value`
    pub fn gte(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(identifier, Op::Gte, value)
    }

    /// `identifier BETWEEN min AND max`
    pub fn between(
        identifier: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        Expression(ExpressionInner::Between {
            identifier: identifier.into(),
            min: min.into(),
            max: max.into(),
        })
    }

    /// `identifier IN (values...)`. Fails on an empty list.
    pub fn in_list<I, V>(identifier: impl Into<String>, values: I) -> SphinxResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let identifier = identifier.into();
        let values = collect_list(&identifier, "IN", values)?;
        Ok(Expression(ExpressionInner::In { identifier, values }))
    }

    /// `identifier NOT IN (values...)`. Fails on an empty list.
    pub fn not_in<I, V>(identifier: impl Into<String>, values: I) -> SphinxResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let identifier = identifier.into();
        let values = collect_list(&identifier, "NOT IN", values)?;
        Ok(Expression(ExpressionInner::NotIn { identifier, values }))
    }

    /// `MATCH('query')`.
    ///
    /// One pair of enclosing single quotes is removed when no other `'` occurs in
    /// the text. Double quotes are full-text phrase syntax and are always kept.
    /// The query text is inserted as-is: escape user input with
    /// [`escape_match`](crate::fulltext::escape_match) or
    /// [`half_escape_match`](crate::fulltext::half_escape_match) first.
    pub fn match_query(query: impl AsRef<str>) -> Self {
        Expression(ExpressionInner::Match(strip_sql_quotes(query.as_ref()).to_string()))
    }

    /// A verbatim SQL fragment.
    pub fn literal(sql: impl Into<String>) -> Self {
        Expression(ExpressionInner::Literal(sql.into()))
    }

    /// Wrap a custom predicate.
    pub fn custom<P: Predicate + Send + Sync + 'static>(predicate: P) -> Self {
        Expression(ExpressionInner::Custom(Arc::new(predicate)))
    }

    /// The variant of this node.
    pub fn kind(&self) -> ExprKind {
        match &self.0 {
            ExpressionInner::Raw { .. } => ExprKind::Raw,
            ExpressionInner::Operator { .. } => ExprKind::Operator,
            ExpressionInner::Between { .. } => ExprKind::Between,
            ExpressionInner::In { .. } => ExprKind::In,
            ExpressionInner::NotIn { .. } => ExprKind::NotIn,
            ExpressionInner::Match(_) => ExprKind::Match,
            ExpressionInner::Literal(_) => ExprKind::Literal,
            ExpressionInner::Custom(_) => ExprKind::Custom,
        }
    }

    /// Reduce the node to its template, parameters and kinds.
    pub fn data(&self) -> ExprData {
        match &self.0 {
            ExpressionInner::Raw {
                template,
                parameters,
                kinds,
            } => ExprData::unchecked(template.clone(), parameters.clone(), kinds.clone()),
            ExpressionInner::Operator {
                left,
                op,
                right,
                left_kind,
                right_kind,
            } => ExprData::unchecked(
                format!("? {op} ?"),
                vec![left.clone(), right.clone()],
                vec![*left_kind, *right_kind],
            ),
            ExpressionInner::Between {
                identifier,
                min,
                max,
            } => ExprData::unchecked(
                "? BETWEEN ? AND ?".to_string(),
                vec![Value::String(identifier.clone()), min.clone(), max.clone()],
                vec![Kind::Identifier, Kind::Value, Kind::Value],
            ),
            ExpressionInner::In { identifier, values } => ExprData::unchecked(
                "? IN ?".to_string(),
                vec![Value::String(identifier.clone()), Value::Array(values.clone())],
                vec![Kind::Identifier, Kind::Value],
            ),
            ExpressionInner::NotIn { identifier, values } => ExprData::unchecked(
                "? NOT IN ?".to_string(),
                vec![Value::String(identifier.clone()), Value::Array(values.clone())],
                vec![Kind::Identifier, Kind::Value],
            ),
            ExpressionInner::Match(query) => ExprData::unchecked(
                "MATCH('?')".to_string(),
                vec![Value::String(query.clone())],
                vec![Kind::Value],
            )
            .bypassing_quotes(),
            ExpressionInner::Literal(sql) => ExprData::literal(sql.clone()),
            ExpressionInner::Custom(predicate) => predicate.data(),
        }
    }
}

fn strip_sql_quotes(query: &str) -> &str {
    match query.strip_prefix('\'').and_then(|q| q.strip_suffix('\'')) {
        Some(inner) if !inner.contains('\'') => inner,
        _ => query,
    }
}

fn collect_list<I, V>(identifier: &str, op: &str, values: I) -> SphinxResult<Vec<Value>>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(SphinxError::invalid_argument(format!(
            "{op} list for '{identifier}' cannot be empty"
        )));
    }
    Ok(values)
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ExpressionInner::Custom(predicate) => {
                f.debug_tuple("Expression::Custom").field(predicate).finish()
            }
            _ => {
                let data = self.data();
                f.debug_struct("Expression")
                    .field("kind", &self.kind())
                    .field("template", &data.template)
                    .field("parameters", &data.parameters)
                    .field("kinds", &data.kinds)
                    .finish()
            }
        }
    }
}

/// Custom predicates compare by identity, everything else by content.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (ExpressionInner::Custom(a), ExpressionInner::Custom(b)) => Arc::ptr_eq(a, b),
            (ExpressionInner::Custom(_), _) | (_, ExpressionInner::Custom(_)) => false,
            _ => self.kind() == other.kind() && self.data() == other.data(),
        }
    }
}
