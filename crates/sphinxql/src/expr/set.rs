//! Ordered, append-only list of predicates.

use super::expression::{Expression, Predicate};
use super::kind::{IntoKind, IntoOp};
use crate::error::SphinxResult;
use crate::value::Value;

/// An ordered list of predicates joined with `AND` when compiled.
///
/// Insertion order fixes both the AND chain and the positional parameter order.
/// There is no removal: start a new set to reset a clause.
///
/// # Example
/// ```ignore
/// let mut set = PredicateSet::new();
/// set.equal_to("category", 3)
///     .between("price", 10, 20)
///     .match_query("@title rust");
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredicateSet {
    predicates: Vec<Expression>,
}

impl PredicateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a node.
    pub fn add(&mut self, expr: Expression) -> &mut Self {
        self.predicates.push(expr);
        self
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Check if the set has no nodes.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Nodes in insertion order.
    pub fn list(&self) -> &[Expression] {
        &self.predicates
    }

    /// Iterate over nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.predicates.iter()
    }

    /// Take all nodes (consuming the set).
    pub fn into_list(self) -> Vec<Expression> {
        self.predicates
    }

    // ==================== Convenience builders ====================

    /// Add `identifier = value`
    pub fn equal_to(&mut self, identifier: &str, value: impl Into<Value>) -> &mut Self {
        self.add(Expression::eq(identifier, value))
    }

    /// Add `identifier != value`
    pub fn not_equal_to(&mut self, identifier: &str, value: impl Into<Value>) -> &mut Self {
        self.add(Expression::ne(identifier, value))
    }

    /// Add `identifier < value`
    pub fn less_than(&mut self, identifier: &str, value: impl Into<Value>) -> &mut Self {
        self.add(Expression::lt(identifier, value))
    }

    /// Add `identifier > value`
    pub fn greater_than(&mut self, identifier: &str, value: impl Into<Value>) -> &mut Self {
        self.add(Expression::gt(identifier, value))
    }

    /// Add `identifier <= value`
    pub fn less_than_or_equal_to(
        &mut self,
        identifier: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.add(Expression::lte(identifier, value))
    }

    /// Add `identifier >= value`
    pub fn greater_than_or_equal_to(
        &mut self,
        identifier: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.add(Expression::gte(identifier, value))
    }

    /// Add `left <op> right` with the operator given as enum or symbol.
    pub fn operator<O: IntoOp>(
        &mut self,
        left: impl Into<Value>,
        op: O,
        right: impl Into<Value>,
    ) -> SphinxResult<&mut Self> {
        Ok(self.add(Expression::operator(left, op, right)?))
    }

    /// Add `identifier BETWEEN min AND max`
    pub fn between(
        &mut self,
        identifier: &str,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> &mut Self {
        self.add(Expression::between(identifier, min, max))
    }

    /// Add `identifier IN (values...)`
    pub fn in_list<I, V>(&mut self, identifier: &str, values: I) -> SphinxResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Ok(self.add(Expression::in_list(identifier, values)?))
    }

    /// Add `identifier NOT IN (values...)`
    pub fn not_in<I, V>(&mut self, identifier: &str, values: I) -> SphinxResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Ok(self.add(Expression::not_in(identifier, values)?))
    }

    /// Add `MATCH('query')`
    pub fn match_query(&mut self, query: &str) -> &mut Self {
        self.add(Expression::match_query(query))
    }

    /// Add a raw expression with `?` placeholders, all quoted as values.
    pub fn raw_expression<I, V>(&mut self, template: &str, parameters: I) -> SphinxResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Ok(self.add(Expression::raw(template, parameters)?))
    }

    /// Add a raw expression with an explicit kind per parameter.
    pub fn raw_expression_with_kinds<I, V, KI, K>(
        &mut self,
        template: &str,
        parameters: I,
        kinds: KI,
    ) -> SphinxResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
        KI: IntoIterator<Item = K>,
        K: IntoKind,
    {
        Ok(self.add(Expression::raw_with_kinds(template, parameters, kinds)?))
    }

    /// Add a verbatim SQL fragment.
    pub fn literal(&mut self, sql: &str) -> &mut Self {
        self.add(Expression::literal(sql))
    }

    /// Add a custom predicate.
    pub fn custom<P: Predicate + Send + Sync + 'static>(&mut self, predicate: P) -> &mut Self {
        self.add(Expression::custom(predicate))
    }
}

impl From<Vec<Expression>> for PredicateSet {
    fn from(predicates: Vec<Expression>) -> Self {
        Self { predicates }
    }
}

impl FromIterator<Expression> for PredicateSet {
    fn from_iter<T: IntoIterator<Item = Expression>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PredicateSet {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprKind;

    #[test]
    fn builders_append_in_order() {
        let mut set = PredicateSet::new();
        set.equal_to("a", 1)
            .not_equal_to("b", 2)
            .less_than("c", 3)
            .greater_than("d", 4)
            .less_than_or_equal_to("e", 5)
            .greater_than_or_equal_to("f", 6)
            .between("g", 1, 2)
            .match_query("q")
            .literal("1 = 1");
        set.in_list("h", [1, 2]).unwrap().not_in("i", [3]).unwrap();
        set.raw_expression("j > ?", [7]).unwrap();

        let kinds: Vec<ExprKind> = set.iter().map(Expression::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ExprKind::Operator,
                ExprKind::Operator,
                ExprKind::Operator,
                ExprKind::Operator,
                ExprKind::Operator,
                ExprKind::Operator,
                ExprKind::Between,
                ExprKind::Match,
                ExprKind::Literal,
                ExprKind::In,
                ExprKind::NotIn,
                ExprKind::Raw,
            ]
        );
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn failed_builder_leaves_set_untouched() {
        let mut set = PredicateSet::new();
        set.equal_to("a", 1);
        assert!(set.in_list("b", Vec::<i32>::new()).is_err());
        assert!(set.operator("c", "~", 1).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = PredicateSet::new();
        a.equal_to("x", 1);
        let mut b = a.clone();
        b.equal_to("y", 2);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }
}
