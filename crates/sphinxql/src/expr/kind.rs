//! Parameter kinds and comparison operators.

use crate::error::{SphinxError, SphinxResult};
use std::fmt;
use std::str::FromStr;

/// How a parameter is quoted when an expression is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Quoted as a schema identifier (index, field, attribute).
    Identifier,
    /// Quoted as a typed data value.
    Value,
}

impl FromStr for Kind {
    type Err = SphinxError;

    fn from_str(s: &str) -> SphinxResult<Self> {
        match s {
            "identifier" | "ident" => Ok(Kind::Identifier),
            "value" => Ok(Kind::Value),
            other => Err(SphinxError::invalid_argument(format!(
                "Invalid parameter kind '{other}', expected 'identifier' or 'value'"
            ))),
        }
    }
}

/// Comparison operator of an operator predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
}

impl Op {
    /// SQL symbol of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Gt => ">",
            Op::Gte => ">=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Op {
    type Err = SphinxError;

    fn from_str(s: &str) -> SphinxResult<Self> {
        match s.trim() {
            "=" => Ok(Op::Eq),
            "!=" => Ok(Op::Ne),
            "<" => Ok(Op::Lt),
            "<=" => Ok(Op::Lte),
            ">" => Ok(Op::Gt),
            ">=" => Ok(Op::Gte),
            other => Err(SphinxError::invalid_argument(format!(
                "Unsupported operator '{other}'"
            ))),
        }
    }
}

/// Convert an input into an [`Op`].
///
/// Lets predicate constructors accept either the enum or its SQL symbol.
pub trait IntoOp {
    fn into_op(self) -> SphinxResult<Op>;
}

impl IntoOp for Op {
    fn into_op(self) -> SphinxResult<Op> {
        Ok(self)
    }
}

impl IntoOp for &str {
    fn into_op(self) -> SphinxResult<Op> {
        self.parse()
    }
}

impl IntoOp for String {
    fn into_op(self) -> SphinxResult<Op> {
        self.parse()
    }
}

/// Convert an input into a [`Kind`].
pub trait IntoKind {
    fn into_kind(self) -> SphinxResult<Kind>;
}

impl IntoKind for Kind {
    fn into_kind(self) -> SphinxResult<Kind> {
        Ok(self)
    }
}

impl IntoKind for &str {
    fn into_kind(self) -> SphinxResult<Kind> {
        self.parse()
    }
}

impl IntoKind for String {
    fn into_kind(self) -> SphinxResult<Kind> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_round_trips_symbols() {
        for op in [Op::Eq, Op::Ne, Op::Lt, Op::Lte, Op::Gt, Op::Gte] {
            assert_eq!(op.as_str().parse::<Op>().unwrap(), op);
        }
    }

    #[test]
    fn op_rejects_unknown() {
        let err = "LIKE".into_op().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!("<>".parse::<Op>().is_err());
    }

    #[test]
    fn kind_parses() {
        assert_eq!("identifier".into_kind().unwrap(), Kind::Identifier);
        assert_eq!("value".into_kind().unwrap(), Kind::Value);
        assert!("column".into_kind().is_err());
    }
}
