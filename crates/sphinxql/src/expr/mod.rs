//! Predicate and expression nodes.
//!
//! - [`Expression`]: one node (operator, BETWEEN, IN/NOT IN, MATCH, literal, raw template,
//!   or a custom [`Predicate`])
//! - [`PredicateSet`]: the ordered list of nodes a WHERE/HAVING clause is built from
//!
//! Nodes are validated when they are built; compiling them never fails.

mod expression;
mod kind;
mod set;
pub mod template;

pub use expression::{ExprData, ExprKind, Expression, Predicate};
pub use kind::{IntoKind, IntoOp, Kind, Op};
pub use set::PredicateSet;
