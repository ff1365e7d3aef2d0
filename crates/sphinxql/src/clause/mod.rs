//! WHERE/HAVING clauses: ingestion and compilation.
//!
//! [`Where`] normalizes caller input (nodes, literals, key/value [`Mapping`]s,
//! callbacks, whole predicate sets) into one ordered [`PredicateSet`], and
//! [`compile_clause`] flattens that set into the SQL text after `WHERE`/`HAVING`.
//!
//! [`PredicateSet`]: crate::expr::PredicateSet

mod compiler;
mod mapping;
mod where_clause;

pub use compiler::{AND_SEPARATOR, compile_clause, compile_expression};
pub use mapping::{Mapping, MappingKey, MappingValue};
pub use where_clause::{Where, WhereInput};
