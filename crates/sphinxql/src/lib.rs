//! # sphinxql
//!
//! A fluent SphinxQL query builder for Sphinx / Manticore Search.
//!
//! ## Features
//!
//! - **Typed predicates**: operators, BETWEEN, IN / NOT IN, MATCH, literals, raw
//!   templates and user-defined [`Predicate`]s share one node type
//! - **Connection-driven quoting**: identifiers and values are quoted by a
//!   [`Connection`], never by string concatenation at the call site
//! - **Flexible WHERE input**: nodes, SQL strings, key/value [`Mapping`]s,
//!   callbacks, or a whole clause from another builder
//! - **No placeholder surprises**: `%` and `?` inside values, literals and
//!   MATCH text are emitted verbatim
//! - **Safe defaults**: DELETE requires WHERE, UPDATE requires SET and WHERE
//!
//! ## Query Builder (qb)
//!
//! ```ignore
//! use sphinxql::prelude::*;
//!
//! let conn = OfflineConnection::new();
//! let sql = qb::select("products")
//!     .match_query(&escape_match(user_input))
//!     .filter(Mapping::new().set("category_id", 3).set("tag", vec![1, 2]))
//!     .limit(20)
//!     .to_sql(&conn)?;
//! ```
//!
//! ## Predicates
//!
//! ```ignore
//! let mut set = PredicateSet::new();
//! set.equal_to("a", 1).between("b", 1, 5);
//! assert_eq!(compile_clause(&set, &conn), "`a` = 1 AND `b` BETWEEN 1 AND 5");
//! ```

pub mod clause;
pub mod connection;
pub mod error;
pub mod expr;
pub mod fulltext;
pub mod prelude;
pub mod qb;
pub mod value;

pub use clause::{Mapping, MappingKey, MappingValue, Where, WhereInput, compile_clause};
pub use connection::{Connection, ConnectionConfig, OfflineConnection};
pub use error::{SphinxError, SphinxResult};
pub use expr::{ExprData, ExprKind, Expression, Kind, Op, Predicate, PredicateSet};
pub use value::{TypeTag, Value};

// Re-export qb module for easy access
pub use qb::{
    DeleteQb, Direction, InsertQb, OptionClause, OptionValue, SelectQb, SqlQb, StatementKind,
    UpdateQb, delete, insert, replace, select, update,
};
