//! Commonly used items, for glob import.

pub use crate::clause::{Mapping, Where, WhereInput, compile_clause, compile_expression};
pub use crate::connection::{Connection, ConnectionConfig, OfflineConnection};
pub use crate::error::{SphinxError, SphinxResult};
pub use crate::expr::{Expression, IntoKind, IntoOp, Kind, Op, Predicate, PredicateSet};
pub use crate::fulltext::{escape_match, half_escape_match};
pub use crate::qb::{self, Direction, OptionValue, SqlQb};
pub use crate::value::{TypeTag, Value};
