//! Statement builders for SphinxQL.
//!
//! Builders are by-value and clone-friendly. Construction errors (an empty IN
//! list, a bad mapping entry) are kept and reported when the statement is
//! rendered with [`SqlQb::to_sql`], so chains never need `?` in the middle.
//!
//! # Usage
//!
//! ```ignore
//! use sphinxql::prelude::*;
//!
//! let conn = OfflineConnection::new();
//!
//! // SELECT
//! let sql = qb::select("products")
//!     .match_query("headphones")
//!     .eq("category_id", 3)
//!     .order_by_raw("weight() DESC")
//!     .limit(20)
//!     .option("ranker", OptionValue::raw("bm25"))
//!     .to_sql(&conn)?;
//!
//! // INSERT
//! let sql = qb::insert("products")
//!     .set("id", 1)
//!     .set("title", "Headphones")
//!     .to_sql(&conn)?;
//!
//! // UPDATE
//! let sql = qb::update("products")
//!     .set("price", 99.5)
//!     .eq("id", 1)
//!     .to_sql(&conn)?;
//!
//! // DELETE
//! let sql = qb::delete("products").in_list("id", [1, 2, 3]).to_sql(&conn)?;
//! ```

mod delete;
mod filters;
mod insert;
mod options;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use insert::InsertQb;
pub use options::{OptionClause, OptionValue};
pub use select::{Direction, SelectQb};
pub use traits::{SqlQb, StatementKind};
pub use update::UpdateQb;

/// Create a SELECT query builder for the given index.
pub fn select(index: &str) -> SelectQb {
    SelectQb::new(index)
}

/// Create an INSERT query builder for the given index.
pub fn insert(index: &str) -> InsertQb {
    InsertQb::new(index)
}

/// Create a REPLACE query builder for the given index.
pub fn replace(index: &str) -> InsertQb {
    InsertQb::replace(index)
}

/// Create an UPDATE query builder for the given index.
pub fn update(index: &str) -> UpdateQb {
    UpdateQb::new(index)
}

/// Create a DELETE query builder for the given index.
pub fn delete(index: &str) -> DeleteQb {
    DeleteQb::new(index)
}

#[cfg(test)]
mod tests;
