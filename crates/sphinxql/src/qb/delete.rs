//! DELETE query builder.

use super::filters::where_methods;
use super::traits::{SqlQb, StatementKind};
use crate::clause::Where;
use crate::connection::Connection;
use crate::error::{SphinxError, SphinxResult};

/// DELETE query builder. A WHERE clause is mandatory.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    index: String,
    where_clause: Where,
    build_error: Option<SphinxError>,
}

impl DeleteQb {
    /// Create a new DELETE query builder.
    pub fn new(index: &str) -> Self {
        Self {
            index: index.to_string(),
            where_clause: Where::new(),
            build_error: None,
        }
    }

    where_methods!();
}

impl SqlQb for DeleteQb {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn validate(&self) -> SphinxResult<()> {
        if self.where_clause.is_empty() {
            return Err(SphinxError::validation("DELETE requires a WHERE clause"));
        }
        Ok(())
    }

    fn build_error(&self) -> Option<&SphinxError> {
        self.build_error.as_ref()
    }

    fn build_sql(&self, conn: &dyn Connection) -> String {
        format!(
            "DELETE FROM {} WHERE {}",
            conn.quote_identifier(&self.index),
            self.where_clause.compile(conn)
        )
    }
}
