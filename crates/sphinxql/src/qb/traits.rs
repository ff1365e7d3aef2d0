//! Trait definitions for statement builders.

use crate::connection::Connection;
use crate::error::{SphinxError, SphinxResult};
use std::fmt;

/// The kind of statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Replace,
    Update,
    Delete,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Replace => "REPLACE",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        })
    }
}

/// Base trait for all statement builders.
pub trait SqlQb {
    /// The kind of statement this builder renders.
    fn statement_kind(&self) -> StatementKind;

    /// Render the statement without checking it.
    fn build_sql(&self, conn: &dyn Connection) -> String;

    /// Validate builder state before rendering.
    fn validate(&self) -> SphinxResult<()> {
        Ok(())
    }

    /// The first error recorded while the builder was assembled.
    fn build_error(&self) -> Option<&SphinxError> {
        None
    }

    /// Check the builder and render the final SQL.
    fn to_sql(&self, conn: &dyn Connection) -> SphinxResult<String> {
        let checked = match self.build_error() {
            Some(err) => Err(err.clone()),
            None => self.validate(),
        };
        if let Err(err) = checked {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "sphinxql.sql",
                statement = %self.statement_kind(),
                error = %err,
                "rejected statement",
            );
            return Err(err);
        }

        let sql = self.build_sql(conn);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sphinxql.sql",
            statement = %self.statement_kind(),
            sql = %sql,
            "rendered statement",
        );
        Ok(sql)
    }
}
