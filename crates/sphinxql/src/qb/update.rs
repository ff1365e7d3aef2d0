//! UPDATE query builder.

use super::filters::where_methods;
use super::options::{OptionClause, OptionValue};
use super::traits::{SqlQb, StatementKind};
use crate::clause::Where;
use crate::connection::Connection;
use crate::error::{SphinxError, SphinxResult};
use crate::value::{TypeTag, Value};

#[derive(Clone, Debug, PartialEq)]
struct Assignment {
    column: String,
    value: Value,
    type_tag: Option<TypeTag>,
}

/// UPDATE query builder for attribute updates.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    index: String,
    assignments: Vec<Assignment>,
    where_clause: Where,
    options: OptionClause,
    build_error: Option<SphinxError>,
}

impl UpdateQb {
    /// Create a new UPDATE query builder.
    pub fn new(index: &str) -> Self {
        Self {
            index: index.to_string(),
            assignments: Vec::new(),
            where_clause: Where::new(),
            options: OptionClause::new(),
            build_error: None,
        }
    }

    // ==================== SET ====================

    /// Set an attribute value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.assignments.push(Assignment {
            column: column.to_string(),
            value: value.into(),
            type_tag: None,
        });
        self
    }

    /// Set an attribute value coerced to `type_tag`.
    pub fn set_typed(mut self, column: &str, value: impl Into<Value>, type_tag: TypeTag) -> Self {
        self.assignments.push(Assignment {
            column: column.to_string(),
            value: value.into(),
            type_tag: Some(type_tag),
        });
        self
    }

    // ==================== WHERE ====================

    where_methods!();

    /// Set an OPTION entry.
    pub fn option(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.options.set(name, value);
        self
    }
}

impl SqlQb for UpdateQb {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn validate(&self) -> SphinxResult<()> {
        if self.assignments.is_empty() {
            return Err(SphinxError::validation("UPDATE requires at least one SET"));
        }
        if self.where_clause.is_empty() {
            return Err(SphinxError::validation("UPDATE requires a WHERE clause"));
        }
        Ok(())
    }

    fn build_error(&self) -> Option<&SphinxError> {
        self.build_error.as_ref()
    }

    fn build_sql(&self, conn: &dyn Connection) -> String {
        let sets: Vec<String> = self
            .assignments
            .iter()
            .map(|a| {
                format!(
                    "{} = {}",
                    conn.quote_identifier(&a.column),
                    conn.quote_value(&a.value, a.type_tag)
                )
            })
            .collect();

        let mut sql = format!(
            "UPDATE {} SET {}",
            conn.quote_identifier(&self.index),
            sets.join(", ")
        );
        if !self.where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clause.compile(conn));
        }
        if !self.options.is_empty() {
            sql.push_str(" OPTION ");
            sql.push_str(&self.options.compile(conn));
        }
        sql
    }
}
