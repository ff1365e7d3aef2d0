//! SELECT query builder.

use super::filters::where_methods;
use super::options::{OptionClause, OptionValue};
use super::traits::{SqlQb, StatementKind};
use crate::clause::{Where, WhereInput};
use crate::connection::Connection;
use crate::error::{SphinxError, SphinxResult};

/// Sort direction for ORDER BY and WITHIN GROUP ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Ordering {
    Column(String, Direction),
    Raw(String),
}

impl Ordering {
    fn render(&self, conn: &dyn Connection) -> String {
        match self {
            Ordering::Column(col, dir) => format!("{} {}", conn.quote_identifier(col), dir.as_str()),
            Ordering::Raw(sql) => sql.clone(),
        }
    }
}

fn render_orderings(items: &[Ordering], conn: &dyn Connection) -> String {
    items
        .iter()
        .map(|o| o.render(conn))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT query builder.
///
/// Clones are deep: the WHERE and HAVING clauses of a clone never affect the
/// original.
///
/// # Example
/// ```ignore
/// let sql = qb::select("products")
///     .columns(&["id", "weight() AS w"])
///     .match_query("wireless headphones")
///     .eq("category_id", 3)
///     .order_by_raw("w DESC")
///     .limit(20)
///     .to_sql(&conn)?;
/// ```
#[derive(Clone, Debug)]
pub struct SelectQb {
    columns: Vec<String>,
    indexes: Vec<String>,
    where_clause: Where,
    group_by: Vec<String>,
    within_group_order_by: Vec<Ordering>,
    having: Where,
    order_by: Vec<Ordering>,
    limit: Option<u64>,
    offset: Option<u64>,
    options: OptionClause,
    build_error: Option<SphinxError>,
}

impl SelectQb {
    /// Create a SELECT over one index, selecting `*`.
    pub fn new(index: &str) -> Self {
        Self {
            columns: Vec::new(),
            indexes: vec![index.to_string()],
            where_clause: Where::new(),
            group_by: Vec::new(),
            within_group_order_by: Vec::new(),
            having: Where::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            options: OptionClause::new(),
            build_error: None,
        }
    }

    // ==================== Projection ====================

    /// Replace the selected expressions. They are emitted verbatim.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Append one selected expression.
    pub fn column(mut self, expr: &str) -> Self {
        self.columns.push(expr.to_string());
        self
    }

    /// Add another index to FROM.
    pub fn from(mut self, index: &str) -> Self {
        self.indexes.push(index.to_string());
        self
    }

    // ==================== WHERE ====================

    where_methods!();

    // ==================== Grouping ====================

    /// Add a GROUP BY column.
    pub fn group_by(mut self, column: &str) -> Self {
        self.group_by.push(column.to_string());
        self
    }

    /// Add a WITHIN GROUP ORDER BY column.
    pub fn within_group_order_by(mut self, column: &str, direction: Direction) -> Self {
        self.within_group_order_by
            .push(Ordering::Column(column.to_string(), direction));
        self
    }

    /// Add HAVING input of any shape [`Where::add`] accepts.
    pub fn having(mut self, input: impl Into<WhereInput>) -> Self {
        let result = self.having.add(input).map(|_| ());
        self.record(result);
        self
    }

    /// Compose HAVING predicates in a callback.
    pub fn having_with<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Where) -> SphinxResult<()>,
    {
        let result = self.having.add_with(f).map(|_| ());
        self.record(result);
        self
    }

    /// The HAVING clause built so far.
    pub fn having_clause(&self) -> &Where {
        &self.having
    }

    // ==================== Ordering & paging ====================

    /// Add an ORDER BY column.
    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order_by
            .push(Ordering::Column(column.to_string(), direction));
        self
    }

    /// Add a verbatim ORDER BY item (e.g. `weight() DESC`).
    pub fn order_by_raw(mut self, sql: &str) -> Self {
        self.order_by.push(Ordering::Raw(sql.to_string()));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set an OPTION entry.
    pub fn option(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.options.set(name, value);
        self
    }
}

impl SqlQb for SelectQb {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn validate(&self) -> SphinxResult<()> {
        if self.indexes.iter().any(|i| i.trim().is_empty()) {
            return Err(SphinxError::validation("SELECT index name cannot be empty"));
        }
        if self.offset.is_some() && self.limit.is_none() {
            return Err(SphinxError::validation("OFFSET requires LIMIT"));
        }
        if !self.within_group_order_by.is_empty() && self.group_by.is_empty() {
            return Err(SphinxError::validation(
                "WITHIN GROUP ORDER BY requires GROUP BY",
            ));
        }
        Ok(())
    }

    fn build_error(&self) -> Option<&SphinxError> {
        self.build_error.as_ref()
    }

    fn build_sql(&self, conn: &dyn Connection) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!(
            "SELECT {columns} FROM {}",
            conn.quote_identifier_list(&self.indexes)
        );

        if !self.where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clause.compile(conn));
        }
        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&conn.quote_identifier_list(&self.group_by));
        }
        if !self.within_group_order_by.is_empty() {
            sql.push_str(" WITHIN GROUP ORDER BY ");
            sql.push_str(&render_orderings(&self.within_group_order_by, conn));
        }
        if !self.having.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&self.having.compile(conn));
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&render_orderings(&self.order_by, conn));
        }
        match (self.offset, self.limit) {
            (Some(offset), Some(limit)) => sql.push_str(&format!(" LIMIT {offset}, {limit}")),
            (None, Some(limit)) => sql.push_str(&format!(" LIMIT {limit}")),
            _ => {}
        }
        if !self.options.is_empty() {
            sql.push_str(" OPTION ");
            sql.push_str(&self.options.compile(conn));
        }
        sql
    }
}
