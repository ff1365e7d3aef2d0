//! INSERT / REPLACE query builder.

use super::traits::{SqlQb, StatementKind};
use crate::connection::Connection;
use crate::error::{SphinxError, SphinxResult};
use crate::value::{TypeTag, Value};

/// INSERT or REPLACE query builder.
///
/// Rows are given either column-first (`columns` + `values`) or one column at a
/// time with `set` for a single row.
///
/// # Example
/// ```ignore
/// let sql = qb::replace("products")
///     .columns(&["id", "title", "tags"])
///     .values([Value::from(1), "Headphones".into(), vec![3, 7].into()])
///     .type_hint("tags", TypeTag::Mva)
///     .to_sql(&conn)?;
/// ```
#[derive(Clone, Debug)]
pub struct InsertQb {
    index: String,
    replace: bool,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    type_hints: Vec<(String, TypeTag)>,
    build_error: Option<SphinxError>,
}

impl InsertQb {
    /// Create an INSERT builder.
    pub fn new(index: &str) -> Self {
        Self {
            index: index.to_string(),
            replace: false,
            columns: Vec::new(),
            rows: Vec::new(),
            type_hints: Vec::new(),
            build_error: None,
        }
    }

    /// Create a REPLACE builder.
    pub fn replace(index: &str) -> Self {
        Self {
            replace: true,
            ..Self::new(index)
        }
    }

    fn record(&mut self, err: SphinxError) {
        if self.build_error.is_none() {
            self.build_error = Some(err);
        }
    }

    /// Replace the column list.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Append one row of values, in column order.
    pub fn values<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Set a column value on the single row.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        if self.rows.len() > 1 {
            self.record(SphinxError::invalid_argument(
                "set() cannot be combined with multi-row values",
            ));
            return self;
        }
        self.columns.push(column.to_string());
        match self.rows.first_mut() {
            Some(row) => row.push(value.into()),
            None => self.rows.push(vec![value.into()]),
        }
        self
    }

    /// Set a column value with an explicit attribute type.
    pub fn set_typed(self, column: &str, value: impl Into<Value>, type_tag: TypeTag) -> Self {
        self.type_hint(column, type_tag).set(column, value)
    }

    /// Set a JSON attribute from any serializable value.
    pub fn set_json<T: serde::Serialize>(self, column: &str, value: &T) -> SphinxResult<Self> {
        let json = serde_json::to_value(value)?;
        Ok(self.set_typed(column, Value::Json(json), TypeTag::Json))
    }

    /// Coerce every value of `column` to `type_tag` when quoting.
    pub fn type_hint(mut self, column: &str, type_tag: TypeTag) -> Self {
        match self.type_hints.iter_mut().find(|(c, _)| c == column) {
            Some(slot) => slot.1 = type_tag,
            None => self.type_hints.push((column.to_string(), type_tag)),
        }
        self
    }

    fn type_of(&self, column: &str) -> Option<TypeTag> {
        self.type_hints
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, t)| *t)
    }
}

impl SqlQb for InsertQb {
    fn statement_kind(&self) -> StatementKind {
        if self.replace {
            StatementKind::Replace
        } else {
            StatementKind::Insert
        }
    }

    fn validate(&self) -> SphinxResult<()> {
        if self.columns.is_empty() {
            return Err(SphinxError::validation(format!(
                "{} requires at least one column",
                self.statement_kind()
            )));
        }
        if self.rows.is_empty() {
            return Err(SphinxError::validation(format!(
                "{} requires at least one row",
                self.statement_kind()
            )));
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(SphinxError::validation(format!(
                    "row {i} has {} values but {} columns were given",
                    row.len(),
                    self.columns.len()
                )));
            }
        }
        Ok(())
    }

    fn build_error(&self) -> Option<&SphinxError> {
        self.build_error.as_ref()
    }

    fn build_sql(&self, conn: &dyn Connection) -> String {
        let hints: Vec<Option<TypeTag>> = self.columns.iter().map(|c| self.type_of(c)).collect();
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let values: Vec<String> = row
                    .iter()
                    .zip(&hints)
                    .map(|(v, hint)| conn.quote_value(v, *hint))
                    .collect();
                format!("({})", values.join(", "))
            })
            .collect();

        format!(
            "{} INTO {} ({}) VALUES {}",
            self.statement_kind(),
            conn.quote_identifier(&self.index),
            conn.quote_identifier_list(&self.columns),
            rows.join(", ")
        )
    }
}
