//! Flattening of predicate sets into SQL fragments.

use crate::connection::Connection;
use crate::expr::template::substitute;
use crate::expr::{ExprData, Expression, Kind, PredicateSet};

/// Separator between consecutive predicates.
pub const AND_SEPARATOR: &str = " AND ";

/// Compile a predicate set into the text that follows `WHERE` / `HAVING`.
///
/// Nodes are rendered in insertion order and joined with `AND`. Each `?` of a
/// node's template is replaced by its parameter:
///
/// - nodes that bypass quoting (`MATCH`) insert the parameter as raw text;
/// - `Kind::Identifier` parameters go through [`Connection::quote_identifier`];
/// - `Kind::Value` parameters go through [`Connection::quote_value`].
///
/// Only template text is scanned for placeholders, so `?` and `%` inside
/// parameters or literal fragments come out unchanged. An empty set compiles to an
/// empty string and the caller omits the clause.
pub fn compile_clause(set: &PredicateSet, conn: &dyn Connection) -> String {
    let mut out = String::new();
    for (i, expr) in set.iter().enumerate() {
        if i > 0 {
            out.push_str(AND_SEPARATOR);
        }
        render_data(&expr.data(), conn, &mut out);
    }
    out
}

/// Compile a single node.
pub fn compile_expression(expr: &Expression, conn: &dyn Connection) -> String {
    let mut out = String::new();
    render_data(&expr.data(), conn, &mut out);
    out
}

fn render_data(data: &ExprData, conn: &dyn Connection, out: &mut String) {
    let parameters = data.parameters();
    if parameters.is_empty() {
        out.push_str(data.template());
        return;
    }

    let kinds = data.kinds();
    substitute(data.template(), out, |idx, out| {
        let value = parameters.get(idx)?;
        if data.bypass_quoting() {
            out.push_str(&value.to_plain_string());
            return Some(());
        }
        match kinds.get(idx).copied().unwrap_or(Kind::Value) {
            Kind::Identifier => out.push_str(&conn.quote_identifier(&value.to_plain_string())),
            Kind::Value => out.push_str(&conn.quote_value(value, None)),
        }
        Some(())
    });
}
