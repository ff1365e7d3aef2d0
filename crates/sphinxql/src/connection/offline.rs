use super::{Connection, ConnectionConfig};

/// A [`Connection`] that escapes locally, without a live searchd.
///
/// Identifiers are backtick-quoted per dotted segment (`*` stays bare) and
/// strings are single-quoted with MySQL-style backslash escapes.
///
/// # Example
/// ```ignore
/// use sphinxql::{Connection, OfflineConnection};
///
/// let conn = OfflineConnection::new();
/// assert_eq!(conn.quote_identifier("title"), "`title`");
/// assert_eq!(conn.quote_string("it's"), r"'it\'s'");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OfflineConnection {
    config: ConnectionConfig,
}

impl OfflineConnection {
    /// Create a connection with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connection with a custom configuration.
    pub fn with_config(config: ConnectionConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn escape_into(&self, raw: &str, out: &mut String) {
        if !self.config.escape_backslashes {
            for ch in raw.chars() {
                if ch == '\'' {
                    out.push('\'');
                }
                out.push(ch);
            }
            return;
        }

        for ch in raw.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\0' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\x1a' => out.push_str("\\Z"),
                c => out.push(c),
            }
        }
    }
}

impl Connection for OfflineConnection {
    fn quote_identifier(&self, name: &str) -> String {
        if !self.config.quote_identifiers {
            return name.to_string();
        }

        let mut out = String::with_capacity(name.len() + 2);
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                out.push('.');
            }
            if part == "*" {
                out.push('*');
                continue;
            }
            out.push('`');
            for ch in part.chars() {
                if ch == '`' {
                    out.push('`');
                }
                out.push(ch);
            }
            out.push('`');
        }
        out
    }

    fn quote_string(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('\'');
        self.escape_into(raw, &mut out);
        out.push('\'');
        out
    }
}
