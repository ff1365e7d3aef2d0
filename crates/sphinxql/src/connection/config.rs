/// Quoting configuration for [`OfflineConnection`](super::OfflineConnection).
///
/// Defaults match a stock searchd: identifiers are backtick-quoted and strings use
/// backslash escapes.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Wrap identifiers in backticks. When disabled identifiers are emitted as-is.
    pub quote_identifiers: bool,
    /// Escape special characters in strings with backslashes.
    ///
    /// When disabled only single quotes are escaped (by doubling them).
    pub escape_backslashes: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            quote_identifiers: true,
            escape_backslashes: true,
        }
    }
}

impl ConnectionConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable identifier quoting.
    pub fn quote_identifiers(mut self, enabled: bool) -> Self {
        self.quote_identifiers = enabled;
        self
    }

    /// Enable or disable backslash escaping in string literals.
    pub fn escape_backslashes(mut self, enabled: bool) -> Self {
        self.escape_backslashes = enabled;
        self
    }
}
