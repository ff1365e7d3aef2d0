//! Escaping helpers for full-text `MATCH()` queries.
//!
//! `MATCH()` text is inserted into the statement without SQL quoting, so the
//! helpers escape for both layers: full-text operators get a backslash that
//! survives the SQL string literal (`\\`), and single quotes are escaped for the
//! literal itself.

const OPERATORS: &[char] = &[
    '(', ')', '|', '-', '!', '@', '~', '"', '&', '/', '^', '$', '=', '<',
];

/// Characters end users may keep for boolean search (`a | b`, `-word`, `"phrase"`).
const USER_OPERATORS: &[char] = &['|', '-', '"'];

fn push_escaped(out: &mut String, ch: char, operators: &[char]) {
    match ch {
        '\\' => out.push_str(r"\\\\"),
        '\'' => out.push_str(r"\'"),
        c if operators.contains(&c) => {
            out.push_str(r"\\");
            out.push(c);
        }
        c => out.push(c),
    }
}

/// Escape every extended-query operator so the text is matched literally.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_match("C++ (book)"), r"C++ \\(book\\)");
/// ```
pub fn escape_match(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        push_escaped(&mut out, ch, OPERATORS);
    }
    out
}

/// Escape operators that end users cannot use safely, keeping `|`, `-` and `"`.
///
/// An unbalanced trailing `"` is escaped so the query still parses.
pub fn half_escape_match(text: &str) -> String {
    let allowed: Vec<char> = OPERATORS
        .iter()
        .copied()
        .filter(|c| !USER_OPERATORS.contains(c))
        .collect();

    let unbalanced_quote = if text.matches('"').count() % 2 == 1 {
        text.rfind('"')
    } else {
        None
    };

    let mut out = String::with_capacity(text.len() + 8);
    for (idx, ch) in text.char_indices() {
        if Some(idx) == unbalanced_quote {
            out.push_str(r#"\\""#);
            continue;
        }
        push_escaped(&mut out, ch, &allowed);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_all_operators() {
        assert_eq!(escape_match("hello (world)"), r"hello \\(world\\)");
        assert_eq!(escape_match("a|b -c"), r"a\\|b \\-c");
        assert_eq!(escape_match("@title"), r"\\@title");
    }

    #[test]
    fn escape_quotes_for_sql() {
        assert_eq!(escape_match("it's"), r"it\'s");
        assert_eq!(escape_match(r"back\slash"), r"back\\\\slash");
    }

    #[test]
    fn half_escape_keeps_user_operators() {
        assert_eq!(half_escape_match("rust | go -java"), "rust | go -java");
        assert_eq!(half_escape_match("\"exact phrase\""), "\"exact phrase\"");
        assert_eq!(half_escape_match("@title x"), r"\\@title x");
    }

    #[test]
    fn half_escape_fixes_unbalanced_quote() {
        assert_eq!(half_escape_match("one \"two"), r#"one \\"two"#);
        assert_eq!(half_escape_match("\"a\" \"b"), r#""a" \\"b"#);
    }
}
