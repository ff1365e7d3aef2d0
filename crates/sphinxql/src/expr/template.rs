//! Placeholder scanning for expression templates.
//!
//! A placeholder is a bare `?` character. The scan is purely textual: a `?`
//! inside a quoted string of a template still counts.

/// The placeholder character.
pub const PLACEHOLDER: char = '?';

/// Count the placeholders in a template.
pub fn count_placeholders(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Check whether a template contains at least one placeholder.
pub fn has_placeholder(template: &str) -> bool {
    template.contains(PLACEHOLDER)
}

/// Substitute placeholders left to right, calling `fill` with the placeholder index.
///
/// Substituted text is never rescanned. Placeholders beyond the number reported by
/// `fill` (which returns `None`) are kept as literal `?`.
pub fn substitute<F>(template: &str, out: &mut String, mut fill: F)
where
    F: FnMut(usize, &mut String) -> Option<()>,
{
    let mut idx = 0;
    let mut rest = template;
    while let Some(pos) = rest.find(PLACEHOLDER) {
        out.push_str(&rest[..pos]);
        if fill(idx, out).is_none() {
            out.push(PLACEHOLDER);
        }
        idx += 1;
        rest = &rest[pos + PLACEHOLDER.len_utf8()..];
    }
    out.push_str(rest);
}
