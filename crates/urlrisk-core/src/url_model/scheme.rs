//! Scheme prefix detection.

/// True if `s` starts with `letter (letter | digit | + | - | .)* "://"`.
pub fn has_scheme_prefix(s: &str) -> bool {
    let Some(end) = s.find("://") else {
        return false;
    };
    let mut chars = s[..end].chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
