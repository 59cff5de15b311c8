//! String escaping.

/// Escapes `text` and wraps it in double quotes.
///
/// Backslash, double quote, newline, carriage return and tab are escaped.
/// Other control characters and all non-ASCII text pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use logvalue::escape;
///
/// assert_eq!(escape(""), r#""""#);
/// assert_eq!(escape("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// assert_eq!(escape(r"C:\tmp"), r#""C:\\tmp""#);
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    write_escaped(&mut out, text);
    out
}

/// Appends the escaped, quoted form of `text` to `out`.
pub(crate) fn write_escaped(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
