//! Line normalization: canonical, comparable rule keys.
//!
//! Two syntactically-equivalent rules that differ only in inline commentary
//! or `$`-option ordering must normalize to the same key so the
//! deduplicator collapses them.

/// Normalize a raw line into a canonical rule key.
///
/// Returns `None` for lines that contribute no rule (blank or comment-only).
///
/// Steps:
/// 1. Discard everything from the first unescaped `!` onward.
/// 2. Trim surrounding whitespace; empty result is `None`.
/// 3. If the rule has a `$`-modifier section, sort its comma-separated
///    option tokens lexicographically and recompose.
///
/// The function is idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(line: &str) -> Option<String> {
    let body = strip_inline_comment(line).trim();
    if body.is_empty() {
        return None;
    }

    match body.split_once('$') {
        Some((main, options)) => {
            let mut tokens: Vec<&str> = options.split(',').collect();
            tokens.sort_unstable();
            Some(format!("{main}${}", tokens.join(",")))
        }
        None => Some(body.to_string()),
    }
}

/// Cut the line at the first `!` that is not escaped with a backslash.
fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'!' && (i == 0 || bytes[i - 1] != b'\\') {
            return &line[..i];
        }
    }
    line
}
