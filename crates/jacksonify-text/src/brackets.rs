//! Depth-counter scanning over bracketed text.

const OPENERS: &[u8] = b"<{[(";
const CLOSERS: &[u8] = b">}])";

/// Returns the index of the `)` matching the `(` at `open`.
///
/// Scans forward from `open` keeping a single parenthesis depth counter.
/// Returns `None` when the parentheses are unbalanced.
pub fn match_closing_paren(text: &str, open: usize) -> Option<usize> {
    debug_assert_eq!(text.as_bytes().get(open), Some(&b'('));
    let mut depth = 0usize;
    for (idx, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits `text` at commas that sit outside any bracket pair.
///
/// One aggregate depth counter is shared across `<>`, `{}`, `[]` and `()`:
/// any opener increments, any closer decrements, and a comma only splits at
/// depth 0. That is an approximation of per-kind matching, good enough for
/// well-formed parameter lists (every opener of one kind closes before any
/// enclosing kind does). Pieces are trimmed; empty input yields no pieces.
pub fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, b) in text.bytes().enumerate() {
        if OPENERS.contains(&b) {
            depth += 1;
        } else if CLOSERS.contains(&b) {
            depth = depth.saturating_sub(1);
        } else if b == b',' && depth == 0 {
            pieces.push(text[start..idx].trim());
            start = idx + 1;
        }
    }
    if start < text.len() {
        pieces.push(text[start..].trim());
    }
    tracing::debug!(
        target = "jacksonify.text",
        pieces = pieces.len(),
        "split component list at top-level commas"
    );
    pieces
}
