//! Finds the exact byte span of a declaration's parameter list.

use jacksonify_text::{match_closing_paren, TextRange};

use crate::AnnotateError;

/// Parameter list delimiters: `open` is the index of `(`, `close` the index
/// of its matching `)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParamList {
    pub open: usize,
    pub close: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Locates the header parameter list of `record <name>`.
///
/// The keyword must be immediately followed by the declared name, with
/// identifier boundaries on both sides so `record PointMapper` does not match
/// a search for `Point`.
pub(crate) fn record_param_list(text: &str, name: &str) -> Result<ParamList, AnnotateError> {
    let needle = format!("record {name}");
    let mut search = 0usize;
    while let Some(rel) = text[search..].find(&needle) {
        let at = search + rel;
        search = at + needle.len();

        if at > 0 {
            let prev = text[..at].chars().next_back().unwrap_or(' ');
            if is_ident_char(prev) {
                continue;
            }
        }
        let after = at + needle.len();
        if text[after..].chars().next().is_some_and(is_ident_char) {
            continue;
        }

        return param_list_from(text, at, name);
    }
    Err(AnnotateError::NoEligibleDeclaration)
}

/// Finds the first `(` at or after `from` and matches its closing paren.
pub(crate) fn param_list_from(
    text: &str,
    from: usize,
    declaration: &str,
) -> Result<ParamList, AnnotateError> {
    let malformed = || AnnotateError::MalformedSpan {
        declaration: declaration.to_string(),
    };
    let open = text[from..].find('(').map(|i| from + i).ok_or_else(malformed)?;
    let close = match_closing_paren(text, open).ok_or_else(malformed)?;
    Ok(ParamList { open, close })
}

/// Returns the offset of the member's first real token inside `span`.
///
/// Skips leading annotation clauses (`@` + identifier, optionally followed by
/// a balanced parenthesized argument list) and the whitespace around them, so
/// the anchor lands on the member declaration proper rather than on
/// `@JsonCreator` or similar.
pub(crate) fn member_anchor(
    text: &str,
    span: TextRange,
    declaration: &str,
) -> Result<usize, AnnotateError> {
    let bytes = text.as_bytes();
    let end = span.end.min(bytes.len());
    let mut idx = span.start.min(end);
    loop {
        while idx < end && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx >= end || bytes[idx] != b'@' {
            return Ok(idx);
        }
        idx += 1;
        while idx < end && is_ident_byte(bytes[idx]) {
            idx += 1;
        }
        if idx < end && bytes[idx] == b'(' {
            match match_closing_paren(text, idx) {
                Some(close) if close < end => idx = close + 1,
                _ => {
                    return Err(AnnotateError::MalformedSpan {
                        declaration: declaration.to_string(),
                    })
                }
            }
        }
    }
}
