use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A half-open text range `[start, end)` in UTF-8 byte offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid range: {start}..{end}");
        Self { start, end }
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A single edit against one file's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::new(offset, offset),
            replacement: text.into(),
        }
    }

    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("overlapping edits: {first:?} overlaps {second:?}")]
    OverlappingEdits { first: TextRange, second: TextRange },
    #[error("text edit range {range:?} is outside the file bounds (len={len})")]
    OutOfBounds { range: TextRange, len: usize },
}

/// Apply a set of edits to `original` and return the modified text.
///
/// All ranges must be valid for `original` and pairwise non-overlapping.
/// Edits are applied back-to-front so earlier ranges stay valid.
pub fn apply_text_edits(original: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(original.to_string());
    }

    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        b.range
            .start
            .cmp(&a.range.start)
            .then_with(|| b.range.end.cmp(&a.range.end))
    });

    let mut out = original.to_string();
    let mut applied: Option<TextRange> = None;
    for edit in sorted {
        if edit.range.end > original.len() {
            return Err(EditError::OutOfBounds {
                range: edit.range,
                len: original.len(),
            });
        }
        if let Some(next) = applied {
            if edit.range.end > next.start {
                return Err(EditError::OverlappingEdits {
                    first: edit.range,
                    second: next,
                });
            }
        }
        out.replace_range(edit.range.start..edit.range.end, &edit.replacement);
        applied = Some(edit.range);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn applies_insert_and_replace_in_document_order() {
        let original = "record Point(int x)";
        let edits = [
            TextEdit::insert(0, "public "),
            TextEdit::replace(TextRange::new(13, 18), "long x"),
        ];
        assert_eq!(
            apply_text_edits(original, &edits).unwrap(),
            "public record Point(long x)"
        );
    }

    #[test]
    fn empty_edit_set_is_identity() {
        assert_eq!(apply_text_edits("abc", &[]).unwrap(), "abc");
    }

    #[test]
    fn rejects_out_of_bounds_range() {
        let err = apply_text_edits("abc", &[TextEdit::replace(TextRange::new(1, 9), "x")])
            .unwrap_err();
        assert_eq!(
            err,
            EditError::OutOfBounds {
                range: TextRange::new(1, 9),
                len: 3,
            }
        );
    }

    #[test]
    fn rejects_overlapping_ranges() {
        let edits = [
            TextEdit::replace(TextRange::new(0, 2), "x"),
            TextEdit::replace(TextRange::new(1, 3), "y"),
        ];
        assert!(matches!(
            apply_text_edits("abcd", &edits),
            Err(EditError::OverlappingEdits { .. })
        ));
    }
}
