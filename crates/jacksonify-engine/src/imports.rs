//! Guarantees the Jackson import is present exactly once.

use jacksonify_text::{apply_text_edits, TextEdit};

use crate::AnnotateError;

/// Fully qualified import required by the injected annotation.
pub const JSON_PROPERTY_IMPORT: &str = "import com.fasterxml.jackson.annotation.JsonProperty;";

/// Inserts the Jackson import after the package statement unless it is
/// already present anywhere in the text. Files without a package statement
/// are left alone.
pub(crate) fn ensure_import(text: &str) -> Result<String, AnnotateError> {
    if text.contains(JSON_PROPERTY_IMPORT) {
        return Ok(text.to_string());
    }
    let Some(package) = text.find("package ") else {
        return Ok(text.to_string());
    };
    let Some(semi) = text[package..].find(';').map(|i| package + i) else {
        return Ok(text.to_string());
    };

    let edit = TextEdit::insert(semi + 1, format!("\n\n{JSON_PROPERTY_IMPORT}"));
    Ok(apply_text_edits(text, &[edit])?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inserts_after_package_statement() {
        let out = ensure_import("package com.example;\n\nrecord R(int x) {}\n").unwrap();
        assert_eq!(
            out,
            "package com.example;\n\nimport com.fasterxml.jackson.annotation.JsonProperty;\n\nrecord R(int x) {}\n"
        );
    }

    #[test]
    fn present_import_is_a_no_op() {
        let text =
            "package p;\n\nimport com.fasterxml.jackson.annotation.JsonProperty;\n\nrecord R(int x) {}\n";
        assert_eq!(ensure_import(text).unwrap(), text);
    }

    #[test]
    fn running_twice_never_duplicates_the_import() {
        let once = ensure_import("package p;\nrecord R(int x) {}\n").unwrap();
        let twice = ensure_import(&once).unwrap();
        assert_eq!(twice, once);
        assert_eq!(twice.matches(JSON_PROPERTY_IMPORT).count(), 1);
    }

    #[test]
    fn package_less_file_is_left_alone() {
        let text = "record R(int x) {}\n";
        assert_eq!(ensure_import(text).unwrap(), text);
    }
}
