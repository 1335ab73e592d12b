//! Rewrites a parameter list so every parameter carries the required
//! property annotation.

use jacksonify_text::{apply_text_edits, split_top_level, TextEdit, TextRange};

use crate::locate::ParamList;
use crate::AnnotateError;

/// Simple name of the per-parameter annotation.
pub const PROPERTY_ANNOTATION: &str = "JsonProperty";

/// Literal prefixed to parameters that do not carry the annotation yet.
const PROPERTY_LITERAL: &str = "@JsonProperty(required = true) ";

/// Replaces the contents of the parameter list at `params` with one
/// parameter per line, prefixing `@JsonProperty(required = true)` to every
/// parameter whose text does not already mention the annotation.
///
/// Parameters that mention it are re-emitted verbatim, which makes a second
/// pass over the output byte-identical. Order and arity are preserved; the
/// delimiting parens and everything outside them are untouched.
pub(crate) fn inject_property_annotations(
    text: &str,
    params: &ParamList,
) -> Result<String, AnnotateError> {
    let components = text[params.open + 1..params.close].trim();

    let mut block = String::new();
    let mut first = true;
    for piece in split_top_level(components) {
        if piece.is_empty() {
            continue;
        }
        if !first {
            block.push(',');
        }
        first = false;
        block.push_str("\n\t\t");
        if !piece.contains(PROPERTY_ANNOTATION) {
            block.push_str(PROPERTY_LITERAL);
        }
        block.push_str(piece);
    }
    block.push('\n');

    let edit = TextEdit::replace(TextRange::new(params.open + 1, params.close), block);
    Ok(apply_text_edits(text, &[edit])?)
}
