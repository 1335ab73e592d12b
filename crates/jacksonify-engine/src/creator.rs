//! Chooses which constructor-like member of a class to annotate.

use jacksonify_text::{apply_text_edits, TextEdit};

use crate::locate::member_anchor;
use crate::{AnnotateError, DeclarationDescriptor};

/// Simple name of the annotation that designates the deserialization
/// constructor.
pub const CREATOR_MARKER: &str = "JsonCreator";

/// Literal inserted when auto-marking a sole unmarked constructor.
const CREATOR_LITERAL: &str = "@JsonCreator\n\t";

/// A selected creator member, with the (possibly auto-marked) text it lives
/// in and the offset of its first token in that text.
#[derive(Clone, Debug)]
pub(crate) struct SelectedCreator {
    pub text: String,
    pub anchor: usize,
}

/// Selection policy over the class's candidate members:
///
/// 1. a candidate already annotated `@JsonCreator` is used directly;
/// 2. otherwise a sole candidate is auto-marked by inserting the marker
///    annotation before its first token;
/// 3. otherwise (zero or several unmarked candidates) the choice is
///    ambiguous and nothing is mutated.
pub(crate) fn select_creator(
    text: &str,
    descriptor: &DeclarationDescriptor,
) -> Result<SelectedCreator, AnnotateError> {
    if let Some(marked) = descriptor
        .members
        .iter()
        .find(|m| m.has_annotation(CREATOR_MARKER))
    {
        let anchor = member_anchor(text, marked.span, &descriptor.name)?;
        tracing::debug!(
            target = "jacksonify.engine",
            class = %descriptor.name,
            "using constructor already marked @JsonCreator"
        );
        return Ok(SelectedCreator {
            text: text.to_string(),
            anchor,
        });
    }

    match descriptor.members.as_slice() {
        [only] => {
            let anchor = member_anchor(text, only.span, &descriptor.name)?;
            let updated = apply_text_edits(text, &[TextEdit::insert(anchor, CREATOR_LITERAL)])?;
            tracing::debug!(
                target = "jacksonify.engine",
                class = %descriptor.name,
                "auto-marked sole constructor with @JsonCreator"
            );
            Ok(SelectedCreator {
                text: updated,
                anchor: anchor + CREATOR_LITERAL.len(),
            })
        }
        _ => Err(AnnotateError::AmbiguousCreator {
            class: descriptor.name.clone(),
        }),
    }
}
