//! Jackson property-annotation injection for Java records and classes.
//!
//! Given the text of a Java file and a [`DeclarationDescriptor`] for one
//! record or class in it, [`annotate_source`] returns new text in which every
//! parameter of the record header (or of the chosen creator constructor)
//! carries `@JsonProperty(required = true)`, and the matching Jackson import
//! is present exactly once. The transform is a pure function: it performs no
//! I/O, keeps all other bytes untouched, and is idempotent, so running it on
//! its own output changes nothing.
//!
//! On any error the caller's input string is simply left in its hands
//! unmodified; there is no partially-rewritten state.

mod creator;
mod descriptor;
mod imports;
mod inject;
mod locate;

use thiserror::Error;

pub use creator::CREATOR_MARKER;
pub use descriptor::{DeclKind, DeclarationDescriptor, MemberInfo};
pub use imports::JSON_PROPERTY_IMPORT;
pub use inject::PROPERTY_ANNOTATION;
pub use jacksonify_text::{EditError, TextRange};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// The descriptor does not match a record or class declaration in the
    /// text; callers usually treat this as "action not applicable".
    #[error("no record or class declaration eligible for annotation")]
    NoEligibleDeclaration,
    /// Several constructors and no `@JsonCreator` marker; the user has to
    /// pick one.
    #[error("`{class}` does not have a unique constructor; add @JsonCreator to one manually and retry")]
    AmbiguousCreator { class: String },
    /// A parenthesis or bracket span could not be matched.
    #[error("could not match the parameter list delimiters of `{declaration}`")]
    MalformedSpan { declaration: String },
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Rewrites `source` so the declaration described by `descriptor` has
/// `@JsonProperty(required = true)` on every parameter that lacks it, and
/// the Jackson import is present.
///
/// Records are annotated on their header component list. Classes first go
/// through creator selection: a constructor already marked `@JsonCreator` is
/// used as-is, a sole unmarked constructor is auto-marked, and anything else
/// fails with [`AnnotateError::AmbiguousCreator`].
pub fn annotate_source(
    source: &str,
    descriptor: &DeclarationDescriptor,
) -> Result<String, AnnotateError> {
    match descriptor.kind {
        DeclKind::Record => {
            let params = locate::record_param_list(source, &descriptor.name)?;
            let updated = inject::inject_property_annotations(source, &params)?;
            imports::ensure_import(&updated)
        }
        DeclKind::Class => {
            let selected = creator::select_creator(source, descriptor)?;
            let params = locate::param_list_from(&selected.text, selected.anchor, &descriptor.name)?;
            let updated = inject::inject_property_annotations(&selected.text, &params)?;
            imports::ensure_import(&updated)
        }
    }
}
