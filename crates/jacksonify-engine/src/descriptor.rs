use jacksonify_text::TextRange;
use serde::{Deserialize, Serialize};

/// Kind of type declaration targeted by the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclKind {
    Record,
    Class,
}

/// One constructor-like member of a class.
///
/// For records the canonical constructor is implicit and no `MemberInfo` is
/// needed; for classes the caller lists every declared constructor in
/// declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    /// Byte range of the member's full source, including any annotations
    /// directly preceding its first token.
    pub span: TextRange,
    /// Simple names of the annotations already present on the member.
    pub annotations: Vec<String>,
}

impl MemberInfo {
    pub fn new(span: TextRange) -> Self {
        Self {
            span,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations<I, S>(span: TextRange, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            span,
            annotations: annotations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a == name)
    }
}

/// Structural description of the one declaration to rewrite.
///
/// The caller derives this from its own parse of the file (type kind, member
/// spans, member annotations); the engine treats it as opaque and already
/// validated. Every span must be byte-accurate against the exact text value
/// passed alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationDescriptor {
    pub kind: DeclKind,
    pub name: String,
    pub members: Vec<MemberInfo>,
}

impl DeclarationDescriptor {
    pub fn record(name: impl Into<String>) -> Self {
        Self {
            kind: DeclKind::Record,
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>, members: Vec<MemberInfo>) -> Self {
        Self {
            kind: DeclKind::Class,
            name: name.into(),
            members,
        }
    }
}
