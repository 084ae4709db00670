use crate::{ids::SectionKind, model::signature::Signature};
use std::collections::BTreeMap;

///
/// ExtensionRegistry
///
/// Flat candidate lists, one per section kind, supplied by the collaborator
/// that owns the operation implementations. Overloads are simply several
/// signatures sharing a name.
///

#[derive(Clone, Debug, Default)]
pub struct ExtensionRegistry {
    sections: BTreeMap<SectionKind, Vec<Signature>>,
}

impl ExtensionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: SectionKind, signature: Signature) -> &mut Self {
        self.sections.entry(kind).or_default().push(signature);
        self
    }

    #[must_use]
    pub fn with(mut self, kind: SectionKind, signature: Signature) -> Self {
        self.register(kind, signature);
        self
    }

    /// Candidates for one section kind, in registration order.
    #[must_use]
    pub fn candidates(&self, kind: SectionKind) -> &[Signature] {
        self.sections.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }
}

///
/// TESTS
///
