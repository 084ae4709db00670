use crate::ids::impl_string_id;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

///
/// OperationName
///
/// The name a configuration entry dispatches on (e.g. "LiterateConsole").
/// Several signatures may share one name; they form an overload family.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OperationName(pub Cow<'static, str>);

impl_string_id!(OperationName);

///
/// SectionKind
///
/// The array-like sections beneath a configuration root that carry call
/// entries. Each kind has its own candidate list.
///

#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[remain::sorted]
pub enum SectionKind {
    AuditTo,
    Enrich,
    Filter,
    WriteTo,
}

impl SectionKind {
    pub const ALL: [Self; 4] = [Self::WriteTo, Self::AuditTo, Self::Enrich, Self::Filter];

    /// Key of the section beneath the configuration root.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AuditTo => "AuditTo",
            Self::Enrich => "Enrich",
            Self::Filter => "Filter",
            Self::WriteTo => "WriteTo",
        }
    }
}

///
/// TESTS
///
