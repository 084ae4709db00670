//!
//! Identifiers for the type side of resolution: modules, concrete type
//! names, capabilities, and parsed type references.
//!

use crate::ids::impl_string_id;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

///
/// ModuleName
/// A loadable unit of types (the qualifier after the comma in a reference).
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ModuleName(pub Cow<'static, str>);

impl_string_id!(ModuleName);

///
/// TypeName
/// Fully qualified, dot-separated name of a concrete type.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TypeName(pub Cow<'static, str>);

impl_string_id!(TypeName);

impl TypeName {
    /// Last dot-separated segment ("JsonFormatter" for "Formatting.Json.JsonFormatter").
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.as_str().rsplit('.').next().unwrap_or_default()
    }
}

///
/// CapabilityId
/// Tag of an abstract capability that concrete types may implement.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CapabilityId(pub Cow<'static, str>);

impl_string_id!(CapabilityId);

///
/// TypeRef
///
/// A parsed type reference: `Full.Type.Name` or `Full.Type.Name, Module`.
/// Trailing `key=value` qualifiers after the module (version, culture, ...)
/// are accepted and ignored.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeRef {
    pub name: TypeName,
    pub module: Option<ModuleName>,
}

impl TypeRef {
    #[must_use]
    pub fn new(name: impl Into<TypeName>, module: Option<ModuleName>) -> Self {
        Self {
            name: name.into(),
            module,
        }
    }

    /// Parse a reference string; returns `None` when the text is not
    /// syntactically a type reference.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split(',').map(str::trim);

        let name = parts.next().filter(|n| is_type_path(n))?;
        let module = match parts.next() {
            None => None,
            Some(m) if is_module_name(m) => Some(ModuleName::owned(m.to_string())),
            Some(_) => return None,
        };

        if !parts.all(|qualifier| qualifier.contains('=')) {
            return None;
        }

        Some(Self::new(TypeName::owned(name.to_string()), module))
    }

    /// True when the reference carries no namespace and no module.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.module.is_none() && !self.name.as_str().contains('.')
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}, {module}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_type_path(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

// Module names may be dotted ("Serilog.Sinks.File").
fn is_module_name(s: &str) -> bool {
    is_type_path(s)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_qualified_reference() {
        let r = TypeRef::parse("Serilog.Formatting.Json.JsonFormatter, Serilog").unwrap();
        assert_eq!(r.name.as_str(), "Serilog.Formatting.Json.JsonFormatter");
        assert_eq!(r.module.as_ref().map(ModuleName::as_str), Some("Serilog"));
        assert_eq!(r.name.simple_name(), "JsonFormatter");
        assert!(!r.is_simple());
    }

    #[test]
    fn parses_simple_reference_with_whitespace() {
        let r = TypeRef::parse("  JsonFormatter ").unwrap();
        assert_eq!(r.name.as_str(), "JsonFormatter");
        assert!(r.module.is_none());
        assert!(r.is_simple());
    }

    #[test]
    fn ignores_version_qualifiers() {
        let r = TypeRef::parse("A.B, Mod.Core, Version=1.0.0.0, Culture=neutral").unwrap();
        assert_eq!(r.to_string(), "A.B, Mod.Core");
    }

    #[test]
    fn rejects_non_references() {
        for text in ["", "   ", "C:\\logs\\app.log", "two words", "A..B", "A.B,", "A, B, C"] {
            assert!(TypeRef::parse(text).is_none(), "{text:?} parsed");
        }
    }
}
