use crate::{
    ids::{OperationName, SectionKind},
    model::{signature::Signature, value::ArgValue},
};

///
/// CallArguments
///
/// Raw argument name → value pairs in configuration order. Names are
/// case-sensitive keys; inserting an existing name replaces its value.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CallArguments(Vec<(String, String)>);

impl CallArguments {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CallArguments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.insert(k, v);
        }

        args
    }
}

///
/// CallDescriptor
/// One entry as read from configuration, before method resolution.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallDescriptor {
    pub name: OperationName,
    pub arguments: CallArguments,
}

///
/// ResolvedCall
///
/// A selected signature plus arguments positionally aligned to its
/// parameters. Parameters the entry did not supply hold their declared
/// default.
///

#[derive(Clone, Debug)]
pub struct ResolvedCall<'a> {
    pub signature: &'a Signature,
    pub arguments: Vec<ArgValue>,
}

impl ResolvedCall<'_> {
    /// Bound value of the parameter called `name` (exact match).
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ArgValue> {
        self.signature
            .params
            .iter()
            .position(|p| p.name == name)
            .and_then(|idx| self.arguments.get(idx))
    }
}

///
/// ConfigurationPlan
/// Resolved calls for every section kind beneath one configuration root.
///

#[derive(Clone, Debug, Default)]
pub struct ConfigurationPlan<'a> {
    pub write_to: Vec<ResolvedCall<'a>>,
    pub audit_to: Vec<ResolvedCall<'a>>,
    pub enrich: Vec<ResolvedCall<'a>>,
    pub filter: Vec<ResolvedCall<'a>>,
}

impl<'a> ConfigurationPlan<'a> {
    #[must_use]
    pub fn calls(&self, kind: SectionKind) -> &[ResolvedCall<'a>] {
        match kind {
            SectionKind::AuditTo => &self.audit_to,
            SectionKind::Enrich => &self.enrich,
            SectionKind::Filter => &self.filter,
            SectionKind::WriteTo => &self.write_to,
        }
    }

    pub(crate) fn calls_mut(&mut self, kind: SectionKind) -> &mut Vec<ResolvedCall<'a>> {
        match kind {
            SectionKind::AuditTo => &mut self.audit_to,
            SectionKind::Enrich => &mut self.enrich,
            SectionKind::Filter => &mut self.filter,
            SectionKind::WriteTo => &mut self.write_to,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        SectionKind::ALL.iter().map(|k| self.calls(*k).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_keep_order_and_last_wins() {
        let args: CallArguments = [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();

        assert_eq!(args.len(), 2);
        assert_eq!(args.names().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(args.get("b"), Some("3"));
    }

    #[test]
    fn argument_names_are_case_sensitive_keys() {
        let args: CallArguments = [("path", "x"), ("Path", "y")].into_iter().collect();

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("PATH"), None);
    }
}
