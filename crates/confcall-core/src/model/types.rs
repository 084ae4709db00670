//!
//! Registry of loadable modules, concrete types and capabilities.
//!
//! Every concrete type a configuration may name is declared up front with
//! the capabilities it implements and a factory producing its default
//! instance.
//!

use crate::ids::{CapabilityId, ModuleName, TypeName, TypeRef};
use std::{
    any::Any,
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

/// Produce a default-constructed payload; `Err` carries the load failure.
pub type Factory = fn() -> Result<Arc<dyn Any + Send + Sync>, String>;

/// `Factory` for any `Default` type.
pub fn default_factory<T>() -> Result<Arc<dyn Any + Send + Sync>, String>
where
    T: Any + Default + Send + Sync,
{
    Ok(Arc::new(T::default()))
}

///
/// TypeDescriptor
///

#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub module: ModuleName,
    pub implements: BTreeSet<CapabilityId>,
    pub factory: Factory,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(module: impl Into<ModuleName>, name: impl Into<TypeName>, factory: Factory) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            implements: BTreeSet::new(),
            factory,
        }
    }

    #[must_use]
    pub fn implements(mut self, capability: impl Into<CapabilityId>) -> Self {
        self.implements.insert(capability.into());
        self
    }

    #[must_use]
    pub fn is_assignable_to(&self, capability: &CapabilityId) -> bool {
        self.implements.contains(capability)
    }
}

///
/// Capability
///

#[derive(Clone, Debug)]
pub struct Capability {
    pub id: CapabilityId,

    /// Conventional default implementation, if the capability defines one.
    pub default: Option<TypeRef>,
}

///
/// TypeRegistry
///

#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    modules: BTreeMap<ModuleName, BTreeMap<TypeName, TypeDescriptor>>,
    capabilities: BTreeMap<CapabilityId, Capability>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a module as loadable even before any type is registered in it.
    pub fn register_module(&mut self, module: impl Into<ModuleName>) -> &mut Self {
        self.modules.entry(module.into()).or_default();
        self
    }

    pub fn register_type(&mut self, desc: TypeDescriptor) -> &mut Self {
        self.modules
            .entry(desc.module.clone())
            .or_default()
            .insert(desc.name.clone(), desc);
        self
    }

    pub fn register_capability(
        &mut self,
        id: impl Into<CapabilityId>,
        default: Option<TypeRef>,
    ) -> &mut Self {
        let id = id.into();
        self.capabilities
            .insert(id.clone(), Capability { id, default });
        self
    }

    // ---------------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn has_module(&self, module: &ModuleName) -> bool {
        self.modules.contains_key(module)
    }

    #[must_use]
    pub fn get(&self, module: &ModuleName, name: &TypeName) -> Option<&TypeDescriptor> {
        self.modules.get(module)?.get(name)
    }

    /// Types in `module` whose last name segment equals `simple`.
    pub fn find_simple<'a, 's>(
        &'a self,
        module: &ModuleName,
        simple: &'s str,
    ) -> impl Iterator<Item = &'a TypeDescriptor> + use<'a, 's> {
        self.modules
            .get(module)
            .into_iter()
            .flat_map(BTreeMap::values)
            .filter(move |desc| desc.name.simple_name() == simple)
    }

    #[must_use]
    pub fn capability(&self, id: &CapabilityId) -> Option<&Capability> {
        self.capabilities.get(id)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Plain;

    #[test]
    fn registers_and_looks_up_types() {
        let mut reg = TypeRegistry::new();
        reg.register_type(
            TypeDescriptor::new("core", "Formatting.Plain", default_factory::<Plain>)
                .implements("ITextFormatter"),
        );

        let module = ModuleName::new("core");
        let desc = reg.get(&module, &TypeName::new("Formatting.Plain")).unwrap();

        assert!(desc.is_assignable_to(&CapabilityId::new("ITextFormatter")));
        assert!(!desc.is_assignable_to(&CapabilityId::new("ISink")));
        assert_eq!(reg.find_simple(&module, "Plain").count(), 1);
        assert!(reg.has_module(&module));
        assert!(!reg.has_module(&ModuleName::new("other")));
    }

    #[test]
    fn default_factory_builds_payload() {
        let payload = default_factory::<Plain>().unwrap();
        assert!(payload.is::<Plain>());
    }
}
