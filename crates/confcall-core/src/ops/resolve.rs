use crate::{
    ErrorKind, ThisError,
    ids::{ModuleName, TypeRef},
    log::Topic,
    model::{Instance, TypeDescriptor, TypeRegistry},
};

///
/// TypeResolveError
///

#[derive(Debug, ThisError)]
pub enum TypeResolveError {
    #[error("'{0}' is not a type reference")]
    InvalidReference(String),

    #[error("type '{reference}' not found")]
    NotFound { reference: String },

    #[error("type '{reference}' names module '{module}', which is not loaded")]
    ModuleNotLoaded { reference: String, module: ModuleName },

    #[error("type '{reference}' matches {count} types in module '{module}'")]
    AmbiguousSimpleName {
        reference: String,
        module: ModuleName,
        count: usize,
    },

    #[error("type '{type_name}' failed to load: {reason}")]
    Instantiation { type_name: String, reason: String },
}

impl TypeResolveError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidReference(_) | Self::NotFound { .. } => ErrorKind::TypeNotFound,
            Self::ModuleNotLoaded { .. }
            | Self::AmbiguousSimpleName { .. }
            | Self::Instantiation { .. } => ErrorKind::TypeResolution,
        }
    }
}

///
/// TypeResolver
///
/// Turns type-reference strings into registered descriptors and builds
/// their default instances. Nothing is cached between calls; repeated
/// resolution goes back to the registry each time.
///

#[derive(Clone, Copy, Debug)]
pub struct TypeResolver<'a> {
    registry: &'a TypeRegistry,
    default_module: &'a ModuleName,
}

impl<'a> TypeResolver<'a> {
    #[must_use]
    pub const fn new(registry: &'a TypeRegistry, default_module: &'a ModuleName) -> Self {
        Self {
            registry,
            default_module,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Parse and resolve a reference string.
    pub fn resolve(&self, reference: &str) -> Result<&'a TypeDescriptor, TypeResolveError> {
        let parsed = TypeRef::parse(reference)
            .ok_or_else(|| TypeResolveError::InvalidReference(reference.to_string()))?;

        self.resolve_ref(&parsed)
    }

    /// Resolve an already parsed reference.
    ///
    /// Qualified references look only in their module. Unqualified ones look
    /// in the default module, first by full name and then, for a bare simple
    /// name, by unique last segment.
    pub fn resolve_ref(&self, reference: &TypeRef) -> Result<&'a TypeDescriptor, TypeResolveError> {
        let module = reference.module.as_ref().unwrap_or(self.default_module);

        if !self.registry.has_module(module) {
            return Err(TypeResolveError::ModuleNotLoaded {
                reference: reference.to_string(),
                module: module.clone(),
            });
        }

        if let Some(desc) = self.registry.get(module, &reference.name) {
            return Ok(desc);
        }

        if reference.is_simple() {
            let mut matches = self.registry.find_simple(module, reference.name.as_str());

            match (matches.next(), matches.count()) {
                (Some(desc), 0) => {
                    crate::log!(Topic::Types, Debug, "{reference} → {}", desc.name);
                    return Ok(desc);
                }
                (Some(_), rest) => {
                    return Err(TypeResolveError::AmbiguousSimpleName {
                        reference: reference.to_string(),
                        module: module.clone(),
                        count: rest + 1,
                    });
                }
                (None, _) => {}
            }
        }

        Err(TypeResolveError::NotFound {
            reference: reference.to_string(),
        })
    }

    /// Default-construct an instance of a resolved type.
    pub fn instantiate(desc: &TypeDescriptor) -> Result<Instance, TypeResolveError> {
        let value = (desc.factory)().map_err(|reason| TypeResolveError::Instantiation {
            type_name: desc.name.to_string(),
            reason,
        })?;

        Ok(Instance::new(desc.name.clone(), value))
    }
}

///
/// TESTS
///
