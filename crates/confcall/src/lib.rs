//! Confcall facade crate.
//!
//! This crate is the recommended dependency for hosts that configure
//! pluggable components from a configuration tree. It re-exports the public
//! Confcall surface and adds `Confcall`, an owning bundle of the registries
//! and settings a resolution pass borrows.
//!
//! For lower-level access, use the `model`, `ops`, `policy` and `workflow`
//! modules directly.

// -----------------------------------------------------------------------------
// Public data contracts
// -----------------------------------------------------------------------------
pub use confcall_core::{config, ids, model};

// -----------------------------------------------------------------------------
// Components
// -----------------------------------------------------------------------------
pub use confcall_core::{ops, policy, workflow};

// -----------------------------------------------------------------------------
// Re-exports
// -----------------------------------------------------------------------------
pub use confcall_core::{Error, ErrorKind, log};

use confcall_core::{
    config::ConfigModel,
    model::{ConfigSection, ConfigurationPlan, ExtensionRegistry, TypeRegistry},
    workflow::Dispatcher,
};

// -----------------------------------------------------------------------------
// Constants
// -----------------------------------------------------------------------------

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------

///
/// Opinionated prelude for host crates.
///

pub mod prelude {
    pub use crate::{
        Confcall, Error, ErrorKind,
        config::ConfigModel,
        ids::{CapabilityId, OperationName, SectionKind, TypeRef},
        model::{
            ArgValue, ConfigSection, ConfigurationPlan, EnumType, ExtensionRegistry, Instance,
            ParamType, ResolvedCall, Signature, TypeDescriptor, TypeRegistry, default_factory,
        },
        workflow::{ConfigurationReader, Dispatcher},
    };
}

///
/// Confcall
///
/// Owns the extension registry, type registry and engine settings so that
/// callers need not juggle three borrows to run a pass.
///

#[derive(Clone, Debug)]
pub struct Confcall {
    extensions: ExtensionRegistry,
    types: TypeRegistry,
    config: ConfigModel,
}

impl Confcall {
    /// Bundle the registries with `config` and install its log threshold.
    ///
    /// The threshold is process-wide; when several bundles are built, the
    /// last one installed wins. Use `with_config` to leave it untouched.
    #[must_use]
    pub fn new(extensions: ExtensionRegistry, types: TypeRegistry, config: ConfigModel) -> Self {
        config.log.install();

        Self::with_config(extensions, types, config)
    }

    /// Bundle the registries with `config` without touching the log
    /// threshold.
    #[must_use]
    pub const fn with_config(
        extensions: ExtensionRegistry,
        types: TypeRegistry,
        config: ConfigModel,
    ) -> Self {
        Self {
            extensions,
            types,
            config,
        }
    }

    /// Same as `new`, with settings parsed from TOML.
    pub fn from_toml(
        extensions: ExtensionRegistry,
        types: TypeRegistry,
        settings: &str,
    ) -> Result<Self, Error> {
        let config = ConfigModel::from_toml(settings)?;

        Ok(Self::new(extensions, types, config))
    }

    #[must_use]
    pub const fn config(&self) -> &ConfigModel {
        &self.config
    }

    #[must_use]
    pub const fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.extensions, &self.types, &self.config)
    }

    /// Resolve every call section beneath `root`.
    pub fn read(&self, root: &ConfigSection) -> Result<ConfigurationPlan<'_>, Error> {
        self.dispatcher().read(root)
    }
}
