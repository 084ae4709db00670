//! Data owned by the engine: the input tree, declared signatures, typed
//! values, and the registries a collaborator fills in at startup.

pub mod call;
pub mod registry;
pub mod section;
pub mod signature;
pub mod types;
pub mod value;

pub use call::{CallArguments, CallDescriptor, ConfigurationPlan, ResolvedCall};
pub use registry::ExtensionRegistry;
pub use section::ConfigSection;
pub use signature::{EnumType, ParamType, Parameter, Signature};
pub use types::{Capability, Factory, TypeDescriptor, TypeRegistry, default_factory};
pub use value::{ArgValue, Instance};
