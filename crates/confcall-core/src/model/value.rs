use crate::ids::TypeName;
use chrono::{DateTime, FixedOffset};
use std::{any::Any, fmt, sync::Arc, time::Duration};

///
/// Instance
///
/// A default-constructed reference-typed value, tagged with the concrete
/// type it was built from. Cheap to clone; the payload is shared.
///

#[derive(Clone)]
pub struct Instance {
    type_name: TypeName,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    #[must_use]
    pub fn new(type_name: TypeName, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self { type_name, value }
    }

    /// Name of the concrete type this instance was built from.
    #[must_use]
    pub const fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

///
/// ArgValue
///
/// A strongly-typed argument, positionally bound to one parameter of a
/// selected signature.
///

#[derive(Clone, Debug)]
pub enum ArgValue {
    Null,
    Str(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Enum { type_name: String, variant: String },
    DateTime(DateTime<FixedOffset>),
    Duration(Duration),
    Instance(Instance),
}

impl ArgValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Variant name for enumeration values.
    #[must_use]
    pub fn as_variant(&self) -> Option<&str> {
        match self {
            Self::Enum { variant, .. } => Some(variant),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<Instance> for ArgValue {
    fn from(i: Instance) -> Self {
        Self::Instance(i)
    }
}

///
/// TESTS
///
