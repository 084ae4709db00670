//!
//! Statically declared operation signatures.
//!
//! A collaborator builds these once at startup; the selector and converter
//! only ever read them.
//!

use crate::{
    ids::{CapabilityId, OperationName},
    model::value::ArgValue,
};
use std::{fmt, sync::Arc};

///
/// EnumType
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub variants: Vec<String>,
}

impl EnumType {
    #[must_use]
    pub fn new(name: impl Into<String>, variants: &[&str]) -> Self {
        Self {
            name: name.into(),
            variants: variants.iter().map(ToString::to_string).collect(),
        }
    }
}

///
/// ParamType
/// Target type tag of a declared parameter.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamType {
    String,
    Bool,
    I32,
    I64,
    U64,
    F64,
    Enum(Arc<EnumType>),
    DateTime,
    Duration,
    Nullable(Box<Self>),
    Capability(CapabilityId),
}

impl ParamType {
    #[must_use]
    pub fn enumeration(ty: EnumType) -> Self {
        Self::Enum(Arc::new(ty))
    }

    #[must_use]
    pub fn nullable(inner: Self) -> Self {
        Self::Nullable(Box::new(inner))
    }

    #[must_use]
    pub fn capability(id: impl Into<CapabilityId>) -> Self {
        Self::Capability(id.into())
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::U64 => write!(f, "u64"),
            Self::F64 => write!(f, "f64"),
            Self::Enum(ty) => write!(f, "enum {}", ty.name),
            Self::DateTime => write!(f, "datetime"),
            Self::Duration => write!(f, "duration"),
            Self::Nullable(inner) => write!(f, "nullable<{inner}>"),
            Self::Capability(id) => write!(f, "capability {id}"),
        }
    }
}

///
/// Parameter
///

#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: String,
    pub ty: ParamType,

    /// Declared default; `None` makes the parameter required.
    pub default: Option<ArgValue>,
}

impl Parameter {
    #[must_use]
    pub fn required(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    #[must_use]
    pub fn optional(name: impl Into<String>, ty: ParamType, default: ArgValue) -> Self {
        Self {
            name: name.into(),
            ty,
            default: Some(default),
        }
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

///
/// Signature
/// One overload of a named operation.
///

#[derive(Clone, Debug)]
pub struct Signature {
    pub name: OperationName,
    pub params: Vec<Parameter>,
}

impl Signature {
    #[must_use]
    pub fn new(name: impl Into<OperationName>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn required(self, name: impl Into<String>, ty: ParamType) -> Self {
        self.param(Parameter::required(name, ty))
    }

    #[must_use]
    pub fn optional(self, name: impl Into<String>, ty: ParamType, default: ArgValue) -> Self {
        self.param(Parameter::optional(name, ty, default))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", p.name, p.ty)?;
            if !p.is_required() {
                write!(f, "?")?;
            }
        }
        write!(f, ")")
    }
}

///
/// TESTS
///
