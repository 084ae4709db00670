//!
//! Raw string → typed argument conversion.
//!
//! Value kinds use their ordinary textual parse rules. Capability targets
//! either name a concrete registered type, which is resolved and
//! default-constructed, or fall back to the capability's conventional
//! default implementation when the value is blank or not a type reference.
//!

use crate::{
    ErrorKind, ThisError,
    ids::{CapabilityId, TypeRef},
    log::Topic,
    model::{ArgValue, EnumType, Instance, ParamType, TypeDescriptor},
    ops::{
        env::EnvOps,
        resolve::{TypeResolveError, TypeResolver},
    },
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::time::Duration;

///
/// ConvertError
///

#[derive(Debug, ThisError)]
pub enum ConvertError {
    #[error("cannot convert '{value}' to {target}: {reason}")]
    Parse {
        value: String,
        target: String,
        reason: String,
    },

    #[error("type '{type_name}' is not assignable to capability {capability}")]
    NotAssignable {
        type_name: String,
        capability: CapabilityId,
    },

    #[error("capability {capability} has no default implementation")]
    NoDefault { capability: CapabilityId },

    #[error(transparent)]
    TypeResolve(#[from] TypeResolveError),
}

impl ConvertError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeResolve(err) => err.kind(),
            _ => ErrorKind::Conversion,
        }
    }

    fn parse(value: &str, target: &ParamType, reason: impl Into<String>) -> Self {
        Self::Parse {
            value: value.to_string(),
            target: target.to_string(),
            reason: reason.into(),
        }
    }
}

///
/// ArgumentConverter
///

#[derive(Clone, Copy, Debug)]
pub struct ArgumentConverter<'a> {
    resolver: TypeResolver<'a>,
}

impl<'a> ArgumentConverter<'a> {
    #[must_use]
    pub const fn new(resolver: TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Expand `%NAME%` tokens in `raw`, then convert it to `target`.
    pub fn convert(&self, raw: &str, target: &ParamType) -> Result<ArgValue, ConvertError> {
        self.convert_expanded(&EnvOps::expand(raw), target)
    }

    /// Convert a value whose environment tokens were already expanded.
    pub fn convert_expanded(&self, value: &str, target: &ParamType) -> Result<ArgValue, ConvertError> {
        let text = value.trim();

        match target {
            ParamType::String => Ok(ArgValue::Str(value.to_string())),

            ParamType::Bool => {
                if text.eq_ignore_ascii_case("true") {
                    Ok(ArgValue::Bool(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(ArgValue::Bool(false))
                } else {
                    Err(ConvertError::parse(value, target, "expected true or false"))
                }
            }

            ParamType::I32 => text
                .parse::<i32>()
                .map(|n| ArgValue::Int(n.into()))
                .map_err(|e| ConvertError::parse(value, target, e.to_string())),

            ParamType::I64 => text
                .parse::<i64>()
                .map(ArgValue::Int)
                .map_err(|e| ConvertError::parse(value, target, e.to_string())),

            ParamType::U64 => text
                .parse::<u64>()
                .map(ArgValue::UInt)
                .map_err(|e| ConvertError::parse(value, target, e.to_string())),

            ParamType::F64 => text
                .parse::<f64>()
                .map(ArgValue::Float)
                .map_err(|e| ConvertError::parse(value, target, e.to_string())),

            ParamType::Enum(ty) => parse_enum(ty, text)
                .ok_or_else(|| {
                    ConvertError::parse(
                        value,
                        target,
                        format!("expected one of {}", ty.variants.join(", ")),
                    )
                }),

            ParamType::DateTime => parse_datetime(text)
                .map(ArgValue::DateTime)
                .ok_or_else(|| ConvertError::parse(value, target, "expected an RFC 3339 timestamp")),

            ParamType::Duration => parse_duration(text)
                .map(ArgValue::Duration)
                .map_err(|reason| ConvertError::parse(value, target, reason)),

            ParamType::Nullable(inner) => {
                if text.is_empty() {
                    Ok(ArgValue::Null)
                } else {
                    self.convert_expanded(value, inner)
                }
            }

            ParamType::Capability(capability) => self
                .convert_capability(text, capability)
                .map(ArgValue::Instance),
        }
    }

    // ---------------------------------------------------------------------
    // Capabilities
    // ---------------------------------------------------------------------

    fn convert_capability(
        &self,
        text: &str,
        capability: &CapabilityId,
    ) -> Result<Instance, ConvertError> {
        let Some(reference) = TypeRef::parse(text) else {
            if !text.is_empty() {
                crate::log!(
                    Topic::Convert,
                    Info,
                    "'{text}' is not a type reference; using default {capability}"
                );
            }
            return self.default_instance(capability);
        };

        let desc = self.resolver.resolve_ref(&reference)?;

        Self::instantiate_as(desc, capability)
    }

    /// Build the conventional default implementation of `capability`.
    pub fn default_instance(&self, capability: &CapabilityId) -> Result<Instance, ConvertError> {
        let default = self
            .resolver
            .registry()
            .capability(capability)
            .and_then(|c| c.default.as_ref())
            .ok_or_else(|| ConvertError::NoDefault {
                capability: capability.clone(),
            })?;

        let desc = self.resolver.resolve_ref(default)?;

        Self::instantiate_as(desc, capability)
    }

    fn instantiate_as(
        desc: &TypeDescriptor,
        capability: &CapabilityId,
    ) -> Result<Instance, ConvertError> {
        if !desc.is_assignable_to(capability) {
            return Err(ConvertError::NotAssignable {
                type_name: desc.name.to_string(),
                capability: capability.clone(),
            });
        }

        Ok(TypeResolver::instantiate(desc)?)
    }
}

// -------------------------------------------------------------------------
// Value parsers
// -------------------------------------------------------------------------

// exact variant name, or ordinal
fn parse_enum(ty: &EnumType, text: &str) -> Option<ArgValue> {
    let variant = ty
        .variants
        .iter()
        .find(|v| v.as_str() == text)
        .or_else(|| text.parse::<usize>().ok().and_then(|i| ty.variants.get(i)))?;

    Some(ArgValue::Enum {
        type_name: ty.name.clone(),
        variant: variant.clone(),
    })
}

fn parse_datetime(text: &str) -> Option<DateTime<chrono::FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
}

fn parse_duration(text: &str) -> Result<Duration, String> {
    if text.contains(':') {
        parse_clock(text).ok_or_else(|| "expected [d.]hh:mm[:ss[.fff]]".to_string())
    } else {
        humantime::parse_duration(text).map_err(|e| e.to_string())
    }
}

// [d.]hh:mm[:ss[.fff]]
fn parse_clock(text: &str) -> Option<Duration> {
    let (days, clock) = match text.split_once('.') {
        Some((d, rest)) if !d.contains(':') => (d.parse::<u64>().ok()?, rest),
        _ => (0, text),
    };

    let mut parts = clock.split(':');
    let hours = parts.next()?.parse::<u64>().ok().filter(|h| *h < 24)?;
    let minutes = parts.next()?.parse::<u64>().ok().filter(|m| *m < 60)?;
    let seconds = match parts.next() {
        Some(s) => s.parse::<f64>().ok().filter(|s| (0.0..60.0).contains(s))?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return None;
    }

    let whole = days
        .checked_mul(24)?
        .checked_add(hours)?
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_mul(60)?;

    Duration::from_secs(whole).checked_add(Duration::from_secs_f64(seconds))
}

///
/// TESTS
///
