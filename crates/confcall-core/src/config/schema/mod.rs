mod log;
mod selection;

pub use log::*;
pub use selection::*;

use crate::{ThisError, ids::ModuleName, ids::TypeRef};
use serde::{Deserialize, Serialize};

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub const NAME_MAX_BYTES: usize = 64;

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub types: TypesConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.types.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

///
/// TypesConfig
///

mod defaults {
    use crate::ids::ModuleName;

    pub const fn default_module() -> ModuleName {
        ModuleName::new("core")
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TypesConfig {
    /// Module that bare simple type names resolve against.
    #[serde(default = "defaults::default_module")]
    pub default_module: ModuleName,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            default_module: defaults::default_module(),
        }
    }
}

impl Validate for TypesConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        let module = self.default_module.as_str();

        if module.len() > NAME_MAX_BYTES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "types.default_module '{module}' exceeds {NAME_MAX_BYTES} bytes",
            )));
        }

        // a module name is valid iff it parses as the qualifier of a reference
        let probe = format!("Probe, {module}");
        if TypeRef::parse(&probe).is_none() {
            return Err(ConfigSchemaError::ValidationError(format!(
                "types.default_module '{module}' is not a valid module name",
            )));
        }

        Ok(())
    }
}
