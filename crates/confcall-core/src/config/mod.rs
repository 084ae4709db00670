pub mod schema;

use crate::{ThisError, log::Topic};
use schema::{ConfigSchemaError, Validate};

pub use schema::ConfigModel;

//
// CONFIG
//
// Engine settings are loaded once by the caller and lent to the
// dispatcher. There is no global settings slot; the only process-wide
// state is the log threshold, set by `LogConfig::install` (last call wins).
//

/// Errors related to engine settings parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

impl ConfigModel {
    /// Parse and validate settings from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config
            .validate()
            .inspect_err(|err| crate::log!(Topic::Config, Warn, "rejected settings: {err}"))?;

        Ok(config)
    }

    /// Return the settings as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::schema::{NameMatching, TieBreak},
        log::Level,
    };

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = ConfigModel::from_toml("").unwrap();

        assert_eq!(cfg.selection.operation_names, NameMatching::CaseInsensitive);
        assert_eq!(cfg.selection.argument_names, NameMatching::CaseSensitive);
        assert_eq!(cfg.selection.tie_break, TieBreak::FewestParameters);
        assert_eq!(cfg.types.default_module.as_str(), "core");
        assert_eq!(cfg.log.level, Level::Warn);
    }

    #[test]
    fn parses_every_section() {
        let cfg = ConfigModel::from_toml(
            r#"
            [selection]
            operation_names = "case-sensitive"
            tie_break = "reject"

            [types]
            default_module = "Serilog"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.selection.operation_names, NameMatching::CaseSensitive);
        assert_eq!(cfg.selection.argument_names, NameMatching::CaseSensitive);
        assert_eq!(cfg.selection.tie_break, TieBreak::Reject);
        assert_eq!(cfg.types.default_module.as_str(), "Serilog");
        assert_eq!(cfg.log.level, Level::Debug);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ConfigModel::from_toml("[selection]\nfuzzy = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn invalid_default_module_fails_validation() {
        let err = ConfigModel::from_toml("[types]\ndefault_module = \"not a module\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigSchema(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = ConfigModel::default();
        let text = cfg.to_toml().unwrap();
        let parsed = ConfigModel::from_toml(&text).unwrap();

        assert_eq!(parsed.types.default_module, cfg.types.default_module);
    }
}
