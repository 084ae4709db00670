use super::{ConfigSchemaError, Validate};
use crate::log::{Level, Topic};
use serde::{Deserialize, Serialize};

///
/// LogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub level: Level,
}

impl LogConfig {
    /// Make `level` the process-wide logging threshold.
    ///
    /// There is one threshold per process; the last call wins.
    pub fn install(&self) {
        crate::log::set_min_level(self.level);
        crate::log!(Topic::Config, Debug, "log level set to {}", self.level);
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        // Ok is an outcome marker, not a threshold
        if self.level == Level::Ok {
            return Err(ConfigSchemaError::ValidationError(
                "log.level 'ok' is not a valid threshold".to_string(),
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///
