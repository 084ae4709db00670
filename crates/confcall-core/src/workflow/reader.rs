use crate::{
    ErrorKind, ThisError,
    ids::OperationName,
    log::Topic,
    model::{CallArguments, CallDescriptor, ConfigSection},
    ops::env::EnvOps,
};

pub const NAME_KEY: &str = "Name";
pub const ARGS_KEY: &str = "Args";

///
/// ReadError
///

#[derive(Debug, ThisError)]
pub enum ReadError {
    #[error("entry '{entry}' has no operation name")]
    MissingOperationName { entry: String },

    #[error("entry '{entry}' argument '{argument}' is a nested section; only string values are supported")]
    NestedArgument { entry: String, argument: String },
}

impl ReadError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOperationName { .. } => ErrorKind::MissingOperationName,
            Self::NestedArgument { .. } => ErrorKind::Configuration,
        }
    }
}

///
/// ConfigurationReader
///
/// Walks an array-like section of call entries and extracts each entry's
/// name and raw arguments, in entry order.
///

pub struct ConfigurationReader;

impl ConfigurationReader {
    /// Read every direct child of `section` as one call.
    ///
    /// Any entry without a usable name fails the whole read; an unnamed call
    /// cannot be dispatched, so it is never skipped.
    pub fn get_method_calls(section: &ConfigSection) -> Result<Vec<CallDescriptor>, ReadError> {
        let calls = section
            .children()
            .map(Self::read_entry)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| crate::log!(Topic::Reader, Warn, "{err}"))?;

        crate::log!(
            Topic::Reader,
            Debug,
            "read {} call(s) from '{}'",
            calls.len(),
            section.path()
        );

        Ok(calls)
    }

    fn read_entry(entry: &ConfigSection) -> Result<CallDescriptor, ReadError> {
        // shorthand: a bare leaf is a call with that name and no arguments
        if !entry.has_children() {
            let name = Self::usable_name(entry, entry.value())?;

            return Ok(CallDescriptor {
                name,
                arguments: CallArguments::new(),
            });
        }

        let name = Self::usable_name(entry, entry.get(NAME_KEY))?;
        let mut arguments = CallArguments::new();

        if let Some(args) = entry.child(ARGS_KEY) {
            for arg in args.children() {
                if arg.has_children() {
                    return Err(ReadError::NestedArgument {
                        entry: entry.path().to_string(),
                        argument: arg.key().to_string(),
                    });
                }

                let raw = arg.value().unwrap_or_default();
                arguments.insert(arg.key(), EnvOps::expand(raw));
            }
        }

        Ok(CallDescriptor { name, arguments })
    }

    fn usable_name(entry: &ConfigSection, name: Option<&str>) -> Result<OperationName, ReadError> {
        name.filter(|n| !n.trim().is_empty())
            .map(|n| OperationName::owned(n.to_string()))
            .ok_or_else(|| ReadError::MissingOperationName {
                entry: entry.path().to_string(),
            })
    }
}

///
/// TESTS
///
