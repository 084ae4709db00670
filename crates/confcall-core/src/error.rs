use crate::{
    ThisError,
    config::ConfigError,
    ids::OperationName,
    ops::{convert::ConvertError, resolve::TypeResolveError},
    policy::selection::SelectionError,
    workflow::reader::ReadError,
};
use derive_more::Display;

///
/// Error
///
/// Public error type for a resolution pass.
///
/// Every variant is fatal for the entry or argument it was raised on; the
/// first error wins and nothing further is attempted.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Conversion failure while binding one argument of a selected overload.
    #[error("operation '{operation}' argument '{argument}': {source}")]
    Argument {
        operation: OperationName,
        argument: String,
        #[source]
        source: ConvertError,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Read(err) => err.kind(),
            Self::Selection(_) => ErrorKind::AmbiguousOrMissingMethod,
            Self::Argument { source, .. } | Self::Convert(source) => source.kind(),
        }
    }
}

impl From<TypeResolveError> for Error {
    fn from(err: TypeResolveError) -> Self {
        ConvertError::from(err).into()
    }
}

///
/// ErrorKind
///
/// Coarse classification of an `Error`, stable across variants so callers
/// can branch without matching on nested module errors.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorKind {
    AmbiguousOrMissingMethod,
    Configuration,
    Conversion,
    MissingOperationName,
    TypeNotFound,
    TypeResolution,
}
