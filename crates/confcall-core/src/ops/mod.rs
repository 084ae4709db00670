//! Mechanical, reusable steps of a resolution pass.
//!
//! Nothing here decides *which* overload runs; that belongs to `policy`.

pub mod convert;
pub mod env;
pub mod resolve;

pub use convert::{ArgumentConverter, ConvertError};
pub use env::EnvOps;
pub use resolve::{TypeResolveError, TypeResolver};
