//! Core Confcall engine.
//!
//! Most users should depend on the `confcall` facade crate, which re-exports
//! the public surface of this crate.
//!
//! ## Layering
//!
//! Confcall turns an already-materialized configuration tree into typed,
//! invocation-ready calls:
//! - `model/` owns the input tree, signatures, values and registries.
//! - `workflow/` reads call entries and drives resolution end to end.
//! - `policy/` owns the deterministic overload selection rules.
//! - `ops/` provides the mechanical steps: env expansion, type resolution
//!   and argument conversion.
//! - `config/` holds the engine settings (not the input tree).
//!
//! The default flow is: workflow → policy → ops → model.

pub mod config;
pub mod error;
pub mod ids;
pub mod log;
pub mod model;
pub mod ops;
pub mod policy;
pub mod workflow;

#[cfg(test)]
pub mod test;

pub use error::{Error, ErrorKind};
pub(crate) use thiserror::Error as ThisError;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
