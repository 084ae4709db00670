//! Workflow layer: reads call entries from a configuration tree and drives
//! them through selection and conversion.

pub mod dispatch;
pub mod reader;

pub use dispatch::Dispatcher;
pub use reader::{ConfigurationReader, ReadError};
