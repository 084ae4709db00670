pub mod selection;

pub use selection::{MethodSelector, SelectionError};
