// Shared fixtures for unit tests across layers.

pub mod fixtures;
