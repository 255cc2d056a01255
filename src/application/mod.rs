//! Application layer: configuration and the load-on-mount use case.

pub mod config;
pub mod data_loader;

pub use config::*;
pub use data_loader::*;
