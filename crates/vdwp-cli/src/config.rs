//! Layered run configuration: built-in defaults, then an optional TOML file, then
//! `-S key=value` overrides, then explicit command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
