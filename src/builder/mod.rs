//! Builder API for ergonomic configuration construction.
//!
//! Configurations can be loaded from JSON, assembled with the fluent
//! [`ConfigBuilder`], or declared inline with [`fsm_config!`](crate::fsm_config).

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
