// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the concrete document parser, the environment adapter and
//! the file loading helpers used by [`Config`](crate::service::Config).

#[cfg(feature = "env")]
pub mod env_var;
pub mod file;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::{getenv_or, EnvVarAdapter};
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
