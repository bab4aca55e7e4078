// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types and logic for the configuration crate:
//! the value tree, dotted keys and their tokenizer, tree traversal and environment
//! expansion. It performs no I/O of its own.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod expand;
pub mod resolver;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigTree, ConfigValue};
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
