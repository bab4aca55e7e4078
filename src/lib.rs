// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, dotted-path access to YAML and JSON configuration documents.
//!
//! A document is decoded once into an immutable tree of [`ConfigValue`]s. Values are
//! then read with dotted keys such as `database.primary.host`; a backslash escapes a
//! literal dot inside a segment (`person.home\.address`).
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`ConfigKey`, `ConfigValue`, the path
//!   tokenizer and resolver, environment expansion, errors)
//! - **Ports**: Trait definitions at the seams (`ConfigParser`, `EnvLookup`)
//! - **Adapters**: The YAML/JSON parser, the environment adapter and file loading
//! - **Service**: [`Config`], which owns a decoded document and implements
//!   [`ConfigurationService`]
//!
//! # Features
//!
//! - **Dotted paths** with escapable separators
//! - **Typed accessors** that never coerce: asking for an integer where a string is
//!   stored is an error, a missing key yields the type's zero value
//! - **Environment expansion** of `$NAME` and `${NAME}` in string values
//! - **Injectable environment**, so expansion can be tested without touching the
//!   process environment
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML/JSON parser (default)
//! - `env`: Enable the process environment adapter (default)
//! - `cli`: Build the `dotcfg` command-line tool (default)
//!
//! # Quick Start
//!
//! ```rust
//! use dotcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = Config::decode(r#"{"person": {"name": "Johnson", "home.address": "11 Shenton Rd"}}"#)?;
//!
//! assert_eq!(config.get_string("person.name")?, "Johnson");
//! assert_eq!(config.get_string(r"person.home\.address")?, "11 Shenton Rd");
//! assert_eq!(config.get_i64("person.age")?, 0);
//! assert!(config.lookup("person.age")?.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! [`ConfigValue`]: domain::ConfigValue
//! [`Config`]: service::Config
//! [`ConfigurationService`]: domain::ConfigurationService

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigTree, ConfigValue, ConfigurationService, Result,
    };
    pub use crate::ports::{ConfigParser, EnvLookup};
    pub use crate::service::{Config, ConfigBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::{getenv_or, EnvVarAdapter};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
