// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service implementation.
//!
//! This module contains [`Config`], the concrete implementation of the
//! `ConfigurationService` trait, and its builder.

pub mod config;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder};
