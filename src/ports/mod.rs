// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the configuration core and its collaborators: the document parser and
//! the environment. These traits are implemented by adapters in the adapters layer.

pub mod env;
pub mod parser;

// Re-export commonly used types
pub use env::EnvLookup;
pub use parser::ConfigParser;
