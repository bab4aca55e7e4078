// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides `ConfigValue`, the node type of a decoded configuration
//! document, and `ConfigTree`, the string-keyed mapping at the root of every
//! document.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A decoded configuration document: string keys mapped to values.
pub type ConfigTree = BTreeMap<String, ConfigValue>;

/// A single node of a decoded configuration document.
///
/// Values serialize untagged, so a tree can be emitted back out as plain YAML
/// or JSON.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from(42_i64);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.as_f64(), None);
/// assert_eq!(value.kind(), "integer");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Null or an empty scalar
    Null,
    /// A boolean
    Bool(bool),
    /// An integer that fits in an `i64`
    Integer(i64),
    /// Any other number
    Float(f64),
    /// A string
    String(String),
    /// An ordered list of values
    Sequence(Vec<ConfigValue>),
    /// A nested mapping
    Mapping(ConfigTree),
}

impl ConfigValue {
    /// Returns the name of this value's kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    /// Returns the string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer` value.
    ///
    /// Floats are not truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float` value.
    ///
    /// Integers are not widened; the stored kind is reported as-is.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the items if this is a `Sequence` value.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested tree if this is a `Mapping` value.
    pub fn as_mapping(&self) -> Option<&ConfigTree> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Float(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(items)
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(map: ConfigTree) -> Self {
        ConfigValue::Mapping(map)
    }
}

impl fmt::Display for ConfigValue {
    /// Scalars print bare, containers print in a compact flow style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => Ok(()),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Float(n) => write!(f, "{}", n),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConfigValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
