// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nested-map traversal.

use crate::domain::config_value::{ConfigTree, ConfigValue};

/// Walks `tree` along `segments` and returns the value at the end of the path.
///
/// Only mappings are descended into. A path that names a key below a scalar or
/// a sequence (for example `port.number` when `port: 8080`) is not found, rather
/// than resolving to the scalar. An empty `segments` slice is not found either.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_value::{ConfigTree, ConfigValue};
/// use dotcfg::domain::resolver::lookup;
///
/// let mut inner = ConfigTree::new();
/// inner.insert("one".to_string(), ConfigValue::from("alpha"));
/// let mut tree = ConfigTree::new();
/// tree.insert("attr".to_string(), ConfigValue::from(inner));
///
/// let path = ["attr".to_string(), "one".to_string()];
/// assert_eq!(lookup(&tree, &path), Some(&ConfigValue::from("alpha")));
/// ```
pub fn lookup<'a>(tree: &'a ConfigTree, segments: &[String]) -> Option<&'a ConfigValue> {
    let (last, parents) = segments.split_last()?;

    let mut current = tree;
    for segment in parents {
        match current.get(segment)? {
            ConfigValue::Mapping(map) => current = map,
            _ => return None,
        }
    }

    current.get(last)
}
