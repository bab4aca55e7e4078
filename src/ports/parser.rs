// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the raw bytes of a
//! configuration document into a [`ConfigTree`].

use crate::domain::{ConfigTree, Result};

/// A trait for decoding configuration documents.
///
/// Implementations must produce a string-keyed tree: whatever key types the
/// underlying format allows are normalized before the tree is returned, so that
/// path lookups only ever deal with string keys.
///
/// # Examples
///
/// ```rust
/// use dotcfg::domain::{ConfigTree, ConfigValue, Result};
/// use dotcfg::ports::ConfigParser;
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &[u8]) -> Result<ConfigTree> {
///         let mut tree = ConfigTree::new();
///         for line in String::from_utf8_lossy(content).lines() {
///             if let Some((k, v)) = line.split_once('=') {
///                 tree.insert(k.to_string(), ConfigValue::from(v));
///             }
///         }
///         Ok(tree)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let tree = KeyValueParser.parse(b"name=demo").unwrap();
/// assert_eq!(tree.get("name"), Some(&ConfigValue::from("demo")));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Decodes a whole document into a tree.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigTree)` - The decoded document
    /// * `Err(ConfigError::ParseError)` - The document is not well-formed; no
    ///   partial tree is produced
    fn parse(&self, content: &[u8]) -> Result<ConfigTree>;

    /// Returns the file extensions (lowercase, without the leading dot) this
    /// parser accepts.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, ConfigValue};

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, content: &[u8]) -> Result<ConfigTree> {
            if content.is_empty() {
                return Err(ConfigError::ParseError {
                    message: "empty".to_string(),
                    source: None,
                });
            }
            let mut tree = ConfigTree::new();
            tree.insert("test".to_string(), ConfigValue::from(content.len() as i64));
            Ok(tree)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let tree = TestParser.parse(b"abc").unwrap();
        assert_eq!(tree.get("test"), Some(&ConfigValue::from(3_i64)));
    }

    #[test]
    fn test_parser_failure() {
        assert!(matches!(
            TestParser.parse(b""),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parser_as_trait_object() {
        let parser: Box<dyn ConfigParser> = Box::new(TestParser);
        assert_eq!(parser.supported_extensions(), &["test", "tst"]);
    }
}
