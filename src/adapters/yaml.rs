// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML (and JSON) document parser.
//!
//! JSON is a subset of YAML 1.2, so the same parser serves `.json`, `.yaml` and
//! `.yml` files.

use crate::domain::{ConfigError, ConfigTree, ConfigValue, Result};
use crate::ports::ConfigParser;
use serde_yaml::Value;

/// YAML parser implementation.
///
/// This parser converts a YAML or JSON document into a [`ConfigTree`]. Mapping
/// keys are normalized to strings: numeric and boolean keys use their canonical
/// text, keys of any other kind (null, sequences, mappings) are skipped because
/// they cannot be addressed by a dotted path.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::YamlParser;
/// use dotcfg::domain::ConfigValue;
/// use dotcfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let tree = parser.parse(b"database:\n  port: 5432").unwrap();
/// let database = tree.get("database").and_then(ConfigValue::as_mapping).unwrap();
/// assert_eq!(database.get("port"), Some(&ConfigValue::from(5432_i64)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a mapping key to the string used for path lookups.
    fn key_to_string(key: &Value) -> Option<String> {
        match key {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Tagged(tagged) => Self::key_to_string(&tagged.value),
            _ => None,
        }
    }

    fn convert_mapping(map: serde_yaml::Mapping) -> ConfigTree {
        let mut tree = ConfigTree::new();
        for (key, value) in map {
            match Self::key_to_string(&key) {
                Some(key) => {
                    tree.insert(key, Self::convert(value));
                }
                None => {
                    tracing::debug!("Skipping mapping entry with non-scalar key: {:?}", key);
                }
            }
        }
        tree
    }

    /// Converts a parsed YAML value into a `ConfigValue`.
    fn convert(value: Value) -> ConfigValue {
        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                // u64 beyond i64::MAX, or a real float
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(items) => {
                ConfigValue::Sequence(items.into_iter().map(Self::convert).collect())
            }
            Value::Mapping(map) => ConfigValue::Mapping(Self::convert_mapping(map)),
            Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &[u8]) -> Result<ConfigTree> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(ConfigTree::new());
        }

        let mut value: Value =
            serde_yaml::from_slice(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;
        while let Value::Tagged(tagged) = value {
            value = tagged.value;
        }
        value.apply_merge().map_err(|e| ConfigError::ParseError {
            message: format!("Failed to apply YAML merge keys: {}", e),
            source: Some(Box::new(e)),
        })?;

        let tree = match value {
            Value::Mapping(map) => Self::convert_mapping(map),
            Value::Null => ConfigTree::new(),
            other => {
                return Err(ConfigError::ParseError {
                    message: format!(
                        "document root must be a mapping, found {}",
                        Self::convert(other).kind()
                    ),
                    source: None,
                })
            }
        };

        tracing::debug!("Decoded configuration with {} top-level keys", tree.len());
        Ok(tree)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml", "json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(doc: &str) -> ConfigTree {
        YamlParser::new().parse(doc.as_bytes()).unwrap()
    }

    #[test]
    fn test_yaml_parser_simple() {
        let tree = parse("key: value");
        assert_eq!(tree.get("key"), Some(&ConfigValue::from("value")));
    }

    #[test]
    fn test_yaml_parser_scalar_kinds() {
        let tree = parse(
            r#"
string_value: hello
int_value: 42
negative: -7
float_value: 123.456
bool_value: true
null_value: null
empty_value:
"#,
        );

        assert_eq!(tree.get("string_value"), Some(&ConfigValue::from("hello")));
        assert_eq!(tree.get("int_value"), Some(&ConfigValue::Integer(42)));
        assert_eq!(tree.get("negative"), Some(&ConfigValue::Integer(-7)));
        assert_eq!(tree.get("float_value"), Some(&ConfigValue::Float(123.456)));
        assert_eq!(tree.get("bool_value"), Some(&ConfigValue::Bool(true)));
        assert_eq!(tree.get("null_value"), Some(&ConfigValue::Null));
        assert_eq!(tree.get("empty_value"), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_yaml_parser_nested() {
        let tree = parse(
            r#"
database:
  host: localhost
  port: 5432
"#,
        );
        let database = tree.get("database").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(database.get("host"), Some(&ConfigValue::from("localhost")));
        assert_eq!(database.get("port"), Some(&ConfigValue::Integer(5432)));
    }

    #[test]
    fn test_yaml_parser_sequence() {
        let tree = parse("servers:\n  - one\n  - two\n  - three\n");
        assert_eq!(
            tree.get("servers"),
            Some(&ConfigValue::Sequence(vec![
                ConfigValue::from("one"),
                ConfigValue::from("two"),
                ConfigValue::from("three"),
            ]))
        );
    }

    #[test]
    fn test_json_document() {
        let tree = parse(r#"{"person":{"name":"Johnson","age":80,"home.address":"11 Shenton Rd"}}"#);
        let person = tree.get("person").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(person.get("age"), Some(&ConfigValue::Integer(80)));
        assert_eq!(
            person.get("home.address"),
            Some(&ConfigValue::from("11 Shenton Rd"))
        );
    }

    #[test]
    fn test_non_string_keys_are_normalized() {
        let tree = parse(
            r#"
ports:
  80: http
  443: https
flags:
  true: on-value
"#,
        );
        let ports = tree.get("ports").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(ports.get("80"), Some(&ConfigValue::from("http")));
        assert_eq!(ports.get("443"), Some(&ConfigValue::from("https")));

        let flags = tree.get("flags").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(flags.get("true"), Some(&ConfigValue::from("on-value")));
    }

    #[test]
    fn test_complex_keys_are_skipped() {
        let tree = parse(
            r#"
map:
  ? [a, b]
  : unreachable
  plain: kept
"#,
        );
        let map = tree.get("map").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("plain"), Some(&ConfigValue::from("kept")));
    }

    #[test]
    fn test_tagged_values_are_unwrapped() {
        let tree = parse("secret: !vault s3cr3t\n");
        assert_eq!(tree.get("secret"), Some(&ConfigValue::from("s3cr3t")));
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let tree = parse("defaults: &d\n  timeout: 30\n  host: d\nprod:\n  <<: *d\n  host: p\n");
        let prod = tree.get("prod").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(prod.get("timeout"), Some(&ConfigValue::Integer(30)));
        assert_eq!(prod.get("host"), Some(&ConfigValue::from("p")));
        assert!(prod.get("<<").is_none());
    }

    #[test]
    fn test_merge_of_scalar_is_rejected() {
        let result = YamlParser::new().parse(b"a:\n  <<: 1\n");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let tree = parse("big: 18446744073709551615\n");
        assert!(matches!(tree.get("big"), Some(ConfigValue::Float(_))));
    }

    #[test]
    fn test_empty_document_is_empty_tree() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\n").is_empty());
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        let parser = YamlParser::new();
        for doc in ["- a\n- b\n", "just a string", "42"] {
            let err = parser.parse(doc.as_bytes()).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { .. }), "{}", doc);
        }
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let result = YamlParser::new().parse(b"invalid: yaml: content:");
        assert!(matches!(result, Err(ConfigError::ParseError { source: Some(_), .. })));
    }

    #[test]
    fn test_invalid_utf8() {
        let result = YamlParser::new().parse(&[b'a', b':', b' ', 0xff, 0xfe]);
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::default();
        assert_eq!(parser.supported_extensions(), &["yaml", "yml", "json"]);
    }
}
