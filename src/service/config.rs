// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration document service.
//!
//! [`Config`] owns one decoded document and answers dotted-path queries against
//! it through the [`ConfigurationService`] accessors. It is immutable once built,
//! so a single instance can be shared across threads behind an `Arc`.

use crate::adapters::file;
use crate::domain::config_key::{tokenize, DEFAULT_ESCAPE, DEFAULT_SEPARATOR};
use crate::domain::{resolver, ConfigError, ConfigTree, ConfigValue, ConfigurationService, Result};
use crate::ports::{ConfigParser, EnvLookup};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Environment used when the `env` feature is disabled and none is supplied.
#[cfg(not(feature = "env"))]
struct EmptyEnv;

#[cfg(not(feature = "env"))]
impl EnvLookup for EmptyEnv {
    fn var(&self, _name: &str) -> Option<String> {
        None
    }
}

#[cfg(feature = "env")]
fn default_env() -> Arc<dyn EnvLookup> {
    Arc::new(crate::adapters::EnvVarAdapter::new())
}

#[cfg(not(feature = "env"))]
fn default_env() -> Arc<dyn EnvLookup> {
    Arc::new(EmptyEnv)
}

#[cfg(feature = "yaml")]
fn default_parser() -> Result<Box<dyn ConfigParser>> {
    Ok(Box::new(crate::adapters::YamlParser::new()))
}

#[cfg(not(feature = "yaml"))]
fn default_parser() -> Result<Box<dyn ConfigParser>> {
    Err(ConfigError::InvalidOption {
        message: "no parser configured and the `yaml` feature is disabled".to_string(),
    })
}

/// A decoded configuration document.
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Config::decode("server:\n  port: 8080\n  name: api")?;
///
/// assert_eq!(config.get_i64("server.port")?, 8080);
/// assert_eq!(config.get_string("server.name")?, "api");
/// assert_eq!(config.lookup("server.missing")?, None);
/// # Ok(())
/// # }
/// ```
pub struct Config {
    tree: ConfigTree,
    env: Arc<dyn EnvLookup>,
    separator: char,
    escape: char,
}

impl Config {
    /// Creates a new builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Decodes a YAML or JSON document with the default parser, the process
    /// environment and `.`/`\` as separator and escape.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ParseError`] when the document is malformed.
    pub fn decode(content: impl AsRef<[u8]>) -> Result<Self> {
        Self::builder().decode(content)
    }

    /// Reads and decodes a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::UnsupportedFileType`] - any other extension
    /// * [`ConfigError::LoadError`] - the file cannot be read
    /// * [`ConfigError::ParseError`] - the content is malformed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().load(path)
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let path = file::default_config_path(app_name, qualifier, "config.yaml")?;
        Self::load(path)
    }

    /// Wraps an already decoded tree.
    pub fn from_tree(tree: ConfigTree) -> Self {
        Self {
            tree,
            env: default_env(),
            separator: DEFAULT_SEPARATOR,
            escape: DEFAULT_ESCAPE,
        }
    }

    /// Returns the decoded document.
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// Returns the key separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns the key escape character.
    pub fn escape(&self) -> char {
        self.escape
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("tree", &self.tree)
            .field("separator", &self.separator)
            .field("escape", &self.escape)
            .finish_non_exhaustive()
    }
}

impl ConfigurationService for Config {
    fn lookup(&self, key: &str) -> Result<Option<&ConfigValue>> {
        let segments = tokenize(key, self.separator, self.escape)?;
        let value = resolver::lookup(&self.tree, &segments);
        if value.is_none() {
            tracing::trace!("Configuration key '{}' not found", key);
        }
        Ok(value)
    }

    fn env(&self) -> &dyn EnvLookup {
        self.env.as_ref()
    }
}

/// Builder for constructing a [`Config`].
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let mut vars = HashMap::new();
/// vars.insert("DB_PASSWORD".to_string(), "s3cret".to_string());
///
/// let config = Config::builder()
///     .with_env(Arc::new(EnvVarAdapter::with_values(vars)))
///     .with_separator('/')
///     .decode("db:\n  password: ${DB_PASSWORD}\n  pool.size: 4")?;
///
/// assert_eq!(config.get_string("db/password")?, "s3cret");
/// assert_eq!(config.get_i64("db/pool.size")?, 4);
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder {
    parser: Option<Box<dyn ConfigParser>>,
    env: Option<Arc<dyn EnvLookup>>,
    separator: char,
    escape: char,
}

impl ConfigBuilder {
    /// Creates a new builder with the default separator and escape characters.
    pub fn new() -> Self {
        Self {
            parser: None,
            env: None,
            separator: DEFAULT_SEPARATOR,
            escape: DEFAULT_ESCAPE,
        }
    }

    /// Uses a custom document parser instead of the YAML parser.
    pub fn with_parser(mut self, parser: Box<dyn ConfigParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Uses a custom environment for `${NAME}` expansion and `get_env`.
    pub fn with_env(mut self, env: Arc<dyn EnvLookup>) -> Self {
        self.env = Some(env);
        self
    }

    /// Sets the key segment separator (default `.`).
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the key escape character (default `\`).
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.separator == self.escape {
            return Err(ConfigError::InvalidOption {
                message: format!(
                    "separator and escape must differ, both are '{}'",
                    self.separator
                ),
            });
        }
        Ok(())
    }

    fn build(self, parser: &dyn ConfigParser, content: &[u8]) -> Result<Config> {
        let tree = parser.parse(content)?;
        Ok(Config {
            tree,
            env: self.env.unwrap_or_else(default_env),
            separator: self.separator,
            escape: self.escape,
        })
    }

    /// Decodes `content` into a [`Config`].
    pub fn decode(mut self, content: impl AsRef<[u8]>) -> Result<Config> {
        self.validate()?;
        let parser = match self.parser.take() {
            Some(parser) => parser,
            None => default_parser()?,
        };
        self.build(parser.as_ref(), content.as_ref())
    }

    /// Reads `path` and decodes it into a [`Config`].
    ///
    /// The extension must be one the parser supports, compared case-insensitively.
    pub fn load(mut self, path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        self.validate()?;
        let parser = match self.parser.take() {
            Some(parser) => parser,
            None => default_parser()?,
        };

        let content = file::read_config_file(path, parser.supported_extensions())?;
        let config = self.build(parser.as_ref(), &content)?;
        tracing::debug!(
            "Loaded configuration from {} ({} top-level keys)",
            path.display(),
            config.tree.len()
        );
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EnvVarAdapter;
    use std::collections::HashMap;

    const DOC: &str = r#"
version: 1.0.0
string: test string
int: 100
float: 123.456
bool: true
list:
  - one
  - two
object:
  attr_one: 1
  attr_three:
    one: alpha
"#;

    fn fixed_env(pairs: &[(&str, &str)]) -> Arc<dyn EnvLookup> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Arc::new(EnvVarAdapter::with_values(values))
    }

    #[test]
    fn test_decode_and_lookup() {
        let config = Config::decode(DOC).unwrap();
        assert_eq!(
            config.lookup("object.attr_one").unwrap(),
            Some(&ConfigValue::Integer(1))
        );
        assert_eq!(
            config.lookup("object.attr_three.one").unwrap(),
            Some(&ConfigValue::from("alpha"))
        );
        assert_eq!(config.lookup("object.attr_four").unwrap(), None);
        assert_eq!(config.lookup("int.deeper").unwrap(), None);
    }

    #[test]
    fn test_typed_accessors() {
        let config = Config::decode(DOC).unwrap();
        assert_eq!(config.get_string("version").unwrap(), "1.0.0");
        assert_eq!(config.get_i64("int").unwrap(), 100);
        assert_eq!(config.get_f64("float").unwrap(), 123.456);
        assert!(config.get_bool("bool").unwrap());
        assert_eq!(config.get_sequence("list").unwrap().len(), 2);
    }

    #[test]
    fn test_decode_invalid_document() {
        let err = Config::decode("a: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_escape_in_key() {
        let config = Config::decode(DOC).unwrap();
        assert!(matches!(
            config.lookup("object\\"),
            Err(ConfigError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_builder_env_injection() {
        let config = Config::builder()
            .with_env(fixed_env(&[("PASSWORD", "123456")]))
            .decode("password: ${PASSWORD}\nref: $PASSWORD\n")
            .unwrap();
        assert_eq!(config.get_string("password").unwrap(), "123456");
        assert_eq!(config.get_env("password").unwrap(), "123456");
        assert_eq!(config.get_env("ref").unwrap(), "123456");
    }

    #[test]
    fn test_builder_custom_separator_and_escape() {
        let config = Config::builder()
            .with_separator(':')
            .with_escape('~')
            .decode("a:\n  \"b:c\": 1\n  d.e: 2\n")
            .unwrap();
        assert_eq!(config.separator(), ':');
        assert_eq!(config.escape(), '~');
        assert_eq!(config.get_i64("a:b~:c").unwrap(), 1);
        assert_eq!(config.get_i64("a:d.e").unwrap(), 2);
    }

    #[test]
    fn test_builder_rejects_equal_separator_and_escape() {
        let err = Config::builder()
            .with_separator('.')
            .with_escape('.')
            .decode("a: 1")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }

    #[test]
    fn test_from_tree() {
        let mut tree = ConfigTree::new();
        tree.insert("k".to_string(), ConfigValue::from("v"));
        let config = Config::from_tree(tree);
        assert_eq!(config.get_string("k").unwrap(), "v");
        assert_eq!(config.tree().len(), 1);
    }

    #[test]
    fn test_config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }

    #[test]
    fn test_debug_output() {
        let config = Config::decode("a: 1").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("separator"));
        assert!(debug.contains("Integer(1)"));
    }
}
