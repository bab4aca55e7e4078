// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the main interface for
//! reading values out of a decoded configuration document. Implementors supply
//! path lookup and an environment; the typed accessors are layered on top.

use crate::domain::expand::{env_name, expand};
use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::EnvLookup;

/// Checks a looked-up value against the kind an accessor expects.
fn typed<'a, T>(
    key: &str,
    value: Option<&'a ConfigValue>,
    expected: &'static str,
    extract: fn(&'a ConfigValue) -> Option<T>,
) -> Result<Option<T>> {
    match value {
        None => Ok(None),
        Some(value) => extract(value)
            .map(Some)
            .ok_or_else(|| ConfigError::type_mismatch(key, expected, value.kind())),
    }
}

/// The main configuration service trait.
///
/// Keys are dotted paths (`database.primary.host`); see
/// [`tokenize`](crate::domain::config_key::tokenize) for the escaping rules.
///
/// Absent keys are not errors. [`lookup`](Self::lookup) reports them as `None`
/// and the `get_*` accessors return the type's zero value, so use `lookup`,
/// [`has`](Self::has) or one of the `get_*_or` variants when "absent" and "zero"
/// must be told apart. A present value of the wrong kind is always a
/// [`ConfigError::TypeMismatch`]; nothing is coerced.
///
/// # Examples
///
/// ```rust
/// use dotcfg::domain::{ConfigTree, ConfigValue, ConfigurationService, Result};
/// use dotcfg::domain::resolver;
/// use dotcfg::ports::EnvLookup;
///
/// struct NoEnv;
///
/// impl EnvLookup for NoEnv {
///     fn var(&self, _name: &str) -> Option<String> {
///         None
///     }
/// }
///
/// struct Flat(ConfigTree);
///
/// impl ConfigurationService for Flat {
///     fn lookup(&self, key: &str) -> Result<Option<&ConfigValue>> {
///         Ok(resolver::lookup(&self.0, &[key.to_string()]))
///     }
///
///     fn env(&self) -> &dyn EnvLookup {
///         &NoEnv
///     }
/// }
///
/// let mut tree = ConfigTree::new();
/// tree.insert("port".to_string(), ConfigValue::from(8080_i64));
/// let service = Flat(tree);
///
/// assert_eq!(service.get_i64("port").unwrap(), 8080);
/// assert_eq!(service.get_i64("missing").unwrap(), 0);
/// assert!(service.get_string("port").is_err());
/// ```
pub trait ConfigurationService {
    /// Returns the value stored at `key`, or `None` when the path does not exist.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEscape`] when `key` ends in a dangling escape.
    fn lookup(&self, key: &str) -> Result<Option<&ConfigValue>>;

    /// The environment used for `${NAME}` expansion and [`get_env`](Self::get_env).
    fn env(&self) -> &dyn EnvLookup;

    /// Returns `true` when a value exists at `key`.
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.lookup(key)?.is_some())
    }

    /// Returns the string at `key` with `$NAME` and `${NAME}` references
    /// replaced from the environment, or `""` when absent.
    fn get_string(&self, key: &str) -> Result<String> {
        Ok(self.get_string_opt(key)?.unwrap_or_default())
    }

    /// Like [`get_string`](Self::get_string) but returns `default` when absent.
    fn get_string_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .get_string_opt(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Returns the expanded string at `key`, or `None` when absent.
    fn get_string_opt(&self, key: &str) -> Result<Option<String>> {
        let raw = typed(key, self.lookup(key)?, "string", |v| {
            v.as_str().map(str::to_string)
        })?;
        let env = self.env();
        Ok(raw.map(|s| expand(&s, |name| env.var(name))))
    }

    /// Returns the integer at `key`, or `0` when absent.
    fn get_i64(&self, key: &str) -> Result<i64> {
        Ok(typed(key, self.lookup(key)?, "integer", ConfigValue::as_i64)?.unwrap_or_default())
    }

    /// Returns the integer at `key`, or `default` when absent.
    fn get_i64_or(&self, key: &str, default: i64) -> Result<i64> {
        Ok(typed(key, self.lookup(key)?, "integer", ConfigValue::as_i64)?.unwrap_or(default))
    }

    /// Returns the float at `key`, or `0.0` when absent.
    ///
    /// Integers are a type mismatch here; write `1.0`, not `1`, for float
    /// settings.
    fn get_f64(&self, key: &str) -> Result<f64> {
        Ok(typed(key, self.lookup(key)?, "float", ConfigValue::as_f64)?.unwrap_or_default())
    }

    /// Returns the float at `key`, or `default` when absent.
    fn get_f64_or(&self, key: &str, default: f64) -> Result<f64> {
        Ok(typed(key, self.lookup(key)?, "float", ConfigValue::as_f64)?.unwrap_or(default))
    }

    /// Returns the boolean at `key`, or `false` when absent.
    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(typed(key, self.lookup(key)?, "boolean", ConfigValue::as_bool)?.unwrap_or_default())
    }

    /// Returns the boolean at `key`, or `default` when absent.
    fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        Ok(typed(key, self.lookup(key)?, "boolean", ConfigValue::as_bool)?.unwrap_or(default))
    }

    /// Returns the items of the sequence at `key`, or an empty slice when absent.
    fn get_sequence(&self, key: &str) -> Result<&[ConfigValue]> {
        Ok(typed(key, self.lookup(key)?, "sequence", ConfigValue::as_sequence)?.unwrap_or(&[]))
    }

    /// Treats the string at `key` as the *name* of an environment variable and
    /// returns that variable's value.
    ///
    /// The stored string may be written as `NAME`, `$NAME` or `${NAME}`. Returns
    /// `""` when the key is absent or the variable is unset.
    fn get_env(&self, key: &str) -> Result<String> {
        let reference = typed(key, self.lookup(key)?, "string", |v| {
            v.as_str().map(str::to_string)
        })?;
        Ok(reference
            .and_then(|r| self.env().var(env_name(&r)))
            .unwrap_or_default())
    }
}
