// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable adapter.
//!
//! This module provides the default [`EnvLookup`] implementation, backed either by
//! the process environment or by a fixed set of values.

use crate::ports::EnvLookup;
use std::collections::HashMap;
use std::env;

/// Returns the environment variable `name`, or `default` when it is unset.
///
/// A value that is set but not valid Unicode is returned lossily converted.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::env_var::getenv_or;
///
/// let shell = getenv_or("DOTCFG_DOC_SURELY_UNSET", "/bin/sh");
/// assert_eq!(shell, "/bin/sh");
/// ```
pub fn getenv_or(name: &str, default: &str) -> String {
    env::var_os(name)
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_else(|| default.to_string())
}

/// Environment adapter for `${NAME}` expansion and `get_env` lookups.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::EnvVarAdapter;
/// use dotcfg::ports::EnvLookup;
/// use std::collections::HashMap;
///
/// // Read from the process environment
/// let adapter = EnvVarAdapter::new();
///
/// // Or from fixed values
/// let mut values = HashMap::new();
/// values.insert("PASSWORD".to_string(), "123456".to_string());
/// let adapter = EnvVarAdapter::with_values(values);
/// assert_eq!(adapter.var("PASSWORD").as_deref(), Some("123456"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Fixed values; `None` reads the process environment on every lookup
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter that reads the process environment.
    ///
    /// Variables are read at lookup time, so changes made after the adapter is
    /// created are visible.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an adapter that serves only the given values.
    ///
    /// This is useful for tests and for sandboxing expansion, since the process
    /// environment is never consulted.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Returns `true` when this adapter reads the process environment.
    pub fn is_process(&self) -> bool {
        self.values.is_none()
    }
}

impl EnvLookup for EnvVarAdapter {
    fn var(&self, name: &str) -> Option<String> {
        match &self.values {
            Some(values) => values.get(name).cloned(),
            None => match env::var(name) {
                Ok(value) => Some(value),
                Err(env::VarError::NotPresent) => None,
                Err(env::VarError::NotUnicode(_)) => {
                    tracing::debug!("Ignoring non-unicode environment variable '{}'", name);
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_process_adapter_reads_env() {
        let mut guard = EnvGuard::new();
        guard.set("DOTCFG_ENV_ADAPTER_READ", "value");

        let adapter = EnvVarAdapter::new();
        assert!(adapter.is_process());
        assert_eq!(
            adapter.var("DOTCFG_ENV_ADAPTER_READ").as_deref(),
            Some("value")
        );
    }

    #[test]
    fn test_process_adapter_sees_later_changes() {
        let mut guard = EnvGuard::new();
        let adapter = EnvVarAdapter::default();
        assert!(adapter.var("DOTCFG_ENV_ADAPTER_LATE").is_none());

        guard.set("DOTCFG_ENV_ADAPTER_LATE", "now");
        assert_eq!(adapter.var("DOTCFG_ENV_ADAPTER_LATE").as_deref(), Some("now"));
    }

    #[test]
    fn test_process_adapter_missing() {
        let adapter = EnvVarAdapter::new();
        assert!(adapter.var("DOTCFG_NONEXISTENT_VAR_12345").is_none());
    }

    #[test]
    fn test_with_values_ignores_process() {
        let mut guard = EnvGuard::new();
        guard.set("DOTCFG_ENV_ADAPTER_HIDDEN", "process");

        let mut values = HashMap::new();
        values.insert("ONLY".to_string(), "fixed".to_string());
        let adapter = EnvVarAdapter::with_values(values);

        assert!(!adapter.is_process());
        assert_eq!(adapter.var("ONLY").as_deref(), Some("fixed"));
        assert!(adapter.var("DOTCFG_ENV_ADAPTER_HIDDEN").is_none());
    }

    #[test]
    fn test_getenv_or() {
        let mut guard = EnvGuard::new();
        guard.set("DOTCFG_GETENV_OR_SET", "present");

        assert_eq!(getenv_or("DOTCFG_GETENV_OR_SET", "default"), "present");
        assert_eq!(getenv_or("DOTCFG_GETENV_OR_UNSET", "default"), "default");
    }

    #[test]
    fn test_getenv_or_empty_value_is_set() {
        let mut guard = EnvGuard::new();
        guard.set("DOTCFG_GETENV_OR_EMPTY", "");

        assert_eq!(getenv_or("DOTCFG_GETENV_OR_EMPTY", "default"), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_getenv_or_non_unicode_is_set() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "DOTCFG_GETENV_OR_NON_UNICODE";
        env::set_var(key, OsStr::from_bytes(b"ab\xffcd"));
        let value = getenv_or(key, "default");
        env::remove_var(key);

        assert_eq!(value, "ab\u{fffd}cd");
    }
}
