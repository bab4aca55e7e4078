// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.

/// Read access to a set of environment variables.
///
/// The accessors that expand `${NAME}` references take their variables from an
/// `EnvLookup` rather than from the process directly, so a fixed environment can
/// be swapped in.
///
/// # Examples
///
/// ```rust
/// use dotcfg::ports::EnvLookup;
///
/// struct Fixed;
///
/// impl EnvLookup for Fixed {
///     fn var(&self, name: &str) -> Option<String> {
///         (name == "HOME").then(|| "/home/demo".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.var("HOME").as_deref(), Some("/home/demo"));
/// assert_eq!(Fixed.var_or("SHELL", "/bin/sh"), "/bin/sh");
/// ```
pub trait EnvLookup: Send + Sync {
    /// Returns the value of `name`, or `None` when it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the value of `name`, or `default` when it is not set.
    fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }
}
