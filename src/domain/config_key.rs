// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype and the dotted-path tokenizer.
//!
//! A key such as `person.home\.address` names a nested location in a configuration
//! tree. Segments are separated by `.`; a backslash makes the next character
//! literal, so a single segment may itself contain dots (or backslashes).

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The default segment separator.
pub const DEFAULT_SEPARATOR: char = '.';

/// The default escape character.
pub const DEFAULT_ESCAPE: char = '\\';

/// Splits `path` into segments on `separator`, honouring `escape`.
///
/// An escape character makes the following character literal and is itself
/// dropped. A trailing separator yields a trailing empty segment and an empty
/// path yields a single empty segment, so the result is never empty.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEscape`] when the path ends in an unpaired escape.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_key::tokenize;
///
/// assert_eq!(tokenize("a.b.c", '.', '\\').unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("a\\.b.c", '.', '\\').unwrap(), vec!["a.b", "c"]);
/// assert!(tokenize("a\\", '.', '\\').is_err());
/// ```
pub fn tokenize(path: &str, separator: char, escape: char) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_escape = false;

    for c in path.chars() {
        if in_escape {
            in_escape = false;
            current.push(c);
        } else if c == escape {
            in_escape = true;
        } else if c == separator {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if in_escape {
        return Err(ConfigError::InvalidEscape {
            key: path.to_string(),
        });
    }

    segments.push(current);
    Ok(segments)
}

/// A type-safe wrapper for dotted configuration keys.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("person.home\\.address");
/// assert_eq!(key.segments().unwrap(), vec!["person", "home.address"]);
///
/// let built = ConfigKey::from_segments(["person", "home.address"]);
/// assert_eq!(built, key);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds a key from raw segments, escaping the separator and escape
    /// characters inside each one.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                key.push(DEFAULT_SEPARATOR);
            }
            for c in segment.as_ref().chars() {
                if c == DEFAULT_SEPARATOR || c == DEFAULT_ESCAPE {
                    key.push(DEFAULT_ESCAPE);
                }
                key.push(c);
            }
        }
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits the key with the default separator and escape characters.
    pub fn segments(&self) -> Result<Vec<String>> {
        tokenize(&self.0, DEFAULT_SEPARATOR, DEFAULT_ESCAPE)
    }

    /// Splits the key with a custom separator and escape character.
    pub fn segments_with(&self, separator: char, escape: char) -> Result<Vec<String>> {
        tokenize(&self.0, separator, escape)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
