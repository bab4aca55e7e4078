// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file loading.
//!
//! Files are dispatched on their extension before anything is read: only
//! extensions the parser declares are accepted.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Name used in error messages: the file name when there is one, else the path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Checks that the file name of `path` ends in `.` followed by one of the
/// `supported` extensions (case-insensitive). A bare `.yaml` qualifies.
///
/// # Errors
///
/// [`ConfigError::UnsupportedFileType`] carrying the rejected extension with its
/// leading dot, or an empty string when the path has no extension.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::file::check_extension;
/// use std::path::Path;
///
/// let supported = ["yaml", "yml", "json"];
/// assert!(check_extension(Path::new("app.YML"), &supported).is_ok());
/// assert!(check_extension(Path::new("app.toml"), &supported).is_err());
/// ```
pub fn check_extension(path: &Path, supported: &[&str]) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let matched = supported.iter().any(|ext| {
        name.strip_suffix(ext.to_ascii_lowercase().as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    });
    if matched {
        return Ok(());
    }

    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    Err(ConfigError::UnsupportedFileType { extension })
}

/// Reads a configuration file after checking its extension and size.
///
/// # Errors
///
/// * [`ConfigError::UnsupportedFileType`] - the extension is not in `supported`
/// * [`ConfigError::LoadError`] - the file is missing, unreadable or larger than
///   [`MAX_CONFIG_FILE_SIZE`]
pub fn read_config_file(path: &Path, supported: &[&str]) -> Result<Vec<u8>> {
    check_extension(path, supported)?;

    let metadata = fs::metadata(path).map_err(|e| ConfigError::LoadError {
        path: display_name(path),
        message: "Failed to read file metadata".to_string(),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::LoadError {
            path: display_name(path),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read(path).map_err(|e| ConfigError::LoadError {
        path: display_name(path),
        message: "Failed to read configuration file".to_string(),
        source: Some(Box::new(e)),
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Returns the path of `filename` inside the OS-appropriate configuration
/// directory for an application.
///
/// # Arguments
///
/// * `app_name` - The application name (e.g., "myapp")
/// * `qualifier` - The organization/qualifier (e.g., "com.example")
/// * `filename` - The configuration file name (e.g., "config.yaml")
///
/// # Examples
///
/// ```rust,no_run
/// use dotcfg::adapters::file::default_config_path;
///
/// let path = default_config_path("myapp", "com.example", "config.yaml").unwrap();
/// println!("{}", path.display());
/// ```
pub fn default_config_path(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::LoadError {
            path: filename.to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    Ok(proj_dirs.config_dir().join(filename))
}
