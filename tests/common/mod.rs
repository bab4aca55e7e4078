// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.

use dotcfg::adapters::EnvVarAdapter;
use dotcfg::ports::EnvLookup;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tempfile::{Builder, NamedTempFile};

/// Builds an environment that serves only the given variables.
#[allow(dead_code)]
pub fn fixed_env(pairs: &[(&str, &str)]) -> Arc<dyn EnvLookup> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Arc::new(EnvVarAdapter::with_values(values))
}

/// Writes `content` to a temporary file whose name ends in `suffix`.
#[allow(dead_code)]
pub fn temp_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("dotcfg-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
