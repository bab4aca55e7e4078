// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dotcfg`: print values from a YAML or JSON configuration file.
//!
//! ```bash
//! dotcfg config.yaml database.host database.port
//! dotcfg --type env config.yaml db.password
//! dotcfg config.json            # whole document
//! ```

use clap::{Parser, ValueEnum};
use dotcfg::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// How each value is read before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueType {
    /// The stored value, printed as YAML
    Raw,
    /// String with `$NAME` / `${NAME}` expanded
    String,
    /// 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// Boolean
    Bool,
    /// The stored string names an environment variable; print its value
    Env,
}

#[derive(Debug, Parser)]
#[command(name = "dotcfg", version, about = "Read values from a YAML or JSON configuration file")]
struct Cli {
    /// Configuration file (.json, .yaml or .yml)
    file: PathBuf,

    /// Dotted keys to print; escape literal dots with a backslash
    keys: Vec<String>,

    /// How to read each value
    #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::Raw)]
    value_type: ValueType,

    /// Key segment separator
    #[arg(long, default_value_t = '.')]
    separator: char,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_yaml(value: &impl serde::Serialize) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to render YAML: {}", e),
        source: Some(Box::new(e)),
    })
}

/// Renders the value at `key`, or `None` when the key does not exist.
fn render(config: &Config, key: &str, value_type: ValueType) -> Result<Option<String>> {
    if !config.has(key)? {
        return Ok(None);
    }
    let rendered = match value_type {
        ValueType::Raw => match config.lookup(key)? {
            Some(value) => to_yaml(value)?.trim_end().to_string(),
            None => return Ok(None),
        },
        ValueType::String => config.get_string(key)?,
        ValueType::Int => config.get_i64(key)?.to_string(),
        ValueType::Float => config.get_f64(key)?.to_string(),
        ValueType::Bool => config.get_bool(key)?.to_string(),
        ValueType::Env => config.get_env(key)?,
    };
    Ok(Some(rendered))
}

fn run(cli: &Cli) -> Result<bool> {
    let config = Config::builder()
        .with_separator(cli.separator)
        .load(&cli.file)?;

    if cli.keys.is_empty() {
        print!("{}", to_yaml(config.tree())?);
        return Ok(true);
    }

    let mut all_found = true;
    for key in &cli.keys {
        match render(&config, key, cli.value_type)? {
            Some(rendered) => println!("{}", rendered),
            None => {
                tracing::warn!("key '{}' not found", key);
                all_found = false;
            }
        }
    }
    Ok(all_found)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("dotcfg: {}", e);
            ExitCode::from(2)
        }
    }
}
