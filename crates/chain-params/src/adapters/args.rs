//! # Argument Table
//!
//! `ChainArgs` holds operator arguments as strings, keyed without the
//! leading dash. It is filled from command-line tokens, from a TOML config
//! file, or both; command-line values win over file values.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::domain::{ChainParamsError, ChainParamsResult};
use crate::ports::ArgSource;

/// Multi-valued string argument table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainArgs {
    values: BTreeMap<String, Vec<String>>,
}

impl ChainArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Append a value under `key`.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Builder form of `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse `-key`, `--key`, `-key=value` and `-nokey` tokens.
    ///
    /// A bare `-key` stores an empty value, which boolean readers treat as
    /// true. `-nokey` stores `0`; `-nokey=value` stores the negated boolean.
    /// Repeated keys accumulate.
    pub fn from_cli<I, S>(tokens: I) -> ChainParamsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = Self::new();
        for token in tokens {
            let token = token.as_ref();
            let Some(body) = token
                .strip_prefix("--")
                .or_else(|| token.strip_prefix('-'))
            else {
                return Err(ChainParamsError::InvalidArgument {
                    key: token.to_string(),
                    value: String::new(),
                    reason: "arguments must start with '-'".to_string(),
                });
            };

            let (key, value) = match body.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (body, None),
            };
            if key.is_empty() {
                return Err(ChainParamsError::InvalidArgument {
                    key: token.to_string(),
                    value: value.unwrap_or_default().to_string(),
                    reason: "empty argument name".to_string(),
                });
            }

            match (key.strip_prefix("no"), value) {
                (Some(negated), None) if !negated.is_empty() => args.push(negated, "0"),
                (Some(negated), Some(value)) if !negated.is_empty() => {
                    let parsed = ChainArgs::new().with(negated, value);
                    let enabled = parsed.get_bool(negated, true)?;
                    args.push(negated, if enabled { "0" } else { "1" });
                }
                _ => args.push(key, value.unwrap_or_default()),
            }
        }
        Ok(args)
    }

    /// Parse a flat TOML table.
    ///
    /// Strings, integers and floats keep their text, booleans become `1` or
    /// `0`, and arrays store one value per element. Nested tables are
    /// rejected.
    pub fn from_toml_str(source: &str) -> ChainParamsResult<Self> {
        let table: toml::Table = source.parse().map_err(|err: toml::de::Error| {
            ChainParamsError::ConfigFile {
                path: "<inline>".to_string(),
                reason: err.to_string(),
            }
        })?;

        let mut args = Self::new();
        for (key, value) in &table {
            match value {
                toml::Value::Array(items) => {
                    for item in items {
                        args.push(key.clone(), scalar_text(key, item)?);
                    }
                }
                other => args.push(key.clone(), scalar_text(key, other)?),
            }
        }
        Ok(args)
    }

    /// Read and parse a TOML config file.
    pub fn load_toml(path: impl AsRef<Path>) -> ChainParamsResult<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| ChainParamsError::ConfigFile {
            path: path.display().to_string(),
            reason,
        };
        let source = std::fs::read_to_string(path).map_err(|err| config_error(err.to_string()))?;
        let args = Self::from_toml_str(&source).map_err(|err| match err {
            ChainParamsError::ConfigFile { reason, .. } => config_error(reason),
            other => other,
        })?;
        debug!(path = %path.display(), keys = args.values.len(), "Loaded config file");
        Ok(args)
    }

    /// Fill keys absent here from `defaults`. Keys already present keep
    /// their values.
    pub fn merge_defaults(&mut self, defaults: ChainArgs) {
        for (key, values) in defaults.values {
            self.values.entry(key).or_insert(values);
        }
    }
}

fn scalar_text(key: &str, value: &toml::Value) -> ChainParamsResult<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(n) => Ok(n.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => Err(ChainParamsError::InvalidArgument {
            key: key.to_string(),
            value: value.to_string(),
            reason: "nested values are not supported".to_string(),
        }),
    }
}

impl ArgSource for ChainArgs {
    fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    fn get_all(&self, key: &str) -> Vec<&str> {
        self.values
            .get(key)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
