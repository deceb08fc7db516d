use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expression that leaves the setter input untouched.
pub const IDENTITY_TRANSFORM: &str = "x";

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to read transform file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON transform file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid TOML transform file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Per-parameter setter transform.
///
/// `transform` is C++ text over the bound input `x` and is pasted into the
/// generated setter as-is. `default` is added to `x` before the transform runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformEntry {
    #[serde(default = "identity_transform")]
    pub transform: String,
    #[serde(default)]
    pub default: f64,
}

fn identity_transform() -> String {
    IDENTITY_TRANSFORM.to_string()
}

impl Default for TransformEntry {
    fn default() -> Self {
        Self {
            transform: identity_transform(),
            default: 0.0,
        }
    }
}

impl TransformEntry {
    pub fn new(transform: impl Into<String>, default: f64) -> Self {
        Self {
            transform: transform.into(),
            default,
        }
    }
}

/// Parameter name → transform, as supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformSpec {
    entries: BTreeMap<String, TransformEntry>,
}

impl TransformSpec {
    /// Loads a JSON file, or TOML when the extension is `.toml`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TransformError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TransformError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            toml::from_str(&raw).map_err(|source| TransformError::Toml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_json::from_str(&raw).map_err(|source| TransformError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    pub fn get(&self, name: &str) -> Option<&TransformEntry> {
        self.entries.get(name)
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TransformEntry)> for TransformSpec {
    fn from_iter<I: IntoIterator<Item = (S, TransformEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }
}
