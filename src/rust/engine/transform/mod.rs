pub mod spec;

use std::collections::HashSet;
use std::fmt;

pub use spec::{IDENTITY_TRANSFORM, TransformEntry, TransformError, TransformSpec};

/// A parameter with its transform and default settled.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameter {
    pub name: String,
    pub transform: String,
    pub default: f64,
}

/// Non-fatal findings while matching a transform file against the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The transform file names a parameter the DSP does not declare.
    UnusedEntry(String),
    /// The DSP declares a parameter the transform file does not mention.
    MissingInfo(String),
}

impl Diagnostic {
    pub fn name(&self) -> &str {
        match self {
            Diagnostic::UnusedEntry(name) | Diagnostic::MissingInfo(name) => name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnusedEntry(name) => write!(f, "unused parameter name: {name}"),
            Diagnostic::MissingInfo(name) => write!(f, "no parameter info: {name}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Same order as the names passed to [`resolve`].
    pub parameters: Vec<ResolvedParameter>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn unused(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::UnusedEntry(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::MissingInfo(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Pairs every parameter name with its transform and default.
///
/// Names without an entry get the identity transform and a zero default.
/// Unused entries are reported sorted by name; missing entries are reported in
/// parameter order, and only when a transform file was supplied at all.
pub fn resolve(names: &[String], spec: Option<&TransformSpec>) -> Resolution {
    let mut diagnostics = Vec::new();

    if let Some(spec) = spec {
        let declared: HashSet<&str> = names.iter().map(String::as_str).collect();
        diagnostics.extend(
            spec.names()
                .filter(|name| !declared.contains(name))
                .map(|name| Diagnostic::UnusedEntry(name.to_string())),
        );
    }

    let mut parameters = Vec::with_capacity(names.len());
    for name in names {
        let entry = spec.and_then(|spec| spec.get(name));
        if spec.is_some() && entry.is_none() {
            diagnostics.push(Diagnostic::MissingInfo(name.clone()));
        }

        let entry = entry.cloned().unwrap_or_default();
        parameters.push(ResolvedParameter {
            name: name.clone(),
            transform: entry.transform,
            default: entry.default,
        });
    }

    Resolution {
        parameters,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "test_resolve.rs"]
mod tests;
