use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read interface description {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid interface description {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("interface description {} declares no UI group", path.display())]
    NoUiGroup { path: PathBuf },
}

// Only the fields we read; everything else in the sidecar is ignored.
#[derive(Debug, Deserialize)]
struct Manifest {
    ui: Vec<UiGroup>,
}

#[derive(Debug, Deserialize)]
struct UiGroup {
    items: Vec<UiItem>,
}

#[derive(Debug, Deserialize)]
struct UiItem {
    label: String,
}

/// Removes the sidecar file when dropped.
///
/// Arm it before the compiler runs: the file then disappears whether the
/// compile, the read or the parse fails. A file that is already gone is fine.
#[derive(Debug)]
pub struct SidecarGuard {
    path: PathBuf,
}

impl SidecarGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SidecarGuard {
    fn drop(&mut self) {
        // NotFound means the file was never written or is already gone.
        let _ = fs::remove_file(&self.path);
    }
}

/// Ordered labels of `ui[0].items`.
///
/// Only the first top-level UI group is read; parameters declared in any
/// further top-level group are ignored.
pub fn read_parameter_names(path: impl AsRef<Path>) -> Result<Vec<String>, ManifestError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: Manifest = serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let group = manifest
        .ui
        .into_iter()
        .next()
        .ok_or_else(|| ManifestError::NoUiGroup {
            path: path.to_path_buf(),
        })?;

    Ok(group.items.into_iter().map(|item| item.label).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"{
        "name": "filter",
        "inputs": 1,
        "outputs": 1,
        "ui": [
            {
                "type": "vgroup",
                "label": "filter",
                "items": [
                    { "type": "nentry", "label": "cutoff", "address": "/filter/cutoff" },
                    { "type": "nentry", "label": "resonance", "address": "/filter/resonance" },
                    { "type": "nentry", "label": "gain", "address": "/filter/gain" }
                ]
            },
            {
                "type": "vgroup",
                "label": "ignored",
                "items": [ { "type": "nentry", "label": "other" } ]
            }
        ]
    }"#;

    fn write_sidecar(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("filter.dsp.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_labels_in_declared_order() {
        let dir = tempdir().unwrap();
        let path = write_sidecar(dir.path(), MANIFEST);
        let names = read_parameter_names(&path).unwrap();
        assert_eq!(names, vec!["cutoff", "resonance", "gain"]);
    }

    #[test]
    fn test_empty_first_group() {
        let dir = tempdir().unwrap();
        let path = write_sidecar(dir.path(), r#"{"ui":[{"items":[]}]}"#);
        assert!(read_parameter_names(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_keys_are_errors() {
        let dir = tempdir().unwrap();
        let broken = [
            r#"{"ui":[{"label":"x"}]}"#,
            r#"{"name":"x"}"#,
            r#"{"ui":[{"items":[{}]}]}"#,
        ];
        for contents in broken {
            let path = write_sidecar(dir.path(), contents);
            let err = read_parameter_names(&path).unwrap_err();
            assert!(matches!(err, ManifestError::Parse { .. }), "{contents}");
        }
    }

    /// Arms a guard, reads through it and drops it, as the build pipeline does.
    fn read_guarded(path: &Path) -> Result<Vec<String>, ManifestError> {
        let guard = SidecarGuard::new(path);
        read_parameter_names(guard.path())
    }

    #[test]
    fn test_guard_removes_sidecar() {
        let dir = tempdir().unwrap();
        let path = write_sidecar(dir.path(), MANIFEST);

        let names = read_guarded(&path).unwrap();
        assert_eq!(names.len(), 3);
        assert!(!path.exists());
    }

    #[test]
    fn test_guard_removes_sidecar_on_error() {
        let dir = tempdir().unwrap();
        let path = write_sidecar(dir.path(), r#"{"ui":[{"label":"no items here"}]}"#);

        let err = read_guarded(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_no_ui_group() {
        let dir = tempdir().unwrap();
        let path = write_sidecar(dir.path(), r#"{"ui":[]}"#);

        let err = read_guarded(&path).unwrap_err();
        assert!(matches!(err, ManifestError::NoUiGroup { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_sidecar() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never-written.json");

        let err = read_guarded(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn test_guard_tolerates_absent_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.json");
        fs::write(&path, "{}").unwrap();

        let guard = SidecarGuard::new(&path);
        fs::remove_file(&path).unwrap();
        drop(guard);
        assert!(!path.exists());
    }
}
