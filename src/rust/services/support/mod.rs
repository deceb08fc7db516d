use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A header shipped alongside every generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportFile {
    pub name: &'static str,
    pub contents: &'static str,
}

/// Name of the support header that doubles as the compiler's architecture file.
pub const ARCHITECTURE_FILE_NAME: &str = "FaustImpl.h";

pub const SUPPORT_FILES: [SupportFile; 3] = [
    SupportFile {
        name: "Meta.h",
        contents: include_str!("../../../../resources/faust/Meta.h"),
    },
    SupportFile {
        name: "UI.h",
        contents: include_str!("../../../../resources/faust/UI.h"),
    },
    SupportFile {
        name: ARCHITECTURE_FILE_NAME,
        contents: include_str!("../../../../resources/faust/FaustImpl.h"),
    },
];

/// Where the support headers come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SupportSource {
    /// Copies compiled into the binary.
    #[default]
    Bundled,
    /// A directory holding files with the same names.
    Directory(PathBuf),
}

/// Architecture file handed to the compiler. Keeps any temporary directory
/// alive until dropped.
#[derive(Debug)]
pub struct ArchitectureFile {
    path: PathBuf,
    _scratch: Option<TempDir>,
}

impl ArchitectureFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SupportSource {
    pub fn from_resource_dir(resource_dir: Option<PathBuf>) -> Self {
        resource_dir.map_or(SupportSource::Bundled, SupportSource::Directory)
    }

    /// Copies `Meta.h`, `UI.h` and `FaustImpl.h` into `output_dir`, replacing
    /// existing copies. The directory must already exist.
    pub fn stage(&self, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        let mut staged = Vec::with_capacity(SUPPORT_FILES.len());

        for file in &SUPPORT_FILES {
            let target = output_dir.join(file.name);
            match self {
                SupportSource::Bundled => fs::write(&target, file.contents)
                    .with_context(|| format!("unable to write support file: {}", target.display()))?,
                SupportSource::Directory(dir) => {
                    let source = dir.join(file.name);
                    fs::copy(&source, &target).with_context(|| {
                        format!(
                            "failed to copy support file {} to {}",
                            source.display(),
                            target.display()
                        )
                    })?;
                }
            }
            staged.push(target);
        }

        Ok(staged)
    }

    /// Architecture file for `-a`. Bundled copies are written with their
    /// siblings into a scratch directory so its includes resolve.
    pub fn architecture(&self) -> Result<ArchitectureFile> {
        match self {
            SupportSource::Directory(dir) => Ok(ArchitectureFile {
                path: dir.join(ARCHITECTURE_FILE_NAME),
                _scratch: None,
            }),
            SupportSource::Bundled => {
                let scratch = tempfile::Builder::new()
                    .prefix("faust2hpp-")
                    .tempdir()
                    .context("failed to create scratch directory for architecture file")?;
                self.stage(scratch.path())?;
                Ok(ArchitectureFile {
                    path: scratch.path().join(ARCHITECTURE_FILE_NAME),
                    _scratch: Some(scratch),
                })
            }
        }
    }
}

/// Copies the bundled support headers into `output_dir`.
pub fn stage_support_files(output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    SupportSource::Bundled.stage(output_dir)
}
