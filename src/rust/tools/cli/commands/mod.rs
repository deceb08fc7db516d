pub mod build;
pub mod sources;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::platform::config::AppConfig;

/// `--out` when given, otherwise `paths.output` from the config; created if missing.
fn prepare_output_dir(root: &Path, out: Option<&Path>, config: &AppConfig) -> Result<PathBuf> {
    let output_dir = match out {
        Some(dir) => root.join(dir),
        None => config.output_path(root),
    };
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;
    Ok(output_dir)
}
