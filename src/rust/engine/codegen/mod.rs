pub mod parameter;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use parameter::{ParameterInfo, format_scientific};
pub use template::{HeaderTemplate, WRAPPER_TEMPLATE};

/// `<ClassName>.h`
pub fn header_file_name(class_name: &str) -> String {
    format!("{class_name}.h")
}

/// Writes the rendered class to `<output_dir>/<ClassName>.h`, replacing any
/// previous file. The directory must already exist.
pub fn write_header(output_dir: impl AsRef<Path>, class_name: &str, source: &str) -> Result<PathBuf> {
    let path = output_dir.as_ref().join(header_file_name(class_name));
    fs::write(&path, source)
        .with_context(|| format!("unable to write header file: {}", path.display()))?;
    Ok(path)
}
