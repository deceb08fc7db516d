use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::compiler::DEFAULT_PROGRAM;

/// Environment variable that overrides `compiler.program`.
pub const COMPILER_ENV: &str = "FAUST2HPP_FAUST";

const JSON_NAME: &str = "faust2hpp.json";
const DOT_NAME: &str = ".faust2hpp";
const TOML_NAME: &str = "faust2hpp.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub compiler: CompilerSection,
    pub paths: PathsSection,
    pub rules: RulesSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSection {
    pub program: String,
    /// Directory holding `Meta.h`, `UI.h` and `FaustImpl.h`; the bundled copies
    /// are used when unset.
    pub resource_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesSection {
    pub unused_transform: RuleLevel,
    pub missing_transform: RuleLevel,
}

/// How a transform-file diagnostic is surfaced. None of them stop generation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    #[default]
    Warning,
    Info,
    Off,
}

impl RuleLevel {
    pub fn should_report(&self) -> bool {
        *self != RuleLevel::Off
    }
}

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            resource_dir: None,
        }
    }
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Loads `faust2hpp.toml`, `faust2hpp.json` or `.faust2hpp` from `root`,
    /// in that order of preference. Defaults when none exists.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let candidate = [TOML_NAME, JSON_NAME, DOT_NAME]
            .into_iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file());

        match candidate {
            Some(path) => load_config_by_path(&path),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn output_path(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(&self.paths.output)
    }

    /// Compiler executable, honouring [`COMPILER_ENV`].
    pub fn compiler_program(&self) -> String {
        self.compiler_program_with(std::env::var(COMPILER_ENV).ok())
    }

    fn compiler_program_with(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.compiler.program.clone())
    }
}

fn load_json(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&file)
        .with_context(|| format!("invalid JSON config: {}", path.display()))?;
    Ok(config)
}

fn load_toml(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str(&file)
        .with_context(|| format!("invalid TOML config: {}", path.display()))?;
    Ok(config)
}

fn load_config_by_path(path: &Path) -> Result<AppConfig> {
    // `.faust2hpp` may hold either format; sniff the first character
    if path.file_name().and_then(|s| s.to_str()) == Some(DOT_NAME) {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let trimmed = raw.trim_start();
        return if trimmed.starts_with('{') {
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON config: {}", path.display()))
        } else {
            toml::from_str(&raw).with_context(|| format!("invalid TOML config: {}", path.display()))
        };
    }

    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("toml") => load_toml(path),
        _ => load_json(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.compiler.program, "faust");
        assert_eq!(config.rules.unused_transform, RuleLevel::Warning);
        // nothing is written back
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_load_json_partial() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(JSON_NAME),
            r#"{ "compiler": { "program": "/opt/faust/bin/faust" }, "rules": { "missing_transform": "off" } }"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.compiler.program, "/opt/faust/bin/faust");
        assert_eq!(config.compiler.resource_dir, None);
        assert_eq!(config.rules.missing_transform, RuleLevel::Off);
        assert_eq!(config.rules.unused_transform, RuleLevel::Warning);
        assert_eq!(config.paths.output, PathBuf::from("."));
    }

    #[test]
    fn test_toml_wins_over_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(JSON_NAME), r#"{ "paths": { "output": "json" } }"#).unwrap();
        fs::write(
            dir.path().join(TOML_NAME),
            "[paths]\noutput = \"toml\"\n\n[rules]\nunused_transform = \"info\"\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.paths.output, PathBuf::from("toml"));
        assert_eq!(config.rules.unused_transform, RuleLevel::Info);
        assert_eq!(config.output_path("/work"), PathBuf::from("/work/toml"));
    }

    #[test]
    fn test_dotfile_is_sniffed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DOT_NAME), "[compiler]\nresource_dir = \"res\"\n").unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.compiler.resource_dir, Some(PathBuf::from("res")));

        fs::write(dir.path().join(DOT_NAME), r#"{ "compiler": { "program": "faust2" } }"#).unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.compiler.program, "faust2");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(JSON_NAME), "{ not json").unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("invalid JSON config"));
    }

    #[test]
    fn test_compiler_env_override() {
        let config = AppConfig::default();
        assert_eq!(config.compiler_program_with(None), "faust");
        assert_eq!(config.compiler_program_with(Some("  ".into())), "faust");
        assert_eq!(
            config.compiler_program_with(Some("/usr/local/bin/faust".into())),
            "/usr/local/bin/faust"
        );
    }
}
