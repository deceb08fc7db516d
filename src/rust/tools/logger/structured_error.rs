use crate::engine::compiler::CompileError;
use crate::engine::manifest::ManifestError;
use crate::engine::transform::TransformError;
use crate::platform::config::COMPILER_ENV;

/// Structured error information with details and suggestions
#[derive(Debug, Clone)]
pub struct StructuredError {
    /// Main error message
    pub message: String,
    /// File the error is about
    pub file_path: Option<String>,
    /// Error category (e.g. "CompileError", "ManifestError")
    pub error_type: Option<String>,
    /// Optional hint on how to fix it
    pub suggestion: Option<String>,
    /// Underlying causes, outermost first
    pub stacktrace: Vec<String>,
}

impl StructuredError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file_path: None,
            error_type: None,
            suggestion: None,
            stacktrace: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn add_stacktrace(mut self, entry: impl Into<String>) -> Self {
        self.stacktrace.push(entry.into());
        self
    }

    /// Builds a report from an error chain, picking up the first pipeline
    /// error it recognises for the code, path and help lines.
    pub fn from_error(error: &anyhow::Error) -> Self {
        let mut structured = StructuredError::new(error.to_string());
        for cause in error.chain().skip(1) {
            structured = structured.add_stacktrace(cause.to_string());
        }

        for cause in error.chain() {
            if let Some(err) = cause.downcast_ref::<CompileError>() {
                structured = structured.with_type("CompileError");
                structured = match err {
                    CompileError::Spawn { .. } => structured.with_suggestion(format!(
                        "install Faust, or set `compiler.program` / {COMPILER_ENV} to its location"
                    )),
                    CompileError::Failed { .. } => {
                        structured.with_suggestion("see the compiler output above")
                    }
                };
                break;
            }
            if let Some(err) = cause.downcast_ref::<ManifestError>() {
                let path = match err {
                    ManifestError::Read { path, .. }
                    | ManifestError::Parse { path, .. }
                    | ManifestError::NoUiGroup { path } => path,
                };
                structured = structured
                    .with_type("ManifestError")
                    .with_file(path.display().to_string());
                break;
            }
            if let Some(err) = cause.downcast_ref::<TransformError>() {
                let path = match err {
                    TransformError::Read { path, .. }
                    | TransformError::Json { path, .. }
                    | TransformError::Toml { path, .. } => path,
                };
                structured = structured
                    .with_type("TransformError")
                    .with_file(path.display().to_string());
                break;
            }
        }

        structured
    }

    /// (label, content) pairs for the logger to color
    pub fn build_colored_details(&self) -> Vec<(String, String)> {
        let mut details = Vec::new();

        if let Some(file) = &self.file_path {
            details.push(("path".to_string(), file.clone()));
        }

        if let Some(error_type) = &self.error_type {
            details.push(("code".to_string(), error_type.clone()));
        }

        for entry in &self.stacktrace {
            details.push(("cause".to_string(), entry.clone()));
        }

        if let Some(suggestion) = &self.suggestion {
            details.push(("help".to_string(), suggestion.clone()));
        }

        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compiler::ExitReason;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_structured_error_builder() {
        let error = StructuredError::new("Unknown parameter")
            .with_file("filter.dsp")
            .with_type("ManifestError")
            .with_suggestion("check the DSP");

        assert_eq!(error.message, "Unknown parameter");
        assert_eq!(error.file_path, Some("filter.dsp".to_string()));
        assert_eq!(error.error_type, Some("ManifestError".to_string()));
        assert_eq!(error.suggestion, Some("check the DSP".to_string()));
    }

    #[test]
    fn test_build_colored_details() {
        let error = StructuredError::new("Test error")
            .with_file("test.dsp")
            .with_type("CompileError")
            .add_stacktrace("exited with status 1")
            .with_suggestion("see the compiler output above");

        let details = error.build_colored_details();
        let labels: Vec<_> = details.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["path", "code", "cause", "help"]);
        assert_eq!(details[0], ("path".to_string(), "test.dsp".to_string()));
    }

    #[test]
    fn test_from_compile_failure() {
        let err = Err::<(), _>(CompileError::Failed {
            program: "faust".to_string(),
            status: ExitReason::Code(1),
        })
        .context("failed to compile filter.dsp")
        .unwrap_err();

        let structured = StructuredError::from_error(&err);
        assert_eq!(structured.message, "failed to compile filter.dsp");
        assert_eq!(structured.error_type.as_deref(), Some("CompileError"));
        assert_eq!(
            structured.stacktrace,
            vec!["DSP compiler `faust` exited with status 1".to_string()]
        );
        assert!(structured.suggestion.is_some());
    }

    #[test]
    fn test_from_manifest_error_has_path() {
        let err = anyhow::Error::new(ManifestError::NoUiGroup {
            path: PathBuf::from("out/filter.dsp.json"),
        });

        let structured = StructuredError::from_error(&err);
        assert_eq!(structured.error_type.as_deref(), Some("ManifestError"));
        assert_eq!(structured.file_path.as_deref(), Some("out/filter.dsp.json"));
        assert!(structured.stacktrace.is_empty());
    }

    #[test]
    fn test_from_plain_error() {
        let err = anyhow::anyhow!("something else");
        let structured = StructuredError::from_error(&err);
        assert_eq!(structured.error_type, None);
        assert!(structured.build_colored_details().is_empty());
    }
}
