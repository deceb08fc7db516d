use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::codegen::{self, HeaderTemplate, ParameterInfo};
use crate::engine::compiler::{CompileJob, DspCompiler, FaustCompiler};
use crate::engine::manifest::{SidecarGuard, read_parameter_names};
use crate::engine::transform::{self, Diagnostic, TransformSpec};
use crate::platform::config::AppConfig;
use crate::services::support::SupportSource;
use crate::tools::logger::{Logger, RuleChecker};

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid class name pattern"));

/// One DSP file in, one `<ClassName>.h` out.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub output_dir: PathBuf,
    pub dsp_path: PathBuf,
    pub class_name: String,
    /// Optional JSON/TOML file of per-parameter transforms.
    pub transform_spec: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct GenerationArtifacts {
    pub header_path: PathBuf,
    pub engine_header_path: PathBuf,
    /// Parameter names in declared order.
    pub parameters: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub total_duration: Duration,
}

/// Runs compile → extract → resolve → render → write, in that order.
pub struct HeaderBuilder {
    logger: Arc<Logger>,
    compiler: Box<dyn DspCompiler>,
    support: SupportSource,
    template: HeaderTemplate,
    rules: RuleChecker,
}

impl HeaderBuilder {
    pub fn new(logger: Arc<Logger>, config: &AppConfig) -> Self {
        Self {
            logger,
            compiler: Box::new(FaustCompiler::new(config.compiler_program())),
            support: SupportSource::from_resource_dir(config.compiler.resource_dir.clone()),
            template: HeaderTemplate::default(),
            rules: RuleChecker::new(config.rules),
        }
    }

    pub fn with_compiler(mut self, compiler: impl DspCompiler + 'static) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    pub fn with_template(mut self, template: HeaderTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn build(&self, request: &GenerationRequest) -> Result<GenerationArtifacts> {
        let build_start = Instant::now();
        validate_class_name(&request.class_name)?;

        self.logger.action(format!(
            "Generating {} from {}",
            codegen::header_file_name(&request.class_name),
            request.dsp_path.display()
        ));

        let (parameters, engine_header_path) = self.compile(request)?;
        self.logger.debug(format!(
            "Found {} parameter(s): {}",
            parameters.len(),
            parameters.join(", ")
        ));

        let spec = request
            .transform_spec
            .as_deref()
            .map(TransformSpec::load)
            .transpose()?;

        let resolution = transform::resolve(&parameters, spec.as_ref());
        self.report(&resolution.diagnostics);

        let infos: Vec<ParameterInfo> = resolution
            .parameters
            .iter()
            .map(ParameterInfo::from_resolved)
            .collect();
        let source = self.template.render(&request.class_name, &infos);
        let header_path = codegen::write_header(&request.output_dir, &request.class_name, &source)?;

        let total_duration = build_start.elapsed();
        self.logger.debug(format!(
            "Build complete in {:.1} ms",
            total_duration.as_secs_f64() * 1000.0
        ));

        Ok(GenerationArtifacts {
            header_path,
            engine_header_path,
            parameters,
            diagnostics: resolution.diagnostics,
            total_duration,
        })
    }

    /// Copies the support headers next to the generated class.
    pub fn stage_support_files(&self, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.support.stage(output_dir)
    }

    fn compile(&self, request: &GenerationRequest) -> Result<(Vec<String>, PathBuf)> {
        let architecture = self.support.architecture()?;
        let job = CompileJob {
            dsp_path: request.dsp_path.clone(),
            output_dir: request.output_dir.clone(),
            class_name: request.class_name.clone(),
            architecture_path: architecture.path().to_path_buf(),
        };

        // Armed before the compiler runs so the sidecar never outlives this call.
        let sidecar = SidecarGuard::new(job.sidecar_path());
        self.compiler
            .compile(&job)
            .with_context(|| format!("failed to compile {}", request.dsp_path.display()))?;
        let parameters = read_parameter_names(sidecar.path())?;

        Ok((parameters, job.engine_header_path()))
    }

    fn report(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            if let Some(message) = self.rules.check(diagnostic) {
                self.logger.log_rule_message(&message);
            }
        }
    }
}

/// The class name ends up as a C++ identifier and a file name.
pub fn validate_class_name(class_name: &str) -> Result<()> {
    if !CLASS_NAME.is_match(class_name) {
        anyhow::bail!("invalid class name '{class_name}': expected a C++ identifier");
    }
    Ok(())
}
