use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::platform::config::AppConfig;
use crate::services::build::{GenerationRequest, HeaderBuilder};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct BuildCommand {
    /// Path to the Faust .dsp file
    pub dsp: PathBuf,

    /// Name of the generated C++ class (also names <CLASS>.h)
    #[arg(long, short = 'n')]
    pub class_name: String,

    /// Output directory; overrides `paths.output` from the config
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// JSON or TOML file with per-parameter `transform` and `default`
    #[arg(long, short = 'i')]
    pub info: Option<PathBuf>,

    /// Do not copy Meta.h, UI.h and FaustImpl.h into the output directory
    #[arg(long)]
    pub no_sources: bool,
}

impl BuildCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let current_dir = std::env::current_dir()?;
        let config = AppConfig::load(&current_dir)?;

        let dsp_path = current_dir.join(&self.dsp);
        if !dsp_path.is_file() {
            anyhow::bail!("DSP file not found: {}", dsp_path.display());
        }

        let output_dir = super::prepare_output_dir(&current_dir, self.out.as_deref(), &config)?;
        let request = GenerationRequest {
            output_dir: output_dir.clone(),
            dsp_path,
            class_name: self.class_name.clone(),
            transform_spec: self.info.as_ref().map(|path| current_dir.join(path)),
        };

        let builder = HeaderBuilder::new(logger.clone(), &config);
        let artifacts = builder.build(&request)?;

        if !self.no_sources {
            let staged = builder.stage_support_files(&output_dir)?;
            logger.debug(format!("Copied {} support file(s)", staged.len()));
        }

        logger.success(format!(
            "Wrote {} with {} parameter(s)",
            artifacts.header_path.display(),
            artifacts.parameters.len()
        ));
        if !artifacts.diagnostics.is_empty() {
            logger.info(format!(
                "{} transform diagnostic(s) reported",
                artifacts.diagnostics.len()
            ));
        }
        logger.debug(format!(
            "Total build time: {:.1} ms",
            artifacts.total_duration.as_secs_f64() * 1000.0
        ));

        Ok(())
    }
}
