use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::platform::config::AppConfig;
use crate::services::support::SupportSource;
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct SourcesCommand {
    /// Output directory; overrides `paths.output` from the config
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

impl SourcesCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let current_dir = std::env::current_dir()?;
        let config = AppConfig::load(&current_dir)?;
        let output_dir = super::prepare_output_dir(&current_dir, self.out.as_deref(), &config)?;

        let source = SupportSource::from_resource_dir(config.compiler.resource_dir.clone());
        let staged = source.stage(&output_dir)?;

        logger.log_with_details(
            crate::tools::logger::LogLevel::Success,
            format!("Copied {} support file(s) to {}", staged.len(), output_dir.display()),
            staged.iter().map(|path| path.display().to_string()),
        );
        Ok(())
    }
}
