// Parent `tools` module controls `cli` gating; avoid duplicating crate-level cfg here.
mod commands;
pub mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state::CliContext;

use crate::engine::compiler::CompileError;
use crate::tools::logger::StructuredError;

#[derive(Parser, Debug)]
#[command(name = "faust2hpp")]
#[command(
    version,
    about = "Compile a Faust DSP file into a standalone C++ header with typed parameter setters."
)]
pub struct Cli {
    /// Print debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a .dsp file and generate <CLASS>.h
    Build(commands::build::BuildCommand),
    /// Copy the support headers (Meta.h, UI.h, FaustImpl.h)
    Sources(commands::sources::SourcesCommand),
}

/// Parses arguments, runs the command and logs any failure.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::new(cli.debug);

    let result = match &cli.command {
        Commands::Build(command) => command.execute(&ctx),
        Commands::Sources(command) => command.execute(&ctx),
    };

    if let Err(err) = &result {
        ctx.logger()
            .log_structured_error(&StructuredError::from_error(err));
    }
    result
}

/// Process exit code for a failed run: the compiler's own code when it
/// failed, 1 otherwise.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CompileError>())
        .and_then(CompileError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
