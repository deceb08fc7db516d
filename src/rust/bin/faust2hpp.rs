use std::process::ExitCode;

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    match faust2hpp::tools::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(faust2hpp::tools::cli::exit_code(&err)),
    }
}

#[cfg(not(feature = "cli"))]
fn main() -> ExitCode {
    panic!("CLI feature is disabled; rebuild with --features cli");
}
