use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Base class every generated engine derives from (provided by `FaustImpl.h`).
pub const SUPER_CLASS_NAME: &str = "FaustImpl";

/// Suffix appended to the user class name to name the generated engine.
pub const ENGINE_SUFFIX: &str = "Faust";

/// Default executable looked up on `PATH`.
pub const DEFAULT_PROGRAM: &str = "faust";

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to launch DSP compiler `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("DSP compiler `{program}` {status}")]
    Failed { program: String, status: ExitReason },
}

impl CompileError {
    /// Exit code of the compiler process, when it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CompileError::Failed {
                status: ExitReason::Code(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Code(i32),
    Signal,
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitReason::Code(code) => write!(f, "exited with status {code}"),
            ExitReason::Signal => write!(f, "was terminated by a signal"),
        }
    }
}

/// One compiler run: inputs, output location and naming.
#[derive(Debug, Clone)]
pub struct CompileJob {
    pub dsp_path: PathBuf,
    pub output_dir: PathBuf,
    pub class_name: String,
    /// Architecture file passed with `-a`; must sit next to `Meta.h` and `UI.h`.
    pub architecture_path: PathBuf,
}

impl CompileJob {
    pub fn engine_class_name(&self) -> String {
        format!("{}{}", self.class_name, ENGINE_SUFFIX)
    }

    pub fn engine_header_name(&self) -> String {
        format!("{}.h", self.engine_class_name())
    }

    pub fn engine_header_path(&self) -> PathBuf {
        self.output_dir.join(self.engine_header_name())
    }

    pub fn sidecar_path(&self) -> PathBuf {
        sidecar_path(&self.output_dir, &self.dsp_path)
    }
}

/// Where the compiler drops its JSON interface description: `<out>/<dsp file name>.json`.
pub fn sidecar_path(output_dir: &Path, dsp_path: &Path) -> PathBuf {
    let mut name = dsp_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("dsp"));
    name.push(".json");
    output_dir.join(name)
}

/// Produces `<ClassName>Faust.h` and the JSON sidecar for a job.
pub trait DspCompiler {
    fn compile(&self, job: &CompileJob) -> Result<(), CompileError>;
}

/// Runs the external Faust executable.
#[derive(Debug, Clone)]
pub struct FaustCompiler {
    program: PathBuf,
}

impl Default for FaustCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl FaustCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list for `job`, in the order Faust receives it.
    pub fn arguments(job: &CompileJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![job.dsp_path.clone().into_os_string()];
        args.extend(
            [
                "-lang", "cpp", "-i", "-scal", "-inpl", "-ftz", "2", "-json", "-scn",
            ]
            .into_iter()
            .map(OsString::from),
        );
        args.push(SUPER_CLASS_NAME.into());
        args.push("-cn".into());
        args.push(job.engine_class_name().into());
        args.push("-a".into());
        args.push(job.architecture_path.clone().into_os_string());
        args.push("-o".into());
        args.push(job.engine_header_name().into());
        args.push("-O".into());
        args.push(job.output_dir.clone().into_os_string());
        args
    }
}

impl DspCompiler for FaustCompiler {
    fn compile(&self, job: &CompileJob) -> Result<(), CompileError> {
        let program = self.program.display().to_string();
        let status = Command::new(&self.program)
            .args(Self::arguments(job))
            .status()
            .map_err(|source| CompileError::Spawn {
                program: program.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        let status = match status.code() {
            Some(code) => ExitReason::Code(code),
            None => ExitReason::Signal,
        };
        Err(CompileError::Failed { program, status })
    }
}

#[cfg(test)]
#[path = "test_compiler.rs"]
mod tests;
