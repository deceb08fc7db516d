/// Code-generation stages, leaves first
pub mod codegen;
pub mod compiler;
pub mod manifest;
pub mod transform;

pub use codegen::{HeaderTemplate, ParameterInfo};
pub use compiler::{CompileError, CompileJob, DspCompiler, FaustCompiler};
pub use manifest::{ManifestError, SidecarGuard};
pub use transform::{Diagnostic, Resolution, ResolvedParameter, TransformSpec};
