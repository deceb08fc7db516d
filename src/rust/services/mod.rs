pub mod build;
pub mod support;

pub use build::{GenerationArtifacts, GenerationRequest, HeaderBuilder};
pub use support::{SupportSource, stage_support_files};
