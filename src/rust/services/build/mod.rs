pub mod pipeline;

pub use pipeline::{GenerationArtifacts, GenerationRequest, HeaderBuilder, validate_class_name};
