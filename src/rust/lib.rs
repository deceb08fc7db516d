//! Generates a standalone C++ wrapper header for a Faust DSP file.
//!
//! The Faust compiler produces `<Class>Faust.h` plus a JSON interface
//! description; this crate reads the parameter list from that description,
//! applies optional per-parameter transforms, and renders `<Class>.h` with
//! one scaled setter per parameter.

pub mod engine;
pub mod platform;
pub mod services;
pub mod tools;
