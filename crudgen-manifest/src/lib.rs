//! Parsing and validation of `crudgen.toml` manifests.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CrudgenToml, GenerateConfig, MANIFEST_FILE, Manifest, OutputConfig, ProjectConfig,
    SkipConfig, TableConfig,
};
