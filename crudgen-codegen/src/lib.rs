//! Template-driven source generation from SQL table definitions.
//!
//! A [`Generator`] owns an immutable [`TemplateSet`] loaded once from the
//! template directory. Each call to [`Generator::generate`] parses the
//! migration for one table, builds a [`GenerationContext`], and renders every
//! non-skipped template into the location resolved from its directive header.
//!
//! # Module Organization
//!
//! - [`config`] - Generator configuration (paths, skip flags, fallbacks)
//! - [`context`] - The data model rendered into every template
//! - [`clauses`] - SQL clause fragments derived from the column list
//! - [`template`] - Template loading and directive parsing
//! - [`resolver`] - Output path and file name resolution
//! - [`naming`] - Identifier and fallback file naming conventions

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod clauses;
pub mod config;
pub mod context;
mod error;
mod generator;
pub mod naming;
mod report;
pub mod resolver;
pub mod template;

pub use config::{GeneratorConfig, OutputDirs, SkipFlags};
pub use context::{Field, GenerationContext};
pub use error::{Error, ErrorKind, Result};
pub use generator::{Generator, TableTarget};
pub use report::{GeneratedFile, GenerationReport, Outcome, TemplateOutcome};
pub use template::{TemplateSet, TemplateUnit};
