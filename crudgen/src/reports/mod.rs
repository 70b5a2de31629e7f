//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod templates;

pub use check::{CheckReport, TableSummary};
pub use generate::{GenerateReport, GenerationResult, TablePreview};
pub use output::{Report, TerminalOutput};
pub use templates::{TemplateInfo, TemplatesReport};
