//! Core utilities and types for the crudgen generator.
//!
//! This crate provides fundamental types and utilities shared by the
//! schema parser, the manifest loader and the code generator.

mod category;
mod file;
mod type_mapper;
mod utils;

// Template categories
pub use category::Category;
// File operations
pub use file::{File, Overwrite, WriteResult};
// Type mapping
pub use type_mapper::{GoTypeMapper, SqlType, TypeMapper};
// String utilities
pub use utils::{is_identifier, to_field_name, to_pascal_case, to_title_case};
