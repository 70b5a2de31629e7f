//! Table definitions extracted from SQL migration files.
//!
//! The parser is deliberately narrow: it reads `CREATE TABLE` blocks line by
//! line and records one column per definition line. Everything downstream
//! only depends on [`Table`] and [`Column`], so a fuller DDL parser can be
//! swapped in behind [`parse_schema`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parser;
mod table;

pub use error::{Result, SchemaError};
pub use parser::parse_schema;
pub use table::{Column, Table};
