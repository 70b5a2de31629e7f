use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema parsing
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("none of the requested tables were found in the schema: {}", .tables.join(", "))]
    #[diagnostic(
        code(crudgen::schema::not_found),
        help("check the table name against the CREATE TABLE statements in the migration file")
    )]
    TablesNotFound { tables: Vec<String> },
}
