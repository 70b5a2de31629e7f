use std::path::PathBuf;

use crudgen_schema::SchemaError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{message}")]
    #[diagnostic(
        code(crudgen::configuration),
        help("check the template directory and output settings in crudgen.toml")
    )]
    Configuration { message: String },

    #[error("failed to read migration file '{path}'")]
    #[diagnostic(code(crudgen::migration_read))]
    MigrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to find table '{table}' in the migration")]
    #[diagnostic(code(crudgen::schema_parse))]
    SchemaParse {
        table: String,
        #[source]
        #[diagnostic_source]
        source: SchemaError,
    },

    #[error("invalid template '{template}': {message}")]
    #[diagnostic(code(crudgen::template_parse))]
    TemplateParse { template: String, message: String },

    #[error("failed to render template '{template}' for table '{table}'")]
    #[diagnostic(
        code(crudgen::template_render),
        help("run `crudgen context --table {table}` to list the available template fields")
    )]
    Render {
        template: String,
        table: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("cannot resolve output location of template '{template}': {message}")]
    #[diagnostic(code(crudgen::path_resolution))]
    PathResolution { template: String, message: String },

    #[error("failed to write '{path}' for template '{template}'")]
    #[diagnostic(code(crudgen::io))]
    Io {
        template: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    MigrationRead,
    SchemaParse,
    TemplateParse,
    PathResolution,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::MigrationRead { .. } => ErrorKind::MigrationRead,
            Error::SchemaParse { .. } => ErrorKind::SchemaParse,
            Error::TemplateParse { .. } | Error::Render { .. } => ErrorKind::TemplateParse,
            Error::PathResolution { .. } => ErrorKind::PathResolution,
            Error::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn template_parse(template: &str, message: impl Into<String>) -> Self {
        Error::TemplateParse {
            template: template.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn path_resolution(template: &str, message: impl Into<String>) -> Self {
        Error::PathResolution {
            template: template.to_string(),
            message: message.into(),
        }
    }
}
