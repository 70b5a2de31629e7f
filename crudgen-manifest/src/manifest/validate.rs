//! Validation context and utilities for manifest parsing.

use std::path::Path;

use crudgen_core::is_identifier;
use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Validation context that carries source information for error spans.
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    /// Require a non-empty path value for `key`.
    pub fn require_path(&self, path: &Path, key: &str) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(self.source.validation_error(
                format!("project.{} must not be empty", key),
                find_key_span(self.source.src(), key),
            ));
        }
        Ok(())
    }

    pub fn validate_table_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(self.source.validation_error(
                "table name must not be empty",
                find_value_span(self.source.src(), "name", name),
            ));
        }
        Ok(())
    }

    pub fn validate_entity_name(&self, entity: &str, table: &str) -> Result<()> {
        if !is_identifier(entity) {
            return Err(self.source.invalid_entity_error(
                entity,
                table,
                find_value_span(self.source.src(), "entity", entity),
            ));
        }
        Ok(())
    }

    /// Error pointing at the first two `name = "<table>"` occurrences.
    pub fn duplicate_table_error(&self, table: &str) -> Box<Error> {
        let src = self.source.src();
        let spans = find_value_spans(src, "name", table);
        match (spans.first(), spans.get(1)) {
            (Some(first), Some(second)) => {
                self.source.duplicate_table_error(table, *first, *second)
            }
            _ => self.source.validation_error(
                format!("table '{}' is listed more than once", table),
                None,
            ),
        }
    }
}

/// Find the span of a `key =` assignment.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    [format!("{} =", key), format!("{}=", key)]
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|start| SourceSpan::from((start, key.len())))
}

fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, key, value).into_iter().next()
}

/// Find every `key = "value"` (or single-quoted) occurrence, pointing at the value.
fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{} = {}{}{}", key, quote, value, quote);
        // skip `key = ` and the opening quote
        let skip = key.len() + 4;
        spans.extend(
            src.match_indices(pattern.as_str())
                .map(|(pos, _)| SourceSpan::from((pos + skip, value.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}
