//! The data model rendered into every template.

use crudgen_core::TypeMapper;
use crudgen_schema::{Column, Table};
use serde::Serialize;

use crate::{clauses, naming::NamingConvention};

/// A target-language field derived from one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Target-language identifier (e.g., "UserID")
    pub name: String,
    /// Target-language type (e.g., "*time.Time")
    #[serde(rename = "type")]
    pub ty: String,
    /// Source column name
    pub column: String,
    /// Database type as written in the migration
    pub raw_type: String,
    pub nullable: bool,
}

impl Field {
    pub fn from_column(
        column: &Column,
        naming: &NamingConvention,
        mapper: &dyn TypeMapper,
    ) -> Self {
        Self {
            name: naming.field_name(&column.name),
            ty: mapper.map_column(&column.raw_type, column.nullable),
            column: column.name.clone(),
            raw_type: column.raw_type.clone(),
            nullable: column.nullable,
        }
    }
}

/// Template data for one table.
///
/// Built once per table and shared read-only by the body, path and file
/// name renders of every template.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationContext {
    pub entity_name: String,
    pub lower_entity_name: String,
    pub table_name: String,
    pub fields: Vec<Field>,
    pub select_list: String,
    pub scan_targets: String,
    pub insert_columns: String,
    pub insert_placeholders: String,
    pub update_assignments: String,
    pub create_bind_args: String,
    pub update_bind_args: String,
    /// Number of fields; the next free placeholder is `last_param_index + 1`
    pub last_param_index: usize,
}

impl GenerationContext {
    pub fn new(
        table: &Table,
        entity: &str,
        naming: &NamingConvention,
        mapper: &dyn TypeMapper,
    ) -> Self {
        let fields: Vec<Field> = table
            .columns
            .iter()
            .map(|column| Field::from_column(column, naming, mapper))
            .collect();

        Self {
            entity_name: entity.to_string(),
            lower_entity_name: naming.file_stem(entity),
            table_name: table.name.clone(),
            select_list: clauses::select_list(&fields),
            scan_targets: clauses::scan_targets(&fields),
            insert_columns: clauses::insert_columns(&fields),
            insert_placeholders: clauses::insert_placeholders(&fields),
            update_assignments: clauses::update_assignments(&fields),
            create_bind_args: clauses::bind_args(&fields),
            update_bind_args: clauses::bind_args(&fields),
            last_param_index: fields.len(),
            fields,
        }
    }

    /// Pretty-printed JSON of the context, as seen by templates.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
