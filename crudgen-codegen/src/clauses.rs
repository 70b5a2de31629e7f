//! SQL clause fragments derived from a table's fields.
//!
//! Every fragment lists exactly one element per field, in column order, so
//! positional placeholders always line up with the bind arguments.

use crate::Field;

/// Variable name the generated code binds rows to
const RECEIVER: &str = "data";
const SEPARATOR: &str = ", ";

fn join(fields: &[Field], render: impl Fn(usize, &Field) -> String) -> String {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| render(i, field))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// 1-indexed positional placeholder
fn placeholder(index: usize) -> String {
    format!("${}", index + 1)
}

/// Column names for a SELECT list: `id, name, created_at`
pub fn select_list(fields: &[Field]) -> String {
    join(fields, |_, f| f.column.clone())
}

/// Scan destinations for a positional read: `&data.ID, &data.Name`
pub fn scan_targets(fields: &[Field]) -> String {
    join(fields, |_, f| format!("&{}.{}", RECEIVER, f.name))
}

/// Column names for an INSERT column list
pub fn insert_columns(fields: &[Field]) -> String {
    join(fields, |_, f| f.column.clone())
}

/// Positional placeholders for an INSERT: `$1, $2, $3`
pub fn insert_placeholders(fields: &[Field]) -> String {
    join(fields, |i, _| placeholder(i))
}

/// SET assignments for an UPDATE: `id = $1, name = $2`
pub fn update_assignments(fields: &[Field]) -> String {
    join(fields, |i, f| format!("{} = {}", f.column, placeholder(i)))
}

/// Bind arguments matching the placeholders: `data.ID, data.Name`
pub fn bind_args(fields: &[Field]) -> String {
    join(fields, |_, f| format!("{}.{}", RECEIVER, f.name))
}
