//! Line-oriented `CREATE TABLE` scanner.

use indexmap::IndexMap;

use crate::{Column, Result, SchemaError, Table};

const TABLE_KEYWORD: &str = "CREATE TABLE";
const COMMENT_MARKER: &str = "--";
const TERMINATOR: &str = ");";
const NOT_NULL: &str = "NOT NULL";

/// Extract the columns of the requested tables from migration text.
///
/// Tables are keyed by the requested name that matched their `CREATE TABLE`
/// line. When a line contains several requested names, the first one in
/// `targets` order wins; `user` therefore also matches `CREATE TABLE users`.
///
/// Fails only when none of the requested tables were found. A table without
/// recognisable column lines is returned with an empty column list.
pub fn parse_schema<S: AsRef<str>>(
    schema: &str,
    targets: &[S],
) -> Result<IndexMap<String, Table>> {
    let mut tables: IndexMap<String, Table> = IndexMap::new();
    let mut current: Option<String> = None;

    for line in schema.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        if let Some(rest) = strip_table_keyword(line) {
            current = match_target(rest, targets);
            if let Some(name) = &current {
                tables.insert(name.clone(), Table::new(name.as_str()));
            }
            continue;
        }

        let Some(name) = &current else {
            continue;
        };

        if line.starts_with(')') {
            current = None;
            continue;
        }

        if let Some(column) = parse_column(line) {
            if let Some(table) = tables.get_mut(name) {
                table.columns.push(column);
            }
        }

        if line.ends_with(TERMINATOR) {
            current = None;
        }
    }

    if tables.is_empty() {
        return Err(SchemaError::TablesNotFound {
            tables: targets.iter().map(|t| t.as_ref().to_string()).collect(),
        });
    }

    Ok(tables)
}

/// Return the remainder of a table-definition line, matching the keyword
/// case-insensitively.
fn strip_table_keyword(line: &str) -> Option<&str> {
    let prefix = line.get(..TABLE_KEYWORD.len())?;
    if prefix.eq_ignore_ascii_case(TABLE_KEYWORD) {
        Some(&line[TABLE_KEYWORD.len()..])
    } else {
        None
    }
}

fn match_target<S: AsRef<str>>(rest: &str, targets: &[S]) -> Option<String> {
    targets
        .iter()
        .map(AsRef::as_ref)
        .find(|target| !target.is_empty() && rest.contains(target))
        .map(str::to_string)
}

/// Parse a column definition line: `<name> <type>[(...)] [constraints...]`.
fn parse_column(line: &str) -> Option<Column> {
    if !line.contains(char::is_whitespace) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let name_token = tokens.next()?;
    let type_token = tokens.next()?;

    let name = name_token.trim_matches(|c| matches!(c, '"' | '`' | '\'' | ','));
    let raw_type = type_token
        .split('(')
        .next()
        .unwrap_or_default()
        .trim_end_matches(|c| matches!(c, ',' | ';' | ')' | '"'));
    let nullable = !line.to_uppercase().contains(NOT_NULL);

    Some(Column::new(name, raw_type, nullable))
}
