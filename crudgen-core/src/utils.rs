//! Shared identifier utilities.

/// Upper-case the first character and lower-case the rest (e.g., "uSER" -> "User")
pub fn to_title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Convert a column name to a field identifier (e.g., "user_id" -> "UserID")
///
/// Each underscore-separated segment is title-cased, except the exact
/// segment `id`, which becomes the acronym `ID`.
pub fn to_field_name(column: &str) -> String {
    column
        .split('_')
        .map(|segment| {
            if segment == "id" {
                "ID".to_string()
            } else {
                to_title_case(segment)
            }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "order_items" -> "OrderItems")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Check that a name is a plain identifier: letters, digits and underscores,
/// not starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
