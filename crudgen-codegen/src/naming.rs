//! Naming conventions for generated identifiers and fallback file names.

use std::path::Path;

use crudgen_core::{Category, to_field_name};

/// Target-language naming conventions.
///
/// Defines how column names become field identifiers and how templates
/// without a file name directive are named on disk.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a column name to a field name (e.g., "user_id" -> "UserID")
    pub column_to_field: fn(&str) -> String,
    /// Transform an entity name to a file stem (e.g., "OrderItem" -> "orderitem")
    pub entity_to_file: fn(&str) -> String,
    /// Base file name of repository templates, nested under the entity directory
    pub repository_file: &'static str,
    /// Suffix appended to the file stem of usecase templates
    pub usecase_suffix: &'static str,
}

/// A fallback file location relative to the resolved output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackName {
    /// Extra directory nested under the output directory
    pub subdir: Option<String>,
    pub file_name: String,
}

impl NamingConvention {
    pub fn field_name(&self, column: &str) -> String {
        (self.column_to_field)(column)
    }

    pub fn file_stem(&self, entity: &str) -> String {
        (self.entity_to_file)(entity)
    }

    /// File name used when a template declares no file name directive.
    pub fn fallback_name(
        &self,
        category: Category,
        entity: &str,
        template_name: &str,
        extension: &str,
    ) -> FallbackName {
        let stem = self.file_stem(entity);
        let plain = |file_name: String| FallbackName {
            subdir: None,
            file_name,
        };

        match category {
            Category::Entity | Category::Handler | Category::Payload => {
                plain(format!("{}.{}", stem, extension))
            }
            Category::Repository => FallbackName {
                subdir: Some(stem),
                file_name: format!("{}.{}", self.repository_file, extension),
            },
            Category::Usecase => plain(format!("{}{}.{}", stem, self.usecase_suffix, extension)),
            Category::Other => {
                let template_stem = Path::new(template_name)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| template_name.to_string());
                plain(format!("{}.{}", template_stem, extension))
            }
        }
    }
}

fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    column_to_field: to_field_name,
    entity_to_file: to_lower,
    repository_file: "postgres",
    usecase_suffix: "_usecase",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_field_names() {
        assert_eq!(GO_NAMING.field_name("user_id"), "UserID");
        assert_eq!(GO_NAMING.field_name("created_at"), "CreatedAt");
        assert_eq!(GO_NAMING.field_name("id"), "ID");
    }

    #[test]
    fn test_fallback_names() {
        let name = |category: Category, template: &str| {
            GO_NAMING.fallback_name(category, "OrderItem", template, "go")
        };

        assert_eq!(
            name(Category::Entity, "entity.tmpl"),
            FallbackName {
                subdir: None,
                file_name: "orderitem.go".into()
            }
        );
        assert_eq!(
            name(Category::Repository, "repository.tmpl"),
            FallbackName {
                subdir: Some("orderitem".into()),
                file_name: "postgres.go".into()
            }
        );
        assert_eq!(
            name(Category::Usecase, "usecase.tmpl").file_name,
            "orderitem_usecase.go"
        );
        assert_eq!(name(Category::Handler, "handler.tmpl").file_name, "orderitem.go");
        assert_eq!(name(Category::Payload, "payload.tmpl").file_name, "orderitem.go");
        assert_eq!(name(Category::Other, "router.tmpl").file_name, "router.go");
        assert_eq!(name(Category::Other, "routes.v2.hbs").file_name, "routes.v2.go");
    }
}
