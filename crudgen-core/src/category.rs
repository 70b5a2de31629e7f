//! Functional grouping of templates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The functional category of a template.
///
/// The category is inferred once from the template's file name prefix and
/// drives both the skip flags and the fallback output location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entity,
    Repository,
    Usecase,
    Handler,
    Payload,
    /// Template name matches none of the known prefixes.
    Other,
}

impl Category {
    /// Categories that can be targeted by skip flags and output directories.
    pub const NAMED: [Category; 5] = [
        Category::Entity,
        Category::Repository,
        Category::Usecase,
        Category::Handler,
        Category::Payload,
    ];

    /// Infer the category from a template name by prefix.
    pub fn from_template_name(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|category| name.starts_with(category.as_str()))
            .unwrap_or(Category::Other)
    }

    /// The prefix / config key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entity => "entity",
            Category::Repository => "repository",
            Category::Usecase => "usecase",
            Category::Handler => "handler",
            Category::Payload => "payload",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
