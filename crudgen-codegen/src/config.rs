//! Generator configuration.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crudgen_core::{Category, Overwrite};
use crudgen_manifest::Manifest;

/// Configuration consumed by [`Generator`](crate::Generator).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory of the target project
    pub project_root: PathBuf,
    /// Migration file containing the table definitions
    pub migration_file: PathBuf,
    /// Directory containing the template files
    pub template_dir: PathBuf,
    /// Fallback directories for templates without a path directive
    pub output_dirs: OutputDirs,
    /// Categories whose templates are not rendered
    pub skip: SkipFlags,
    /// How to treat files that already exist
    pub overwrite: Overwrite,
    /// Reject references to unknown context fields
    pub strict: bool,
}

impl GeneratorConfig {
    pub fn new(
        project_root: impl Into<PathBuf>,
        migration_file: impl Into<PathBuf>,
        template_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            migration_file: migration_file.into(),
            template_dir: template_dir.into(),
            output_dirs: OutputDirs::default(),
            skip: SkipFlags::default(),
            overwrite: Overwrite::Always,
            strict: false,
        }
    }

    /// Skip every template of the given category.
    pub fn skip(mut self, category: Category) -> Self {
        self.skip.insert(category);
        self
    }

    /// Override the fallback directory of a category.
    pub fn output_dir(mut self, category: Category, dir: impl Into<PathBuf>) -> Self {
        self.output_dirs.set(category, dir);
        self
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Fallback directory for a category, resolved under the project root.
    ///
    /// Absolute directories are used as-is.
    pub fn fallback_dir(&self, category: Category) -> PathBuf {
        match self.output_dirs.dir(category) {
            Some(dir) => self.project_root.join(dir),
            None => self.project_root.clone(),
        }
    }
}

impl From<&Manifest> for GeneratorConfig {
    fn from(manifest: &Manifest) -> Self {
        let project = &manifest.project;
        let mut config = GeneratorConfig::new(
            &project.root,
            &project.migration,
            &project.templates,
        )
        .overwrite(if manifest.generate.overwrite {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        })
        .strict(manifest.generate.strict);

        for category in Category::NAMED {
            if let Some(dir) = manifest.output.dir(category) {
                config.output_dirs.set(category, dir);
            }
            if manifest.skip.is_skipped(category) {
                config.skip.insert(category);
            }
        }

        config
    }
}

/// Fallback output directory per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub entity: PathBuf,
    pub repository: PathBuf,
    pub usecase: PathBuf,
    pub handler: PathBuf,
    pub payload: PathBuf,
}

impl Default for OutputDirs {
    fn default() -> Self {
        Self {
            entity: PathBuf::from("core/entity"),
            repository: PathBuf::from("repository"),
            usecase: PathBuf::from("usecase"),
            handler: PathBuf::from("handler"),
            payload: PathBuf::from("payload"),
        }
    }
}

impl OutputDirs {
    /// The directory of a named category; `None` for [`Category::Other`].
    pub fn dir(&self, category: Category) -> Option<&Path> {
        match category {
            Category::Entity => Some(self.entity.as_path()),
            Category::Repository => Some(self.repository.as_path()),
            Category::Usecase => Some(self.usecase.as_path()),
            Category::Handler => Some(self.handler.as_path()),
            Category::Payload => Some(self.payload.as_path()),
            Category::Other => None,
        }
    }

    /// Set the directory of a named category. Ignored for [`Category::Other`].
    pub fn set(&mut self, category: Category, dir: impl Into<PathBuf>) {
        let slot = match category {
            Category::Entity => &mut self.entity,
            Category::Repository => &mut self.repository,
            Category::Usecase => &mut self.usecase,
            Category::Handler => &mut self.handler,
            Category::Payload => &mut self.payload,
            Category::Other => return,
        };
        *slot = dir.into();
    }
}

/// Set of categories to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipFlags(BTreeSet<Category>);

impl SkipFlags {
    /// Mark a category as skipped. [`Category::Other`] cannot be skipped.
    pub fn insert(&mut self, category: Category) {
        if category != Category::Other {
            self.0.insert(category);
        }
    }

    pub fn is_skipped(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Category> for SkipFlags {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut flags = SkipFlags::default();
        for category in iter {
            flags.insert(category);
        }
        flags
    }
}
