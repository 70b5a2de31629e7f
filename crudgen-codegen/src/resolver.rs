//! Output location resolution.
//!
//! A template's rendered `#path` directive, when non-empty, is joined under
//! the project root; otherwise the category's fallback directory is used.
//! A rendered `#fileName` starting with `/` or `\` contributes its leading
//! segments as extra subdirectories. Without a file name directive the
//! naming convention of the category applies.

use std::path::PathBuf;

use crate::{Error, GeneratorConfig, Result, TemplateUnit, naming::NamingConvention};

/// A resolved output directory and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub dir: PathBuf,
    pub file_name: String,
}

impl OutputLocation {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Resolves where each template's output is written.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a GeneratorConfig,
    naming: &'a NamingConvention,
    extension: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        naming: &'a NamingConvention,
        extension: &'a str,
    ) -> Self {
        Self {
            config,
            naming,
            extension,
        }
    }

    /// Resolve the location from the rendered directives of a template.
    pub fn resolve(
        &self,
        unit: &TemplateUnit,
        entity: &str,
        rendered_path: Option<&str>,
        rendered_file_name: Option<&str>,
    ) -> Result<OutputLocation> {
        let mut dir = match non_empty(rendered_path) {
            Some(path) => segments(path)
                .fold(self.config.project_root.clone(), |dir, segment| dir.join(segment)),
            None => self.config.fallback_dir(unit.category()),
        };

        let file_name = match non_empty(rendered_file_name) {
            Some(name) if name.starts_with(is_separator) => {
                let (subdirs, file_name) = name.rsplit_once(is_separator).unwrap_or(("", name));
                for part in segments(subdirs) {
                    dir.push(part);
                }
                file_name.to_string()
            }
            Some(name) => name.to_string(),
            None => {
                let fallback = self.naming.fallback_name(
                    unit.category(),
                    entity,
                    unit.name(),
                    self.extension,
                );
                if let Some(subdir) = fallback.subdir {
                    dir.push(subdir);
                }
                fallback.file_name
            }
        };

        validate_file_name(unit, &file_name)?;
        Ok(OutputLocation { dir, file_name })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Path segments with separators normalised and empty or `.` parts dropped.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(is_separator)
        .filter(|segment| !segment.is_empty() && *segment != ".")
}

fn validate_file_name(unit: &TemplateUnit, file_name: &str) -> Result<()> {
    let last = file_name.rsplit(is_separator).next().unwrap_or_default();
    if last.is_empty() || last == "." || last == ".." {
        return Err(Error::path_resolution(
            unit.name(),
            format!("'{}' does not name a file", file_name),
        ));
    }
    Ok(())
}
