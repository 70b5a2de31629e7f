//! Template file discovery.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Recognised template file extensions
pub const TEMPLATE_EXTENSIONS: [&str; 2] = ["tmpl", "hbs"];

pub fn is_template_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

/// List the template files of a directory, sorted by file name.
///
/// Subdirectories are not searched.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    if dir.as_os_str().is_empty() {
        return Err(Error::configuration("template directory is not set"));
    }
    if !dir.exists() {
        return Err(Error::configuration(format!(
            "template directory '{}' does not exist",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(Error::configuration(format!(
            "template path '{}' is not a directory",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(|e| {
            Error::configuration(format!(
                "failed to read template directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

    if entries.is_empty() {
        return Err(Error::configuration(format!(
            "template directory '{}' is empty",
            dir.display()
        )));
    }

    let mut templates: Vec<PathBuf> = entries
        .into_iter()
        .filter(|path| is_template_file(path))
        .collect();

    if templates.is_empty() {
        return Err(Error::configuration(format!(
            "no template files (*.tmpl, *.hbs) found in '{}'",
            dir.display()
        )));
    }

    templates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(templates)
}
