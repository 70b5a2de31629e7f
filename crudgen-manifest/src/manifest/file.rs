use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A crudgen.toml file with both raw content and parsed manifest.
pub struct CrudgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CrudgenToml {
    /// Open and parse a crudgen.toml file.
    ///
    /// Relative project paths are resolved against the manifest's directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut manifest = Manifest::from_str_with_filename(&content, &filename)?;
        manifest.resolve_paths(base_dir(&path));

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Consume the file and return the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

fn base_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
