//! Data loading and validation utilities.

use std::fs;
use std::path::{Path, PathBuf};

use ogame_core::catalog::Catalog;
use ogame_core::config::parse_ron;
use ogame_core::error::GameError;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A file or directory could not be read.
    #[error("IO error reading '{path}': {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The formula engine rejected the input.
    #[error(transparent)]
    Game(#[from] GameError),

    /// A command-line argument could not be understood.
    #[error("Invalid argument '{0}'")]
    InvalidArgument(String),
}

/// Result type alias using [`ToolError`].
pub type Result<T> = std::result::Result<T, ToolError>;

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize a RON file.
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read(path)?;
    Ok(parse_ron(&text, &path.display().to_string())?)
}

/// Load a catalog file, or the built-in catalog without a path.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog: Catalog = load_ron(path)?;
            tracing::debug!(path = %path.display(), entities = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::standard()),
    }
}

/// Load and check one catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or fails
/// the catalog consistency checks.
pub fn validate_catalog_file(path: &Path) -> Result<Catalog> {
    let catalog = load_catalog(Some(path))?;
    catalog.check()?;
    Ok(catalog)
}

/// Validate every RON catalog in a directory, or a single file.
///
/// Returns the number of files checked. Every failure is logged before
/// the first one is returned.
pub fn validate_data_path(path: &Path) -> Result<usize> {
    if path.is_file() {
        validate_catalog_file(path)?;
        return Ok(1);
    }

    let entries = fs::read_dir(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ToolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = entry.path();
        if file.extension().is_some_and(|ext| ext == "ron") {
            files.push(file);
        }
    }
    files.sort();

    let mut first_error = None;
    for file in &files {
        match validate_catalog_file(file) {
            Ok(catalog) => {
                tracing::info!(path = %file.display(), entities = catalog.len(), "catalog valid");
            }
            Err(e) => {
                tracing::error!(path = %file.display(), "{e}");
                first_error.get_or_insert(e);
            }
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(files.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_without_path() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), Catalog::standard().len());
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("standard.ron");
        fs::write(&catalog_path, Catalog::standard().to_ron().unwrap()).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

        assert_eq!(validate_data_path(dir.path()).unwrap(), 1);
        assert_eq!(validate_data_path(&catalog_path).unwrap(), 1);
    }

    #[test]
    fn test_validate_reports_broken_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.ron"), "(buildings: [").unwrap();

        let err = validate_data_path(dir.path()).unwrap_err();
        assert!(matches!(err, ToolError::Game(GameError::DataParseError { .. })));
    }

    #[test]
    fn test_missing_path() {
        let err = validate_data_path(Path::new("/nonexistent/ogame/data")).unwrap_err();
        assert!(matches!(err, ToolError::Io { .. }));
    }
}
