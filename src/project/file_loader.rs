//! Loading and parsing LaTeX sources from the file system.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::syntax::{FileExtension, SyntaxFile};

/// Errors that can occur while loading workspace files.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// IO error during read or directory traversal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension is not one of `.tex`, `.sty`, `.cls`.
    #[error("unsupported extension: {}", path.display())]
    UnsupportedExtension { path: PathBuf },

    /// File contents are not valid UTF-8.
    #[error("not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },
}

impl ProjectError {
    /// Create an unsupported-extension error.
    pub fn unsupported_extension(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedExtension { path: path.into() }
    }

    /// Create an invalid-UTF-8 error.
    pub fn invalid_utf8(path: impl Into<PathBuf>) -> Self {
        Self::InvalidUtf8 { path: path.into() }
    }
}

/// Check that a path carries a recognized LaTeX extension.
pub fn validate_extension(path: &Path) -> Result<FileExtension, ProjectError> {
    FileExtension::from_path(path).ok_or_else(|| ProjectError::unsupported_extension(path))
}

/// Recursively collect all `.tex`, `.sty` and `.cls` files under a directory.
///
/// The result is sorted so traversal order does not depend on the
/// file system.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    let mut paths = Vec::new();
    collect_recursive(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive(dir: &Path, results: &mut Vec<PathBuf>) -> Result<(), ProjectError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_recursive(&path, results)?;
        } else if path.is_file() && FileExtension::from_path(&path).is_some() {
            results.push(path);
        }
    }
    Ok(())
}

/// Read a file's contents as UTF-8 text.
pub fn load_file(path: &Path) -> Result<String, ProjectError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ProjectError::invalid_utf8(path))
}

/// Load a file and parse it into a [`SyntaxFile`].
pub fn load_and_parse(path: &Path) -> Result<SyntaxFile, ProjectError> {
    let extension = validate_extension(path)?;
    let content = load_file(path)?;
    Ok(SyntaxFile::new(&content, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_collect_file_paths_recursive() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "main.tex", "\\documentclass{article}");
        write_file(dir.path(), "chapters/intro.tex", "\\section{Intro}");
        write_file(dir.path(), "style/macros.sty", "\\newcommand{\\vect}[1]{v}");
        write_file(dir.path(), "notes.txt", "not latex");

        let paths = collect_file_paths(dir.path()).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| FileExtension::from_path(p).is_some()));
    }

    #[test]
    fn test_collect_file_paths_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "zeta.tex", "z");
        write_file(dir.path(), "alpha.tex", "a");

        let paths = collect_file_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["alpha.tex", "zeta.tex"]);
    }

    #[test]
    fn test_validate_extension() {
        assert_eq!(
            validate_extension(Path::new("doc.tex")).unwrap(),
            FileExtension::Tex
        );
        assert_eq!(
            validate_extension(Path::new("pkg.sty")).unwrap(),
            FileExtension::Sty
        );
        assert!(matches!(
            validate_extension(Path::new("notes.md")),
            Err(ProjectError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_load_and_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "main.tex", "\\newcommand{\\half}{0.5}");

        let file = load_and_parse(&path).unwrap();
        assert_eq!(file.extension(), FileExtension::Tex);
        assert!(file.errors().is_empty());
        assert_eq!(file.source_file().unwrap().commands().count(), 1);
    }

    #[test]
    fn test_load_file_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.tex");
        fs::write(&path, [0x5c, 0xff, 0xfe]).unwrap();

        assert!(matches!(
            load_file(&path),
            Err(ProjectError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            load_file(Path::new("/nonexistent/missing.tex")),
            Err(ProjectError::Io(_))
        ));
    }
}
