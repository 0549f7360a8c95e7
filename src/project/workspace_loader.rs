//! Bulk loading of a workspace directory into an [`AnalysisHost`].

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;

use super::file_loader::{self, ProjectError};
use crate::ide::AnalysisHost;

/// Loads workspace files on demand.
pub struct WorkspaceLoader;

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads all LaTeX files from a directory into an [`AnalysisHost`].
    ///
    /// Files are read and parsed in parallel; the host is only mutated
    /// from the calling thread.
    pub fn load_directory_into_host<P: Into<PathBuf>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<(), String> {
        let path = path.into();
        if !path.exists() || !path.is_dir() {
            return Err(format!("Directory not found: {}", path.display()));
        }

        let paths = file_loader::collect_file_paths(&path).map_err(|e| e.to_string())?;

        let parsed: Vec<(PathBuf, Result<_, ProjectError>)> = paths
            .into_par_iter()
            .map(|path| {
                let result = file_loader::load_and_parse(&path);
                (path, result)
            })
            .collect();

        let mut loaded = 0usize;
        let mut errors = Vec::new();
        for (path, result) in parsed {
            match result {
                Ok(file) => {
                    host.set_file(path, file);
                    loaded += 1;
                }
                Err(e) => {
                    errors.push(format!("{}: {}", path.display(), e));
                }
            }
        }

        debug!("loaded {} files from {}", loaded, path.display());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ))
        }
    }

    /// Loads a single file into an [`AnalysisHost`].
    pub fn load_file_into_host<P: Into<PathBuf>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<(), String> {
        let path = path.into();
        let file = file_loader::load_and_parse(&path).map_err(|e| e.to_string())?;
        host.set_file(path, file);
        Ok(())
    }
}

impl Default for WorkspaceLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "main.tex",
            "\\documentclass{article}\n\\usepackage{macros}\n\\vect{x}\n",
        );
        write_file(
            dir.path(),
            "macros.sty",
            "\\newcommand{\\vect}[1]{\\mathbf{#1}}\n",
        );

        let loader = WorkspaceLoader::new();
        let mut host = AnalysisHost::new();
        loader
            .load_directory_into_host(dir.path(), &mut host)
            .unwrap();

        assert_eq!(host.file_count(), 2);
        let analysis = host.analysis();
        assert!(!analysis.index().definitions_of("\\vect").is_empty());
    }

    #[test]
    fn test_load_directory_recurses() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "main.tex", "\\input{chapters/intro}\n");
        write_file(dir.path(), "chapters/intro.tex", "\\section{Intro}\n");

        let loader = WorkspaceLoader::new();
        let mut host = AnalysisHost::new();
        loader
            .load_directory_into_host(dir.path(), &mut host)
            .unwrap();

        assert_eq!(host.file_count(), 2);
    }

    #[test]
    fn test_missing_directory() {
        let loader = WorkspaceLoader::new();
        let mut host = AnalysisHost::new();
        let err = loader
            .load_directory_into_host("/nonexistent/workspace", &mut host)
            .unwrap_err();
        assert!(err.starts_with("Directory not found"));
    }

    #[test]
    fn test_files_with_parse_errors_still_load() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "broken.tex", "\\begin{figure}\nno end\n");

        let loader = WorkspaceLoader::new();
        let mut host = AnalysisHost::new();
        loader
            .load_directory_into_host(dir.path(), &mut host)
            .unwrap();

        assert_eq!(host.file_count(), 1);
    }

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "defs.tex", "\\newcommand{\\half}{0.5}\n");

        let loader = WorkspaceLoader::new();
        let mut host = AnalysisHost::new();
        loader
            .load_file_into_host(dir.path().join("defs.tex"), &mut host)
            .unwrap();

        assert_eq!(host.file_count(), 1);
        let analysis = host.analysis();
        assert!(!analysis.index().definitions_of("\\half").is_empty());
    }
}
