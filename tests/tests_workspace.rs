//! Loading a workspace from disk and querying it.

use std::fs;
use std::path::Path;

use texter::ide::AnalysisHost;
use texter::project::WorkspaceLoader;

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Lay out a small thesis-like project under `dir`.
fn write_project(dir: &Path) {
    write_file(
        dir,
        "main.tex",
        "\\documentclass{article}\n\
         \\usepackage{macros}\n\
         \\begin{document}\n\
         \\vect{x}\n\
         \\input{chapters/intro}\n\
         \\end{document}\n",
    );
    write_file(dir, "chapters/intro.tex", "\\section{Intro}\nText.\n");
    write_file(dir, "chapters/results.tex", "\\section{Results}\n");
    write_file(
        dir,
        "style/macros.sty",
        "\\newcommand{\\vect}[1]{\\mathbf{#1}}\n",
    );
    write_file(dir, "notes/README.md", "not latex\n");
}

#[test]
fn test_load_skips_non_latex_files() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let mut host = AnalysisHost::new();
    WorkspaceLoader::new()
        .load_directory_into_host(dir.path(), &mut host)
        .unwrap();

    // Count what a plain directory walk finds so the two stay in sync
    let on_disk = walkdir::WalkDir::new(dir.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            name.ends_with(".tex") || name.ends_with(".sty") || name.ends_with(".cls")
        })
        .count();

    assert_eq!(host.file_count(), 4);
    assert_eq!(host.file_count(), on_disk);
}

#[test]
fn test_cross_file_queries_after_load() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let mut host = AnalysisHost::new();
    WorkspaceLoader::new()
        .load_directory_into_host(dir.path(), &mut host)
        .unwrap();

    let main_path = dir.path().join("main.tex");
    let sty_path = dir.path().join("style/macros.sty");

    let analysis = host.analysis();
    let main = analysis.get_file_id(main_path.to_str().unwrap()).unwrap();
    let sty = analysis.get_file_id(sty_path.to_str().unwrap()).unwrap();

    // \vect{x} on line 3 resolves into the style file
    let result = analysis.goto_definition(main, 3, 1);
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].file, sty);
}

#[test]
fn test_includes_resolve_against_absolute_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let mut host = AnalysisHost::new();
    WorkspaceLoader::new()
        .load_directory_into_host(dir.path(), &mut host)
        .unwrap();

    let main_path = dir.path().join("main.tex");
    let intro_path = dir.path().join("chapters/intro.tex");

    let analysis = host.analysis();
    let main = analysis.get_file_id(main_path.to_str().unwrap()).unwrap();
    let intro = analysis.get_file_id(intro_path.to_str().unwrap()).unwrap();

    // \usepackage{macros} and \input{chapters/intro} both land in the
    // workspace even though files are keyed by absolute path
    let links = analysis.document_links(main);
    assert_eq!(links.len(), 2);
    assert!(links.iter().any(|l| l.target_file == intro));

    assert!(analysis.diagnostics(main).is_empty());
}

#[test]
fn test_reload_single_file_after_edit() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let mut host = AnalysisHost::new();
    let loader = WorkspaceLoader::new();
    loader
        .load_directory_into_host(dir.path(), &mut host)
        .unwrap();

    assert_eq!(host.analysis().workspace_symbols(Some("half")).len(), 0);

    let sty_path = dir.path().join("style/macros.sty");
    fs::write(
        &sty_path,
        "\\newcommand{\\vect}[1]{\\mathbf{#1}}\n\\newcommand{\\half}{0.5}\n",
    )
    .unwrap();
    loader.load_file_into_host(&sty_path, &mut host).unwrap();

    assert_eq!(host.analysis().workspace_symbols(Some("half")).len(), 1);
}

#[test]
fn test_partial_load_reports_failures() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "good.tex", "\\section{Fine}\n");
    fs::write(dir.path().join("bad.tex"), [0x5c, 0xff, 0xfe]).unwrap();

    let mut host = AnalysisHost::new();
    let err = WorkspaceLoader::new()
        .load_directory_into_host(dir.path(), &mut host)
        .unwrap_err();

    assert!(err.contains("Failed to load 1 file(s)"), "got: {err}");
    assert!(err.contains("bad.tex"));
    // The readable file still made it in
    assert_eq!(host.file_count(), 1);
}
