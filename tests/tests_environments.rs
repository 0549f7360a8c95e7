//! Environment parsing, naming and definition extraction.

use texter::base::FileId;
use texter::hir::{SymbolKind, extract_definitions};
use texter::parser::{AstNode, Environment, SourceFile, parse};
use texter::syntax::{FileExtension, SyntaxFile};

fn environments_of(input: &str) -> Vec<Environment> {
    let parsed = parse(input);
    let file = SourceFile::cast(parsed.syntax()).expect("root should cast to SourceFile");
    file.environments().collect()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_environment_name_comes_from_begin() {
    let envs = environments_of("\\begin{figure}\n\\caption{x}\n\\end{figure}\n");
    assert_eq!(envs.len(), 1);
    assert_eq!(envs[0].name().as_deref(), Some("figure"));
    assert!(envs[0].begin().is_some());
    assert!(envs[0].end().is_some());
}

#[test]
fn test_nested_environments_in_document_order() {
    let source = "\\begin{figure}\n\\begin{center}\nx\n\\end{center}\n\\end{figure}\n";
    let envs = environments_of(source);
    let names: Vec<_> = envs.iter().filter_map(|e| e.name()).collect();
    assert_eq!(names, vec!["figure", "center"]);
}

#[test]
fn test_begin_with_options_still_names_the_environment() {
    let source = "\\begin{minipage}[t]{0.5\\textwidth}\nx\n\\end{minipage}\n";
    let envs = environments_of(source);
    assert_eq!(envs[0].name().as_deref(), Some("minipage"));

    let begin = envs[0].begin().unwrap();
    assert_eq!(begin.optional_params().count(), 1);
    // {minipage} and {0.5\textwidth}
    assert_eq!(begin.required_params().count(), 2);
}

#[test]
fn test_begin_and_end_are_not_plain_commands() {
    let source = "\\begin{figure}\\caption{x}\\end{figure}";
    let parsed = parse(source);
    let file = SourceFile::cast(parsed.syntax()).unwrap();

    let names: Vec<_> = file.commands().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["\\caption"]);
}

#[test]
fn test_environment_contents() {
    let source = "\\begin{itemize}\n\\item a\n\\item b\n\\end{itemize}\n";
    let envs = environments_of(source);
    let item_count = envs[0]
        .contents()
        .filter_map(|c| c.command())
        .filter(|c| c.name().as_deref() == Some("\\item"))
        .count();
    assert_eq!(item_count, 2);
}

#[test]
fn test_unclosed_environment_reports_an_error() {
    let parsed = parse("\\begin{figure}\nno end here\n");
    assert!(!parsed.ok());
    assert!(!parsed.errors.is_empty());
}

#[test]
fn test_mismatched_end_reports_an_error() {
    let parsed = parse("\\begin{figure}\nx\n\\end{table}\n");
    assert!(!parsed.ok());
}

// ============================================================================
// Definition extraction
// ============================================================================

#[test]
fn test_newenvironment_extracts_a_bare_name() {
    let source = "\\newenvironment{proofsketch}{\\par}{\\hfill$\\square$}\n";
    let syntax_file = SyntaxFile::new(source, FileExtension::Tex);
    let result = extract_definitions(FileId::new(0), &syntax_file);

    let symbol = result
        .symbols
        .iter()
        .find(|s| s.kind == SymbolKind::EnvironmentDefinition)
        .expect("environment definition extracted");
    assert_eq!(symbol.name.as_ref(), "proofsketch");
    assert_eq!(symbol.defined_by.as_ref(), "\\newenvironment");
}

#[test]
fn test_renewenvironment_is_a_redefinition() {
    let source = "\\renewenvironment{quote}{\\small}{\\par}\n";
    let syntax_file = SyntaxFile::new(source, FileExtension::Tex);
    let result = extract_definitions(FileId::new(0), &syntax_file);

    assert_eq!(result.symbols.len(), 1);
    assert_eq!(
        result.symbols[0].kind,
        SymbolKind::EnvironmentRedefinition
    );
    assert_eq!(result.symbols[0].name.as_ref(), "quote");
}

#[test]
fn test_environment_usage_is_not_a_definition() {
    let source = "\\begin{figure}\n\\caption{x}\n\\end{figure}\n";
    let syntax_file = SyntaxFile::new(source, FileExtension::Tex);
    let result = extract_definitions(FileId::new(0), &syntax_file);
    assert!(result.symbols.is_empty());
}

// ============================================================================
// SyntaxFile wrapper
// ============================================================================

#[test]
fn test_style_files_are_marked_class_or_style() {
    let sty = SyntaxFile::new("\\newcommand{\\x}{y}", FileExtension::Sty);
    assert!(sty.is_class_or_style());

    let tex = SyntaxFile::new("\\newcommand{\\x}{y}", FileExtension::Tex);
    assert!(!tex.is_class_or_style());
}

#[test]
fn test_syntax_file_collects_includes() {
    let source = "\\documentclass{article}\n\\usepackage{amsmath}\n\\input{body}\n";
    let file = SyntaxFile::new(source, FileExtension::Tex);
    let includes = file.extract_includes();
    assert_eq!(includes, vec!["article", "amsmath", "body"]);
}
