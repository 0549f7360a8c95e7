//! Static classification tables for LaTeX command names.
//!
//! Classification is data-driven: each predicate is a membership test against
//! a fixed lookup table, so the tables can be tested and extended without
//! touching the tree structure.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

/// Commands that introduce a new command or environment definition.
///
/// Original definitions only; redefining commands live in [`REDEFINITIONS`].
pub static DEFINITIONS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "\\newcommand",
        "\\let",
        "\\def",
        "\\DeclareMathOperator",
        "\\newenvironment",
    ]
    .into_iter()
    .collect()
});

/// Commands that redefine an existing command or environment.
pub static REDEFINITIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["\\renewcommand", "\\renewenvironment"].into_iter().collect());

/// Commands that define or redefine a *command* (as opposed to an environment).
pub static COMMAND_DEFINITIONS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "\\newcommand",
        "\\let",
        "\\def",
        "\\DeclareMathOperator",
        "\\renewcommand",
    ]
    .into_iter()
    .collect()
});

/// Commands that define or redefine an *environment*.
pub static ENVIRONMENT_DEFINITIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["\\newenvironment", "\\renewenvironment"].into_iter().collect());

/// Commands whose first required argument names a file.
pub static INCLUDES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "\\input",
        "\\include",
        "\\includeonly",
        "\\documentclass",
        "\\usepackage",
        "\\RequirePackage",
        "\\bibliography",
    ]
    .into_iter()
    .collect()
});

/// Definition commands that name the defined command in their first required
/// parameter rather than in the following command token.
pub static FIRST_PARAMETER_DEFINITIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["\\DeclareMathOperator", "\\newcommand"].into_iter().collect());

/// Sectioning commands mapped to their outline depth (0 = highest).
pub static SECTIONING: LazyLock<FxHashMap<&'static str, u8>> = LazyLock::new(|| {
    [
        ("\\part", 0),
        ("\\chapter", 1),
        ("\\section", 2),
        ("\\subsection", 3),
        ("\\subsubsection", 4),
        ("\\paragraph", 5),
        ("\\subparagraph", 6),
    ]
    .into_iter()
    .collect()
});

/// True iff `name` introduces an original definition.
pub fn is_definition(name: &str) -> bool {
    DEFINITIONS.contains(name)
}

/// True iff `name` redefines an existing command or environment.
pub fn is_redefinition(name: &str) -> bool {
    REDEFINITIONS.contains(name)
}

/// True iff `name` is a definition or a redefinition.
pub fn is_definition_or_redefinition(name: &str) -> bool {
    DEFINITIONS.contains(name) || REDEFINITIONS.contains(name)
}

/// True iff `name` defines or redefines a command.
pub fn is_command_definition(name: &str) -> bool {
    COMMAND_DEFINITIONS.contains(name)
}

/// True iff `name` defines or redefines an environment.
pub fn is_environment_definition(name: &str) -> bool {
    ENVIRONMENT_DEFINITIONS.contains(name)
}

/// True iff `name` takes a file name as its first required argument.
pub fn is_include_command(name: &str) -> bool {
    INCLUDES.contains(name)
}

/// True iff the defined name of `name` is read from its first required
/// parameter (`\newcommand{\foo}…`) rather than from the next command token
/// (`\let\foo…`).
pub fn defines_in_first_parameter(name: &str) -> bool {
    FIRST_PARAMETER_DEFINITIONS.contains(name)
}

/// Outline depth of a sectioning command, if `name` is one.
pub fn sectioning_level(name: &str) -> Option<u8> {
    SECTIONING.get(name).copied()
}

/// Look up a built-in command by its name (including the backslash).
pub fn builtin_command(name: &str) -> Option<&'static BuiltinCommand> {
    BUILT_IN_COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// A built-in command offered by completion even when nothing defines it
/// in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinCommand {
    /// Command name including the backslash.
    pub name: &'static str,
    /// One-line description shown as completion detail.
    pub detail: &'static str,
}

/// Common kernel and standard-class commands for completion.
pub static BUILT_IN_COMMANDS: &[BuiltinCommand] = &[
    BuiltinCommand { name: "\\begin", detail: "Open an environment" },
    BuiltinCommand { name: "\\end", detail: "Close an environment" },
    BuiltinCommand { name: "\\newcommand", detail: "Define a new command" },
    BuiltinCommand { name: "\\renewcommand", detail: "Redefine a command" },
    BuiltinCommand { name: "\\newenvironment", detail: "Define a new environment" },
    BuiltinCommand { name: "\\renewenvironment", detail: "Redefine an environment" },
    BuiltinCommand { name: "\\def", detail: "TeX primitive definition" },
    BuiltinCommand { name: "\\let", detail: "Copy a command's meaning" },
    BuiltinCommand { name: "\\DeclareMathOperator", detail: "Define a math operator" },
    BuiltinCommand { name: "\\documentclass", detail: "Select the document class" },
    BuiltinCommand { name: "\\usepackage", detail: "Load a package" },
    BuiltinCommand { name: "\\RequirePackage", detail: "Load a package (class/package code)" },
    BuiltinCommand { name: "\\input", detail: "Read another source file" },
    BuiltinCommand { name: "\\include", detail: "Include a chapter file" },
    BuiltinCommand { name: "\\includeonly", detail: "Restrict included files" },
    BuiltinCommand { name: "\\bibliography", detail: "Name the bibliography database" },
    BuiltinCommand { name: "\\part", detail: "Part heading" },
    BuiltinCommand { name: "\\chapter", detail: "Chapter heading" },
    BuiltinCommand { name: "\\section", detail: "Section heading" },
    BuiltinCommand { name: "\\subsection", detail: "Subsection heading" },
    BuiltinCommand { name: "\\subsubsection", detail: "Subsubsection heading" },
    BuiltinCommand { name: "\\paragraph", detail: "Paragraph heading" },
    BuiltinCommand { name: "\\subparagraph", detail: "Subparagraph heading" },
    BuiltinCommand { name: "\\label", detail: "Attach a label to the current structure" },
    BuiltinCommand { name: "\\ref", detail: "Reference a label" },
    BuiltinCommand { name: "\\pageref", detail: "Reference a label's page" },
    BuiltinCommand { name: "\\cite", detail: "Cite a bibliography entry" },
    BuiltinCommand { name: "\\caption", detail: "Caption for a float" },
    BuiltinCommand { name: "\\textbf", detail: "Bold text" },
    BuiltinCommand { name: "\\textit", detail: "Italic text" },
    BuiltinCommand { name: "\\texttt", detail: "Monospaced text" },
    BuiltinCommand { name: "\\emph", detail: "Emphasized text" },
    BuiltinCommand { name: "\\underline", detail: "Underlined text" },
    BuiltinCommand { name: "\\footnote", detail: "Footnote" },
    BuiltinCommand { name: "\\item", detail: "List item" },
    BuiltinCommand { name: "\\maketitle", detail: "Typeset the title block" },
    BuiltinCommand { name: "\\title", detail: "Document title" },
    BuiltinCommand { name: "\\author", detail: "Document author" },
    BuiltinCommand { name: "\\date", detail: "Document date" },
    BuiltinCommand { name: "\\tableofcontents", detail: "Table of contents" },
    BuiltinCommand { name: "\\frac", detail: "Fraction (math)" },
    BuiltinCommand { name: "\\sqrt", detail: "Square root (math)" },
    BuiltinCommand { name: "\\sum", detail: "Summation sign (math)" },
    BuiltinCommand { name: "\\int", detail: "Integral sign (math)" },
    BuiltinCommand { name: "\\alpha", detail: "Greek letter alpha (math)" },
    BuiltinCommand { name: "\\beta", detail: "Greek letter beta (math)" },
    BuiltinCommand { name: "\\gamma", detail: "Greek letter gamma (math)" },
    BuiltinCommand { name: "\\mathbb", detail: "Blackboard bold (math)" },
    BuiltinCommand { name: "\\mathcal", detail: "Calligraphic letters (math)" },
    BuiltinCommand { name: "\\left", detail: "Sized opening delimiter (math)" },
    BuiltinCommand { name: "\\right", detail: "Sized closing delimiter (math)" },
    BuiltinCommand { name: "\\hspace", detail: "Horizontal space" },
    BuiltinCommand { name: "\\vspace", detail: "Vertical space" },
    BuiltinCommand { name: "\\newpage", detail: "Page break" },
    BuiltinCommand { name: "\\clearpage", detail: "Page break, flushing floats" },
    BuiltinCommand { name: "\\centering", detail: "Center the rest of the group" },
    BuiltinCommand { name: "\\includegraphics", detail: "Insert an image (graphicx)" },
];

/// Common environment names for completion after `\begin{`.
pub static BUILT_IN_ENVIRONMENTS: &[&str] = &[
    "document",
    "abstract",
    "itemize",
    "enumerate",
    "description",
    "figure",
    "figure*",
    "table",
    "table*",
    "tabular",
    "equation",
    "equation*",
    "align",
    "align*",
    "center",
    "verbatim",
    "quote",
    "minipage",
    "thebibliography",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_membership() {
        assert!(is_definition("\\newcommand"));
        assert!(is_definition("\\let"));
        assert!(is_definition("\\def"));
        assert!(is_definition("\\DeclareMathOperator"));
        assert!(is_definition("\\newenvironment"));
        assert!(!is_definition("\\renewcommand"));
        assert!(!is_definition("\\section"));
    }

    #[test]
    fn test_redefinition_membership() {
        assert!(is_redefinition("\\renewcommand"));
        assert!(is_redefinition("\\renewenvironment"));
        assert!(!is_redefinition("\\newcommand"));
    }

    #[test]
    fn test_definition_or_redefinition_is_the_union() {
        for name in DEFINITIONS.iter() {
            assert!(is_definition_or_redefinition(name), "{name} should be covered");
        }
        for name in REDEFINITIONS.iter() {
            assert!(is_definition_or_redefinition(name), "{name} should be covered");
        }
        assert!(!is_definition_or_redefinition("\\textbf"));
    }

    #[test]
    fn test_command_vs_environment_definitions() {
        assert!(is_command_definition("\\newcommand"));
        assert!(is_command_definition("\\renewcommand"));
        assert!(!is_command_definition("\\newenvironment"));
        assert!(is_environment_definition("\\newenvironment"));
        assert!(is_environment_definition("\\renewenvironment"));
        assert!(!is_environment_definition("\\newcommand"));
    }

    #[test]
    fn test_include_membership() {
        assert!(is_include_command("\\input"));
        assert!(is_include_command("\\usepackage"));
        assert!(is_include_command("\\bibliography"));
        assert!(!is_include_command("\\textbf"));
    }

    #[test]
    fn test_first_parameter_definitions() {
        assert!(defines_in_first_parameter("\\newcommand"));
        assert!(defines_in_first_parameter("\\DeclareMathOperator"));
        assert!(!defines_in_first_parameter("\\let"));
        assert!(!defines_in_first_parameter("\\def"));
    }

    #[test]
    fn test_sectioning_levels() {
        assert_eq!(sectioning_level("\\part"), Some(0));
        assert_eq!(sectioning_level("\\section"), Some(2));
        assert_eq!(sectioning_level("\\subparagraph"), Some(6));
        assert_eq!(sectioning_level("\\textbf"), None);
    }

    #[test]
    fn test_built_in_commands_are_backslash_prefixed() {
        for cmd in BUILT_IN_COMMANDS {
            assert!(cmd.name.starts_with('\\'), "{} lacks a backslash", cmd.name);
            assert!(!cmd.detail.is_empty());
        }
    }
}
