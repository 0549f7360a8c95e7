//! Find references implementation.

use rustc_hash::FxHashSet;

use crate::base::FileId;
use crate::hir::{DefinitionIndex, DefinitionSymbol, SymbolKind};
use crate::ide::cursor;
use crate::parser::AstNode;
use crate::syntax::SyntaxFile;

/// Result of a find-references request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceResult {
    /// All references found.
    pub references: Vec<Reference>,
    /// Include the definition in the results.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            references: Vec::new(),
            include_declaration: false,
        }
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// A reference to a defined command or environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// The file containing the reference.
    pub file: FileId,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    /// Whether this is the definition (vs a usage).
    pub is_definition: bool,
}

impl Reference {
    /// Create from a definition symbol, pointing at its name span.
    pub fn from_definition(symbol: &DefinitionSymbol) -> Self {
        Self {
            file: symbol.file,
            start_line: symbol.name_start_line,
            start_col: symbol.name_start_col,
            end_line: symbol.name_end_line,
            end_col: symbol.name_end_col,
            is_definition: true,
        }
    }
}

/// Find all references to the command or environment at the given position.
///
/// Usages are located by scanning the syntax trees in `files`; the index
/// supplies the definition sites so they can be separated from plain usages.
pub fn find_references(
    index: &DefinitionIndex,
    files: &[(FileId, &SyntaxFile)],
    file: FileId,
    line: u32,
    col: u32,
    include_declaration: bool,
) -> ReferenceResult {
    let Some((_, syntax_file)) = files.iter().find(|(id, _)| *id == file) else {
        return ReferenceResult::empty();
    };

    if let Some(command) = cursor::command_at(syntax_file, line, col) {
        return references_to_command(index, files, &command, include_declaration);
    }

    if let Some(word) = cursor::word_at(syntax_file, line, col) {
        let is_environment = index.definitions_of(&word).into_iter().any(|symbol| {
            matches!(
                symbol.kind,
                SymbolKind::EnvironmentDefinition | SymbolKind::EnvironmentRedefinition
            )
        });
        if is_environment {
            return references_to_environment(index, files, &word, include_declaration);
        }
    }

    ReferenceResult::empty()
}

fn references_to_command(
    index: &DefinitionIndex,
    files: &[(FileId, &SyntaxFile)],
    name: &str,
    include_declaration: bool,
) -> ReferenceResult {
    let definitions: Vec<&DefinitionSymbol> = index
        .definitions_of(name)
        .into_iter()
        .filter(|symbol| symbol.kind.is_definition())
        .collect();

    // Name spans of the definitions themselves; the tree scan below must not
    // report these as plain usages.
    let declaration_sites: FxHashSet<(FileId, u32, u32)> = definitions
        .iter()
        .map(|symbol| (symbol.file, symbol.name_start_line, symbol.name_start_col))
        .collect();

    let mut references = Vec::new();
    if include_declaration {
        references.extend(definitions.iter().map(|symbol| Reference::from_definition(symbol)));
    }

    for (file, syntax_file) in files {
        let Some(source_file) = syntax_file.source_file() else {
            continue;
        };
        let line_index = syntax_file.line_index();
        for command in source_file.commands() {
            if command.name().as_deref() != Some(name) {
                continue;
            }
            let Some(token) = command.name_token() else {
                continue;
            };
            let range = token.text_range();
            let start = line_index.line_col(range.start());
            let end = line_index.line_col(range.end());
            if declaration_sites.contains(&(*file, start.line, start.col)) {
                continue;
            }
            references.push(Reference {
                file: *file,
                start_line: start.line,
                start_col: start.col,
                end_line: end.line,
                end_col: end.col,
                is_definition: false,
            });
        }
    }

    ReferenceResult {
        references,
        include_declaration,
    }
}

fn references_to_environment(
    index: &DefinitionIndex,
    files: &[(FileId, &SyntaxFile)],
    name: &str,
    include_declaration: bool,
) -> ReferenceResult {
    let mut references = Vec::new();

    if include_declaration {
        references.extend(
            index
                .definitions_of(name)
                .into_iter()
                .filter(|symbol| {
                    matches!(
                        symbol.kind,
                        SymbolKind::EnvironmentDefinition | SymbolKind::EnvironmentRedefinition
                    )
                })
                .map(Reference::from_definition),
        );
    }

    for (file, syntax_file) in files {
        let Some(source_file) = syntax_file.source_file() else {
            continue;
        };
        let line_index = syntax_file.line_index();
        for environment in source_file.environments() {
            if environment.name().as_deref() != Some(name) {
                continue;
            }
            let Some(param) = environment.begin().and_then(|b| b.required_params().next()) else {
                continue;
            };
            let range = param.syntax().text_range();
            let start = line_index.line_col(range.start());
            let end = line_index.line_col(range.end());
            references.push(Reference {
                file: *file,
                start_line: start.line,
                start_col: start.col,
                end_line: end.line,
                end_col: end.col,
                is_definition: false,
            });
        }
    }

    ReferenceResult {
        references,
        include_declaration,
    }
}
