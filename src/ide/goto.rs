//! Go-to-definition for commands and environments.

use std::sync::Arc;

use crate::base::FileId;
use crate::hir::{DefinitionIndex, DefinitionSymbol, SymbolKind};
use crate::ide::cursor;
use crate::syntax::SyntaxFile;

/// A definition site a cursor position resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    pub file: FileId,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub kind: SymbolKind,
    pub name: Arc<str>,
}

impl From<&DefinitionSymbol> for GotoTarget {
    fn from(symbol: &DefinitionSymbol) -> Self {
        GotoTarget {
            file: symbol.file,
            start_line: symbol.name_start_line,
            start_col: symbol.name_start_col,
            end_line: symbol.name_end_line,
            end_col: symbol.name_end_col,
            kind: symbol.kind,
            name: Arc::clone(&symbol.name),
        }
    }
}

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GotoResult {
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    pub fn empty() -> Self {
        GotoResult::default()
    }

    pub fn single(target: GotoTarget) -> Self {
        GotoResult { targets: vec![target] }
    }

    pub fn multiple(targets: Vec<GotoTarget>) -> Self {
        GotoResult { targets }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Resolve the definition of whatever sits under the cursor.
///
/// A command usage (`\vect`) resolves to every definition of that command
/// in the index. A bare word inside `\begin{...}`/`\end{...}` resolves to
/// environment definitions of that name.
pub fn goto_definition(
    index: &DefinitionIndex,
    syntax_file: &SyntaxFile,
    line: u32,
    col: u32,
) -> GotoResult {
    if let Some(command) = cursor::command_at(syntax_file, line, col) {
        let targets: Vec<GotoTarget> = index
            .definitions_of(&command)
            .into_iter()
            .filter(|symbol| symbol.kind.is_definition())
            .map(GotoTarget::from)
            .collect();
        if !targets.is_empty() {
            return GotoResult::multiple(targets);
        }
    }

    if let Some(word) = cursor::word_at(syntax_file, line, col) {
        let targets: Vec<GotoTarget> = index
            .definitions_of(&word)
            .into_iter()
            .filter(|symbol| {
                matches!(
                    symbol.kind,
                    SymbolKind::EnvironmentDefinition | SymbolKind::EnvironmentRedefinition
                )
            })
            .map(GotoTarget::from)
            .collect();
        if !targets.is_empty() {
            return GotoResult::multiple(targets);
        }
    }

    GotoResult::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::extract_definitions;
    use crate::syntax::FileExtension;

    fn index_from(sources: &[&str]) -> (DefinitionIndex, Vec<SyntaxFile>) {
        let mut index = DefinitionIndex::new();
        let mut files = Vec::new();
        for (i, source) in sources.iter().enumerate() {
            let file = FileId::new(i as u32);
            let syntax_file = SyntaxFile::new(source, FileExtension::Tex);
            let result = extract_definitions(file, &syntax_file);
            index.add_extraction(file, result);
            files.push(syntax_file);
        }
        (index, files)
    }

    #[test]
    fn test_goto_command_definition() {
        let (index, files) = index_from(&[
            "\\newcommand{\\vect}[1]{\\mathbf{#1}}\n",
            "use \\vect{x} here\n",
        ]);

        let result = goto_definition(&index, &files[1], 0, 6);
        assert_eq!(result.targets.len(), 1);
        let target = &result.targets[0];
        assert_eq!(target.file, FileId::new(0));
        assert_eq!(&*target.name, "\\vect");
        assert_eq!(target.kind, SymbolKind::CommandDefinition);
        // Points at the name inside the braces, not the whole definition
        assert_eq!(target.start_line, 0);
        assert_eq!(target.start_col, 12);
        assert_eq!(target.end_col, 17);
    }

    #[test]
    fn test_goto_environment_definition() {
        let (index, files) = index_from(&[
            "\\newenvironment{proofsketch}{\\par}{\\hfill}\n",
            "\\begin{proofsketch}\ntext\n\\end{proofsketch}\n",
        ]);

        let result = goto_definition(&index, &files[1], 0, 10);
        assert_eq!(result.targets.len(), 1);
        assert_eq!(&*result.targets[0].name, "proofsketch");
        assert_eq!(result.targets[0].kind, SymbolKind::EnvironmentDefinition);
    }

    #[test]
    fn test_goto_multiple_definitions() {
        let (index, files) = index_from(&[
            "\\newcommand{\\eps}{\\varepsilon}\n",
            "\\renewcommand{\\eps}{\\epsilon}\n",
            "\\eps\n",
        ]);

        let result = goto_definition(&index, &files[2], 0, 1);
        assert_eq!(result.targets.len(), 2);
    }

    #[test]
    fn test_goto_unknown_command() {
        let (index, files) = index_from(&["\\undefinedthing\n"]);

        let result = goto_definition(&index, &files[0], 0, 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_sections_are_not_goto_targets() {
        let (index, files) = index_from(&[
            "\\section{Intro}\nsee Intro above\n",
        ]);

        // The word "Intro" names a section symbol, but only environment
        // definitions resolve through bare words.
        let result = goto_definition(&index, &files[0], 1, 6);
        assert!(result.is_empty());
    }
}
