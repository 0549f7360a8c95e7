//! Document links — clickable include and package references.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::base::FileId;
use crate::hir::DefinitionIndex;

/// A document link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    /// The span of the link in the source file.
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    /// The target file.
    pub target_file: FileId,
    /// The target position in the file.
    pub target_line: u32,
    pub target_col: u32,
    /// Tooltip text for the link.
    pub tooltip: Cow<'static, str>,
}

/// Get document links for a file.
///
/// Every include reference whose target resolves to a workspace file becomes
/// a link; targets outside the workspace (installed packages, missing files)
/// produce no link.
pub fn document_links(
    index: &DefinitionIndex,
    file: FileId,
    file_id_map: &HashMap<String, FileId>,
) -> Vec<DocumentLink> {
    let mut links = Vec::new();

    for include in index.file_includes(file) {
        if let Some((path, target_file)) =
            resolve_include(file_id_map, &include.target, &include.command)
        {
            links.push(DocumentLink {
                start_line: include.start_line,
                start_col: include.start_col,
                end_line: include.end_line,
                end_col: include.end_col,
                target_file,
                target_line: 0,
                target_col: 0,
                tooltip: Cow::Owned(format!("Go to {}", path)),
            });
        }
    }

    links
}

/// Resolve an include target against the workspace file table.
///
/// Ties between several matching paths go to the lowest `FileId`.
pub(super) fn resolve_include<'a>(
    file_id_map: &'a HashMap<String, FileId>,
    target: &str,
    command: &str,
) -> Option<(&'a str, FileId)> {
    let candidate = candidate_file_name(target, command);

    if let Some((path, id)) = file_id_map.get_key_value(candidate.as_str()) {
        return Some((path.as_str(), *id));
    }

    file_id_map
        .iter()
        .filter(|(path, _)| matches_suffix(path, &candidate))
        .min_by_key(|(_, id)| **id)
        .map(|(path, id)| (path.as_str(), *id))
}

/// The file name an include target refers to.
///
/// Extensionless targets get the extension their command implies: packages
/// load `.sty`, classes `.cls`, everything else `.tex`.
fn candidate_file_name(target: &str, command: &str) -> String {
    let last_segment = target.rsplit('/').next().unwrap_or(target);
    if last_segment.contains('.') {
        return target.to_string();
    }

    let extension = match command {
        "\\usepackage" | "\\RequirePackage" => ".sty",
        "\\documentclass" => ".cls",
        _ => ".tex",
    };
    format!("{}{}", target, extension)
}

fn matches_suffix(path: &str, candidate: &str) -> bool {
    path.strip_suffix(candidate)
        .is_some_and(|prefix| prefix.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::extract_definitions;
    use crate::syntax::{FileExtension, SyntaxFile};

    fn setup(source: &str, paths: &[&str]) -> (DefinitionIndex, HashMap<String, FileId>) {
        let file = FileId::new(0);
        let syntax_file = SyntaxFile::new(source, FileExtension::Tex);
        let mut index = DefinitionIndex::new();
        index.add_extraction(file, extract_definitions(file, &syntax_file));

        let mut file_id_map = HashMap::new();
        for (i, path) in paths.iter().enumerate() {
            file_id_map.insert(path.to_string(), FileId::new(i as u32));
        }
        (index, file_id_map)
    }

    #[test]
    fn test_input_link_resolves() {
        let (index, map) = setup(
            "\\input{chapters/intro}\n",
            &["main.tex", "chapters/intro.tex"],
        );

        let links = document_links(&index, FileId::new(0), &map);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target_file, FileId::new(1));
        assert_eq!(links[0].start_line, 0);
        assert_eq!(links[0].tooltip, "Go to chapters/intro.tex");
    }

    #[test]
    fn test_local_package_link() {
        let (index, map) = setup(
            "\\usepackage{mymacros}\n",
            &["main.tex", "mymacros.sty"],
        );

        let links = document_links(&index, FileId::new(0), &map);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target_file, FileId::new(1));
    }

    #[test]
    fn test_installed_package_produces_no_link() {
        let (index, map) = setup("\\usepackage{amsmath}\n", &["main.tex"]);

        assert!(document_links(&index, FileId::new(0), &map).is_empty());
    }

    #[test]
    fn test_explicit_extension_kept() {
        let (index, map) = setup(
            "\\input{preamble.def}\n",
            &["main.tex", "preamble.def"],
        );

        let links = document_links(&index, FileId::new(0), &map);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_suffix_match_requires_separator() {
        let (index, map) = setup(
            "\\include{intro}\n",
            &["main.tex", "badintro.tex", "chapters/intro.tex"],
        );

        let links = document_links(&index, FileId::new(0), &map);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target_file, FileId::new(2));
    }

    #[test]
    fn test_documentclass_resolves_to_cls() {
        let (index, map) = setup(
            "\\documentclass{myclass}\n",
            &["main.tex", "myclass.cls"],
        );

        let links = document_links(&index, FileId::new(0), &map);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target_file, FileId::new(1));
    }

    #[test]
    fn test_comma_separated_packages() {
        let (index, map) = setup(
            "\\usepackage{alpha,beta}\n",
            &["main.tex", "alpha.sty", "beta.sty"],
        );

        let links = document_links(&index, FileId::new(0), &map);
        assert_eq!(links.len(), 2);
    }
}
