use super::{ExtractError, SourceLocation};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// A parsed Go source file.
#[derive(Debug)]
pub struct GoFile {
    path: PathBuf,
    source: String,
    package_name: String,
    tree: Tree,
}

/// The files of a single directory that declare the same package.
#[derive(Debug)]
pub struct GoPackage {
    pub name: String,
    pub dir: PathBuf,
    pub files: Vec<GoFile>,
}

impl GoPackage {
    /// Packages named `*_test` hold external tests, which never declare production metrics.
    #[must_use]
    pub fn is_test_only(&self) -> bool {
        self.name.ends_with("_test")
    }
}

/// Create a parser configured for Go.
pub fn go_parser() -> Result<Parser, ExtractError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
    Ok(parser)
}

impl GoFile {
    /// Parse `source`, rejecting any file that contains a syntax error.
    ///
    /// Tree-sitter recovers from errors, so the tree is inspected for error and
    /// missing nodes explicitly.
    pub fn parse(parser: &mut Parser, path: impl Into<PathBuf>, source: String) -> Result<Self, ExtractError> {
        let path = path.into();

        let Some(tree) = parser.parse(&source, None) else {
            return Err(ExtractError::ParseFailure {
                location: SourceLocation::new(path, 1, 1),
                reason: "parser produced no syntax tree".to_string(),
            });
        };

        let root = tree.root_node();
        if root.has_error() {
            let (location, reason) = match first_error(root) {
                Some(node) if node.is_missing() => (SourceLocation::of(&path, node), format!("missing {}", node.kind())),
                Some(node) => (SourceLocation::of(&path, node), "syntax error".to_string()),
                None => (SourceLocation::new(&path, 1, 1), "syntax error".to_string()),
            };
            return Err(ExtractError::ParseFailure { location, reason });
        }

        let package_name = named_children(root)
            .into_iter()
            .find(|node| node.kind() == "package_clause")
            .and_then(|clause| named_children(clause).into_iter().next())
            .map(|ident| node_text(&source, ident).to_string());

        let Some(package_name) = package_name else {
            return Err(ExtractError::ParseFailure {
                location: SourceLocation::new(path, 1, 1),
                reason: "missing package clause".to_string(),
            });
        };

        Ok(Self {
            path,
            source,
            package_name,
            tree,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &str {
        node_text(&self.source, node)
    }

    #[must_use]
    pub fn location(&self, node: Node<'_>) -> SourceLocation {
        SourceLocation::of(&self.path, node)
    }
}

fn node_text<'s>(source: &'s str, node: Node<'_>) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Named children of `node`, with comments filtered out.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).filter(|child| child.kind() != "comment").collect()
}

/// Depth-first search for the first error or missing node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}
