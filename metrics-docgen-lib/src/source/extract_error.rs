use core::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tree_sitter::Node;

/// A 1-based position inside a Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// Location of the first character of `node`.
    #[must_use]
    pub fn of(path: &Path, node: Node<'_>) -> Self {
        let start = node.start_position();
        Self::new(path, start.row + 1, start.column + 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// Fatal problems encountered while mining metric declarations.
///
/// None of these are recoverable: documentation generated from a partially
/// understood source tree would be silently wrong.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{location}: unable to parse Go source: {reason}")]
    ParseFailure { location: SourceLocation, reason: String },

    #[error("{location}: no symbol mapping exists for identifier '{identifier}', add it to the catalog's [symbols] table")]
    UnresolvedSymbol { identifier: String, location: SourceLocation },

    #[error("{location}: unsupported {shape}")]
    UnsupportedValueShape { shape: String, location: SourceLocation },

    #[error("unable to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("unable to load the Go grammar")]
    Grammar(#[from] tree_sitter::LanguageError),
}
