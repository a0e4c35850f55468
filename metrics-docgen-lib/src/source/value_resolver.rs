use super::ExtractError;
use super::go_package::{GoFile, named_children};
use crate::catalog::SymbolTable;
use tree_sitter::Node;

/// Turns the value of a metric options field into a string.
///
/// Only literals, identifiers known to the symbol table and `+` concatenations
/// of those are understood. Everything else is reported as an error rather than
/// skipped, since an omitted segment would yield a wrong metric name.
#[derive(Debug)]
pub struct ValueResolver<'a> {
    symbols: &'a SymbolTable,
    file: &'a GoFile,
}

impl<'a> ValueResolver<'a> {
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable, file: &'a GoFile) -> Self {
        Self { symbols, file }
    }

    pub fn resolve(&self, node: Node<'_>) -> Result<String, ExtractError> {
        match node.kind() {
            "interpreted_string_literal" | "raw_string_literal" => Ok(unquote(self.file.text(node)).to_string()),
            "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal" => Ok(self.file.text(node).to_string()),
            "identifier" => self.lookup(self.file.text(node).to_string(), node),
            "selector_expression" => self.lookup(self.selector_name(node)?, node),
            "binary_expression" => self.concatenate(node),
            "parenthesized_expression" | "literal_element" => self.resolve(self.single_child(node)?),
            other => Err(self.unsupported(format!("value expression '{other}'"), node)),
        }
    }

    fn lookup(&self, identifier: String, node: Node<'_>) -> Result<String, ExtractError> {
        match self.symbols.lookup(&identifier) {
            Some(value) => Ok(value.to_string()),
            None => Err(ExtractError::UnresolvedSymbol {
                identifier,
                location: self.file.location(node),
            }),
        }
    }

    /// `pkg.Ident` with any whitespace between the parts removed.
    fn selector_name(&self, node: Node<'_>) -> Result<String, ExtractError> {
        let operand = node.child_by_field_name("operand");
        let field = node.child_by_field_name("field");

        match (operand, field) {
            (Some(operand), Some(field)) => Ok(format!("{}.{}", self.file.text(operand), self.file.text(field))),
            _ => Err(self.unsupported("selector expression".to_string(), node)),
        }
    }

    fn concatenate(&self, node: Node<'_>) -> Result<String, ExtractError> {
        let operator = node.child_by_field_name("operator").map(|op| self.file.text(op));
        if operator != Some("+") {
            return Err(self.unsupported(
                format!("binary expression with operator '{}'", operator.unwrap_or_default()),
                node,
            ));
        }

        let (Some(left), Some(right)) = (node.child_by_field_name("left"), node.child_by_field_name("right")) else {
            return Err(self.unsupported("incomplete binary expression".to_string(), node));
        };

        let mut value = self.resolve(left)?;
        value.push_str(&self.resolve(right)?);
        Ok(value)
    }

    fn single_child<'t>(&self, node: Node<'t>) -> Result<Node<'t>, ExtractError> {
        named_children(node)
            .into_iter()
            .next()
            .ok_or_else(|| self.unsupported(format!("empty {}", node.kind()), node))
    }

    fn unsupported(&self, shape: String, node: Node<'_>) -> ExtractError {
        ExtractError::UnsupportedValueShape {
            shape,
            location: self.file.location(node),
        }
    }
}

/// Strip the delimiters of a Go string literal.
fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
        .unwrap_or(literal)
}
