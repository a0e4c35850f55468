use super::go_package::{GoFile, GoPackage, named_children};
use super::{ExtractError, LOG_TARGET, ValueResolver};
use crate::catalog::Catalog;
use crate::metrics::MetricRecord;
use tree_sitter::Node;

/// Find the metric constructor calls in the package-level `var` declarations of a package.
///
/// Only calls whose qualifier is one of the catalog's constructor namespaces
/// count. Every composite literal passed to such a call that sets at least one
/// of `Namespace`, `Subsystem`, `Name` or `Help` yields one record, in source
/// order.
pub fn scan_package(package: &GoPackage, catalog: &Catalog) -> Result<Vec<MetricRecord>, ExtractError> {
    let mut records = Vec::new();

    for file in &package.files {
        let scanner = FileScanner {
            file,
            catalog,
            resolver: ValueResolver::new(&catalog.symbols, file),
        };

        for declaration in named_children(file.root()) {
            if declaration.kind() == "var_declaration" {
                scanner.scan_declaration(declaration, &mut records)?;
            }
        }
    }

    log::debug!(
        target: LOG_TARGET,
        "Package '{}' in {}: {} files, {} metric declarations",
        package.name,
        package.dir.display(),
        package.files.len(),
        records.len()
    );

    Ok(records)
}

struct FileScanner<'a> {
    file: &'a GoFile,
    catalog: &'a Catalog,
    resolver: ValueResolver<'a>,
}

impl FileScanner<'_> {
    fn scan_declaration(&self, declaration: Node<'_>, records: &mut Vec<MetricRecord>) -> Result<(), ExtractError> {
        for child in named_children(declaration) {
            match child.kind() {
                "var_spec" => self.scan_spec(child, records)?,
                "var_spec_list" => {
                    for spec in named_children(child) {
                        if spec.kind() == "var_spec" {
                            self.scan_spec(spec, records)?;
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn scan_spec(&self, spec: Node<'_>, records: &mut Vec<MetricRecord>) -> Result<(), ExtractError> {
        let Some(values) = spec.child_by_field_name("value") else {
            return Ok(());
        };

        for value in named_children(values) {
            if value.kind() == "call_expression" {
                self.scan_call(value, records)?;
            }
        }

        Ok(())
    }

    fn scan_call(&self, call: Node<'_>, records: &mut Vec<MetricRecord>) -> Result<(), ExtractError> {
        let Some(function) = call.child_by_field_name("function") else {
            return Ok(());
        };

        let Some(qualifier) = self.callee_qualifier(function)? else {
            return Ok(());
        };

        if !self.catalog.constructor_namespaces.iter().any(|ns| ns == qualifier) {
            return Ok(());
        }

        let Some(arguments) = call.child_by_field_name("arguments") else {
            return Ok(());
        };

        for argument in named_children(arguments) {
            if argument.kind() == "composite_literal"
                && let Some(record) = self.scan_options(argument)?
            {
                records.push(record);
            }
        }

        Ok(())
    }

    /// The package qualifier of a called function, or `None` for a function literal.
    fn callee_qualifier(&self, function: Node<'_>) -> Result<Option<&str>, ExtractError> {
        match function.kind() {
            "identifier" => Ok(Some(self.file.text(function))),
            "selector_expression" => match function.child_by_field_name("operand") {
                Some(operand) => Ok(Some(self.file.text(operand))),
                None => Err(self.unsupported_callee(function)),
            },
            "func_literal" => Ok(None),
            "parenthesized_expression" => match named_children(function).first() {
                Some(inner) => self.callee_qualifier(*inner),
                None => Err(self.unsupported_callee(function)),
            },
            "unary_expression" if function.child_by_field_name("operator").map(|op| self.file.text(op)) == Some("*") => {
                self.unwrap_callee(function, "operand")
            }
            "index_expression" => self.unwrap_callee(function, "operand"),
            "generic_type" | "type_instantiation_expression" => self.unwrap_callee(function, "type"),
            _ => Err(self.unsupported_callee(function)),
        }
    }

    fn unwrap_callee(&self, function: Node<'_>, field: &str) -> Result<Option<&str>, ExtractError> {
        let inner = function
            .child_by_field_name(field)
            .or_else(|| named_children(function).first().copied());

        match inner {
            Some(inner) => self.callee_qualifier(inner),
            None => Err(self.unsupported_callee(function)),
        }
    }

    fn unsupported_callee(&self, function: Node<'_>) -> ExtractError {
        ExtractError::UnsupportedValueShape {
            shape: format!("call target '{}'", function.kind()),
            location: self.file.location(function),
        }
    }

    /// Read the metric fields out of an options literal such as `prometheus.CounterOpts{...}`.
    fn scan_options(&self, literal: Node<'_>) -> Result<Option<MetricRecord>, ExtractError> {
        let Some(body) = literal.child_by_field_name("body") else {
            return Ok(None);
        };

        let mut record = MetricRecord::default();
        let mut recognized = false;

        for element in named_children(body) {
            if element.kind() != "keyed_element" {
                continue;
            }

            let parts = named_children(element);
            let [key, value] = parts.as_slice() else {
                continue;
            };

            let key = unwrap_literal_element(*key);
            let field = match self.file.text(key) {
                "Namespace" => &mut record.namespace,
                "Subsystem" => &mut record.subsystem,
                "Name" => &mut record.name,
                "Help" => &mut record.help,
                _ => continue,
            };

            *field = self.resolver.resolve(*value)?;
            recognized = true;
        }

        Ok(recognized.then_some(record))
    }
}

fn unwrap_literal_element(node: Node<'_>) -> Node<'_> {
    if node.kind() == "literal_element" {
        named_children(node).first().copied().unwrap_or(node)
    } else {
        node
    }
}
