//! Static extraction of metric declarations from Go source trees
//!
//! # Implementation Model
//!
//! Source files are parsed with tree-sitter's Go grammar. Parsing is purely
//! syntactic: nothing is type checked and no constant is evaluated, so any
//! identifier used as a metric field value must be known to the catalog's
//! symbol table.
//!
//! - [`collect_packages`] walks a root directory, parses every `.go` file and
//!   groups the files into packages by directory and declared package name.
//! - [`scan_package`] looks at the package-level `var` declarations of a package
//!   and turns each metric constructor call into a [`MetricRecord`](crate::metrics::MetricRecord).
//! - [`ValueResolver`] turns individual field values (literals, known
//!   identifiers and `+` concatenations) into strings.
//!
//! Every problem is reported as an [`ExtractError`] carrying the offending
//! source location, and aborts extraction.

mod declaration_scanner;
mod extract_error;
mod go_package;
mod tree_walker;
mod value_resolver;

pub use declaration_scanner::scan_package;
pub use extract_error::{ExtractError, SourceLocation};
pub use go_package::{GoFile, GoPackage};
pub use tree_walker::collect_packages;
pub use value_resolver::ValueResolver;

const LOG_TARGET: &str = "    source";
