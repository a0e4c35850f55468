use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values of the Go identifiers referenced by metric declarations.
///
/// Keys are written the way they appear in source: bare (`NodeSubsystem`) or
/// package qualified (`metrics.NodeSubsystem`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(BTreeMap<String, String>);

impl SymbolTable {
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.0.get(identifier).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for SymbolTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
