//! Fixed knowledge about the scanned codebase's metric conventions.
//!
//! Static analysis alone cannot produce complete documentation: constant
//! values cannot be evaluated, some metrics are only registered at runtime by
//! shared libraries, and stability levels are a project decision. The catalog
//! holds all of this as plain data so it can be reviewed and diffed on its own.
//!
//! The default catalog is embedded from `default_catalog.toml`. A replacement
//! file can be supplied on the command line; it is validated the same way.

mod document_settings;
mod pattern_rule;
mod stability_rules;
mod symbol_table;

pub use document_settings::DocumentSettings;
pub use pattern_rule::{PatternMetric, PatternRule};
pub use stability_rules::StabilityRules;
pub use symbol_table::SymbolTable;

use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

const LOG_TARGET: &str = "   catalog";

/// The default catalog TOML content, embedded from `default_catalog.toml`
pub const DEFAULT_CATALOG_TOML: &str = include_str!("../../default_catalog.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Package qualifiers whose calls construct metrics (e.g. `prometheus`)
    pub constructor_namespaces: Vec<String>,

    /// Bare metric name prefixes that are left out of the documentation
    #[serde(default)]
    pub excluded_name_prefixes: Vec<String>,

    /// Libraries whose metrics carry their subsystem as a name prefix instead of a field
    #[serde(default)]
    pub unprefixed_subsystems: Vec<String>,

    /// Words kept upper case in section titles
    #[serde(default)]
    pub title_acronyms: Vec<String>,

    #[serde(default)]
    pub symbols: SymbolTable,

    #[serde(default)]
    pub stability: StabilityRules,

    /// Section ordering; higher comes first and unlisted subsystems are 0
    #[serde(default)]
    pub subsystem_priority: BTreeMap<String, i32>,

    /// Section titles that override the ones derived from subsystem names
    #[serde(default)]
    pub subsystem_titles: BTreeMap<String, String>,

    #[serde(default)]
    pub document: DocumentSettings,

    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

impl Catalog {
    /// Load a catalog file, or the embedded default when no path is given
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading catalog file '{path}'"))?;
        let catalog: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing catalog file '{path}'"))?;
        catalog.validate()?;

        log::debug!(
            target: LOG_TARGET,
            "Loaded catalog '{path}' with {} symbols and {} pattern rules",
            catalog.symbols.len(),
            catalog.patterns.len()
        );

        Ok(catalog)
    }

    /// Render the catalog back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).into_app_err("serializing catalog")
    }

    /// Check the catalog for contradictions
    ///
    /// # Errors
    ///
    /// Returns an error if no constructor namespace is configured, a metric is
    /// listed under several stability tiers, or a pattern rule is malformed
    pub fn validate(&self) -> Result<()> {
        if self.constructor_namespaces.is_empty() {
            bail!("constructor_namespaces must list at least one package qualifier");
        }

        if let Some((entry, tiers)) = self.stability.overlapping_entries().into_iter().next() {
            let tiers: Vec<_> = tiers.iter().map(ToString::to_string).collect();
            bail!("'{entry}' is listed under several stability tiers: {}", tiers.join(", "));
        }

        for (index, rule) in self.patterns.iter().enumerate() {
            let label = rule.description.clone().unwrap_or_else(|| format!("#{}", index + 1));

            if rule.metrics.is_empty() {
                bail!("pattern rule {label} has no metrics");
            }

            if rule.kinds.is_empty() && rule.uses_kind_placeholder() {
                bail!("pattern rule {label} uses {{kind}} but lists no kinds");
            }
        }

        Ok(())
    }

    /// Sort priority of a subsystem, 0 when unlisted
    #[must_use]
    pub fn priority(&self, subsystem: &str) -> i32 {
        self.subsystem_priority.get(subsystem).copied().unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        toml::from_str(DEFAULT_CATALOG_TOML).expect("default_catalog.toml should be valid TOML that deserializes to Catalog")
    }
}
