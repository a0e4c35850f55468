use crate::metrics::StabilityTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lists of subsystems and qualified metric names per stability tier.
///
/// A metric not listed anywhere is alpha.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StabilityRules {
    #[serde(default)]
    pub stable: BTreeSet<String>,

    #[serde(default)]
    pub beta: BTreeSet<String>,

    #[serde(default)]
    pub deprecated: BTreeSet<String>,
}

impl StabilityRules {
    /// Classify a metric by its subsystem or qualified name.
    ///
    /// Deprecation overrides every other listing, then stable, then beta.
    #[must_use]
    pub fn classify(&self, subsystem: &str, qualified_name: &str) -> StabilityTier {
        let listed = |set: &BTreeSet<String>| set.contains(subsystem) || set.contains(qualified_name);

        if listed(&self.deprecated) {
            StabilityTier::Deprecated
        } else if listed(&self.stable) {
            StabilityTier::Stable
        } else if listed(&self.beta) {
            StabilityTier::Beta
        } else {
            StabilityTier::Alpha
        }
    }

    /// Entries that appear in more than one tier, with the tiers they appear in.
    #[must_use]
    pub fn overlapping_entries(&self) -> Vec<(&str, Vec<StabilityTier>)> {
        let tiers = [
            (StabilityTier::Stable, &self.stable),
            (StabilityTier::Beta, &self.beta),
            (StabilityTier::Deprecated, &self.deprecated),
        ];

        let all: BTreeSet<&str> = tiers.iter().flat_map(|(_, set)| set.iter().map(String::as_str)).collect();

        all.into_iter()
            .filter_map(|entry| {
                let found: Vec<_> = tiers
                    .iter()
                    .filter(|(_, set)| set.contains(entry))
                    .map(|(tier, _)| *tier)
                    .collect();
                (found.len() > 1).then_some((entry, found))
            })
            .collect()
    }
}
