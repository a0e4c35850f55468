use super::{LOG_TARGET, MetricRecord};
use crate::catalog::PatternRule;

/// Expand the catalog's pattern rules into metric records, in catalog order.
///
/// These are metrics a syntax-level scan cannot find because shared libraries
/// create them at runtime (for example one status-condition family per
/// resource kind). The rules are a curated allow-list and need review whenever
/// those libraries change.
#[must_use]
pub fn synthesize(rules: &[PatternRule]) -> Vec<MetricRecord> {
    let records: Vec<_> = rules.iter().flat_map(PatternRule::expand).collect();
    log::debug!(target: LOG_TARGET, "Synthesized {} metrics from {} pattern rules", records.len(), rules.len());
    records
}
