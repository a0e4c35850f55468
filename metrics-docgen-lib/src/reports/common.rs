//! Common utilities shared across report generators.

use crate::catalog::Catalog;
use crate::metrics::ClassifiedMetric;
use core::cmp::Reverse;

/// Order metrics for presentation.
///
/// Higher subsystem priority comes first; within a priority, metrics are
/// ordered by descending qualified name. Records sharing both keep their
/// input order.
#[must_use]
pub fn sort_for_document<'a>(metrics: &'a [ClassifiedMetric], catalog: &Catalog) -> Vec<&'a ClassifiedMetric> {
    let mut sorted: Vec<_> = metrics.iter().collect();
    sorted.sort_by_cached_key(|metric| {
        (
            Reverse(catalog.priority(&metric.record.subsystem)),
            Reverse(metric.record.qualified_name()),
        )
    });
    sorted
}

/// Section title for a subsystem.
///
/// A configured title wins. Otherwise words split on `_` are capitalized, with
/// configured acronyms fully upper cased: `aws_sdk_go` becomes `AWS SDK Go`.
#[must_use]
pub fn subsystem_title(subsystem: &str, catalog: &Catalog) -> String {
    if let Some(title) = catalog.subsystem_titles.get(subsystem) {
        return title.clone();
    }

    subsystem
        .split('_')
        .map(|word| {
            if catalog.title_acronyms.iter().any(|acronym| acronym == word) {
                word.to_uppercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
