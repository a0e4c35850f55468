use super::{ClassifiedMetric, LOG_TARGET, MetricRecord};
use crate::catalog::Catalog;
use std::collections::HashSet;

/// Merge scanned and synthesized records into the final classified list.
///
/// Steps run in a fixed order: merge (scanned first), dedupe by identity,
/// exclude noise prefixes, fold library prefixes into subsystems, then
/// classify. Dedupe keeps the first occurrence, so input order matters.
#[must_use]
pub fn normalize(scanned: Vec<MetricRecord>, synthesized: Vec<MetricRecord>, catalog: &Catalog) -> Vec<ClassifiedMetric> {
    let total = scanned.len() + synthesized.len();

    let merged = dedupe(scanned.into_iter().chain(synthesized));
    let deduped = merged.len();

    let kept: Vec<_> = merged
        .into_iter()
        .filter(|record| !is_excluded(record, &catalog.excluded_name_prefixes))
        .collect();
    let excluded = deduped - kept.len();

    let folded = dedupe(kept.into_iter().map(|record| fold(record, &catalog.unprefixed_subsystems)));

    log::debug!(
        target: LOG_TARGET,
        "Normalized {total} records: {} duplicates, {excluded} excluded, {} remaining",
        total - deduped,
        folded.len()
    );

    folded
        .into_iter()
        .map(|record| {
            let tier = catalog.stability.classify(&record.subsystem, &record.qualified_name());
            ClassifiedMetric::new(record, tier)
        })
        .collect()
}

fn dedupe(records: impl IntoIterator<Item = MetricRecord>) -> Vec<MetricRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let (namespace, subsystem, name) = record.identity();
            seen.insert((namespace.to_string(), subsystem.to_string(), name.to_string()))
        })
        .collect()
}

fn is_excluded(record: &MetricRecord, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| record.name.starts_with(prefix.as_str()))
}

fn fold(mut record: MetricRecord, prefixes: &[String]) -> MetricRecord {
    if !record.subsystem.is_empty() {
        return record;
    }

    for prefix in prefixes {
        if let Some(rest) = record.name.strip_prefix(prefix.as_str()).and_then(|rest| rest.strip_prefix('_')) {
            record.name = rest.to_string();
            record.subsystem.clone_from(prefix);
            break;
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StabilityTier;

    fn catalog() -> Catalog {
        toml::from_str(
            r#"
constructor_namespaces = ["prometheus"]
excluded_name_prefixes = ["rest_client"]
unprefixed_subsystems = ["workqueue", "client_go"]

[stability]
stable = ["karpenter_nodes_created_total", "workqueue"]
beta = ["karpenter_pods_state"]
deprecated = ["karpenter_nodes_legacy"]
"#,
        )
        .unwrap()
    }

    fn names(metrics: &[ClassifiedMetric]) -> Vec<String> {
        metrics.iter().map(|m| m.record.qualified_name()).collect()
    }

    #[test]
    fn test_duplicates_keep_first_help() {
        let scanned = vec![
            MetricRecord::new("karpenter", "nodes", "created_total", "first"),
            MetricRecord::new("karpenter", "nodes", "created_total", "second"),
        ];
        let synthesized = vec![MetricRecord::new("karpenter", "nodes", "created_total", "third")];

        let metrics = normalize(scanned, synthesized, &catalog());
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].record.help, "first");
    }

    #[test]
    fn test_scanned_precede_synthesized() {
        let scanned = vec![MetricRecord::new("karpenter", "nodes", "created_total", "")];
        let synthesized = vec![MetricRecord::new("", "", "client_go_request_total", "")];

        let metrics = normalize(scanned, synthesized, &catalog());
        assert_eq!(names(&metrics), vec!["karpenter_nodes_created_total", "client_go_request_total"]);
    }

    #[test]
    fn test_excluded_prefixes() {
        let scanned = vec![
            MetricRecord::new("", "", "rest_client_requests_total", ""),
            MetricRecord::new("karpenter", "", "build_info", ""),
        ];

        let metrics = normalize(scanned, Vec::new(), &catalog());
        assert_eq!(names(&metrics), vec!["karpenter_build_info"]);
    }

    #[test]
    fn test_fold_moves_prefix_into_subsystem() {
        let scanned = vec![MetricRecord::new("", "", "workqueue_depth", "Current depth")];

        let metrics = normalize(scanned, Vec::new(), &catalog());
        assert_eq!(metrics[0].record, MetricRecord::new("", "workqueue", "depth", "Current depth"));
        assert_eq!(metrics[0].record.qualified_name(), "workqueue_depth");
    }

    #[test]
    fn test_fold_happens_once() {
        let scanned = vec![MetricRecord::new("", "", "workqueue_workqueue_depth", "")];

        let metrics = normalize(scanned, Vec::new(), &catalog());
        assert_eq!(metrics[0].record.subsystem, "workqueue");
        assert_eq!(metrics[0].record.name, "workqueue_depth");
    }

    #[test]
    fn test_fold_requires_empty_subsystem_and_separator() {
        let scanned = vec![
            MetricRecord::new("", "other", "workqueue_depth", ""),
            MetricRecord::new("", "", "workqueuedepth", ""),
        ];

        let metrics = normalize(scanned, Vec::new(), &catalog());
        assert_eq!(metrics[0].record.subsystem, "other");
        assert_eq!(metrics[0].record.name, "workqueue_depth");
        assert_eq!(metrics[1].record.subsystem, "");
        assert_eq!(metrics[1].record.name, "workqueuedepth");
    }

    #[test]
    fn test_collision_after_fold_is_dropped() {
        let scanned = vec![
            MetricRecord::new("", "workqueue", "depth", "declared"),
            MetricRecord::new("", "", "workqueue_depth", "folded"),
        ];

        let metrics = normalize(scanned, Vec::new(), &catalog());
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].record.help, "declared");
    }

    #[test]
    fn test_classification() {
        let scanned = vec![
            MetricRecord::new("karpenter", "nodes", "created_total", ""),
            MetricRecord::new("karpenter", "pods", "state", ""),
            MetricRecord::new("karpenter", "nodes", "legacy", ""),
            MetricRecord::new("", "", "workqueue_adds_total", ""),
            MetricRecord::new("karpenter", "scheduler", "queue_depth", ""),
        ];

        let tiers: Vec<_> = normalize(scanned, Vec::new(), &catalog()).into_iter().map(|m| m.tier).collect();
        assert_eq!(
            tiers,
            vec![
                StabilityTier::Stable,
                StabilityTier::Beta,
                StabilityTier::Deprecated,
                StabilityTier::Stable,
                StabilityTier::Alpha,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(Vec::new(), Vec::new(), &catalog()).is_empty());
    }
}
