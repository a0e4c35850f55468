/// Metadata of one Prometheus metric.
///
/// Identity is the (namespace, subsystem, name) triple; the help text is not
/// part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricRecord {
    pub namespace: String,
    pub subsystem: String,
    pub name: String,
    pub help: String,
}

impl MetricRecord {
    #[must_use]
    pub fn new(namespace: impl Into<String>, subsystem: impl Into<String>, name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            subsystem: subsystem.into(),
            name: name.into(),
            help: help.into(),
        }
    }

    /// The name Prometheus exposes: non-empty segments joined with `_`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        [&self.namespace, &self.subsystem, &self.name]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("_")
    }

    #[must_use]
    pub fn identity(&self) -> (&str, &str, &str) {
        (&self.namespace, &self.subsystem, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_joins_all_segments() {
        let record = MetricRecord::new("karpenter", "nodes", "created_total", "Number of nodes created.");
        assert_eq!(record.qualified_name(), "karpenter_nodes_created_total");
    }

    #[test]
    fn test_qualified_name_skips_empty_segments() {
        assert_eq!(MetricRecord::new("", "", "client_go_request_total", "").qualified_name(), "client_go_request_total");
        assert_eq!(MetricRecord::new("karpenter", "", "build_info", "").qualified_name(), "karpenter_build_info");
        assert_eq!(MetricRecord::new("", "workqueue", "depth", "").qualified_name(), "workqueue_depth");
        assert_eq!(MetricRecord::default().qualified_name(), "");
    }

    #[test]
    fn test_identity_ignores_help() {
        let a = MetricRecord::new("karpenter", "nodes", "created_total", "first");
        let b = MetricRecord::new("karpenter", "nodes", "created_total", "second");
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a, b);
    }
}
