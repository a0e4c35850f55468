use crate::metrics::MetricRecord;
use serde::{Deserialize, Serialize};

const KIND_PLACEHOLDER: &str = "{kind}";

/// A family of metrics that shared libraries register at runtime.
///
/// Such metrics have no constructor call in the scanned code. A rule with
/// `kinds` expands once per kind, replacing `{kind}` in every field; a rule
/// without kinds expands once as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PatternRule {
    /// What registers these metrics, for the catalog's maintainers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub subsystem: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,

    pub metrics: Vec<PatternMetric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PatternMetric {
    pub name: String,
    pub help: String,
}

impl PatternRule {
    /// The metric records this rule stands for.
    #[must_use]
    pub fn expand(&self) -> Vec<MetricRecord> {
        if self.kinds.is_empty() {
            return self
                .metrics
                .iter()
                .map(|metric| MetricRecord::new(&self.namespace, &self.subsystem, &metric.name, &metric.help))
                .collect();
        }

        self.kinds
            .iter()
            .flat_map(|kind| {
                let fill = move |template: &str| template.replace(KIND_PLACEHOLDER, kind);
                self.metrics.iter().map(move |metric| {
                    MetricRecord::new(
                        fill(&self.namespace),
                        fill(&self.subsystem),
                        fill(&metric.name),
                        fill(&metric.help),
                    )
                })
            })
            .collect()
    }

    /// Whether any field refers to `{kind}`.
    #[must_use]
    pub fn uses_kind_placeholder(&self) -> bool {
        [&self.namespace, &self.subsystem].into_iter().any(|s| s.contains(KIND_PLACEHOLDER))
            || self
                .metrics
                .iter()
                .any(|m| m.name.contains(KIND_PLACEHOLDER) || m.help.contains(KIND_PLACEHOLDER))
    }
}
