//! Report generation for the extracted metrics
//!
//! The only report is the markdown metrics reference consumed by the docs
//! site. Generators write to any [`core::fmt::Write`] so the whole document can
//! be rendered in memory before anything touches the file system.
//!
//! Ordering and section titles live in the `common` module:
//! - Sorting by subsystem priority, then by descending qualified name
//! - Subsystem titles from the catalog's aliases, or derived from the subsystem name

mod common;
mod markdown;

pub use markdown::generate as generate_markdown;

#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::catalog::{Catalog, DocumentSettings};
    use crate::metrics::{ClassifiedMetric, MetricRecord, StabilityTier};

    fn small_catalog() -> Catalog {
        Catalog {
            document: DocumentSettings {
                title: "Metrics".to_string(),
                link_title: "Metrics".to_string(),
                weight: 7,
                description: "Inspect Karpenter Metrics".to_string(),
                notice: "generated".to_string(),
                intro: "Intro paragraph.".to_string(),
            },
            ..Catalog::default()
        }
    }

    fn metric(namespace: &str, subsystem: &str, name: &str, help: &str, tier: StabilityTier) -> ClassifiedMetric {
        ClassifiedMetric::new(MetricRecord::new(namespace, subsystem, name, help), tier)
    }

    #[test]
    fn test_markdown_report() {
        let metrics = vec![
            metric("karpenter", "nodes", "created_total", "Number of nodes created.", StabilityTier::Stable),
            metric("karpenter", "", "build_info", "Build information.", StabilityTier::Alpha),
            metric("karpenter", "node", "termination_duration_seconds", "Time to terminate.", StabilityTier::Beta),
            metric("", "aws_sdk_go", "request_total", "SDK requests.", StabilityTier::Alpha),
            metric("karpenter", "nodes", "legacy_count", "Old.", StabilityTier::Deprecated),
        ];

        let mut output = String::new();
        generate_markdown(&metrics, &small_catalog(), &mut output).unwrap();

        insta::assert_snapshot!(output, @r#"
        ---
        title: "Metrics"
        linkTitle: "Metrics"
        weight: 7

        description: >
          Inspect Karpenter Metrics
        ---
        <!-- generated -->
        Intro paragraph.
        ### `karpenter_build_info`
        Build information.
        - Stability Level: ALPHA

        ## Nodes Metrics

        ### `karpenter_nodes_legacy_count`
        Old.
        - Stability Level: DEPRECATED

        ### `karpenter_nodes_created_total`
        Number of nodes created.
        - Stability Level: STABLE

        ### `karpenter_node_termination_duration_seconds`
        Time to terminate.
        - Stability Level: BETA

        ## AWS SDK Go Metrics

        ### `aws_sdk_go_request_total`
        SDK requests.
        - Stability Level: ALPHA
        "#);
    }

    #[test]
    fn test_markdown_report_empty() {
        let mut output = String::new();
        generate_markdown(&[], &small_catalog(), &mut output).unwrap();

        insta::assert_snapshot!(output, @r#"
        ---
        title: "Metrics"
        linkTitle: "Metrics"
        weight: 7

        description: >
          Inspect Karpenter Metrics
        ---
        <!-- generated -->
        Intro paragraph.
        "#);
    }

    #[test]
    fn test_markdown_skips_empty_qualified_names() {
        let catalog = Catalog {
            document: DocumentSettings::default(),
            ..Catalog::default()
        };
        let metrics = vec![metric("", "", "", "", StabilityTier::Alpha)];

        let mut output = String::new();
        generate_markdown(&metrics, &catalog, &mut output).unwrap();
        assert!(!output.contains("###"));
    }
}
