//! End-to-end extraction: from source roots to the rendered document.

use crate::Result;
use crate::catalog::Catalog;
use crate::metrics::{self, ClassifiedMetric};
use crate::reports;
use crate::source::{self, ExtractError};
use std::path::Path;

const LOG_TARGET: &str = "  pipeline";

/// Scan every root in order and return the normalized, classified metrics.
///
/// Records from earlier roots take precedence over identical ones found later.
///
/// # Errors
///
/// Returns the first [`ExtractError`] encountered; no partial result is produced.
pub fn extract_metrics<P: AsRef<Path>>(roots: &[P], catalog: &Catalog) -> Result<Vec<ClassifiedMetric>, ExtractError> {
    let mut scanned = Vec::new();

    for root in roots {
        let root = root.as_ref();
        log::info!(target: LOG_TARGET, "Parsing code in {}", root.display());

        for package in source::collect_packages(root)? {
            scanned.extend(source::scan_package(&package, catalog)?);
        }
    }

    let synthesized = metrics::synthesize(&catalog.patterns);
    Ok(metrics::normalize(scanned, synthesized, catalog))
}

/// Render the metrics reference document in memory.
pub fn render_document(metrics: &[ClassifiedMetric], catalog: &Catalog) -> Result<String> {
    let mut document = String::new();
    reports::generate_markdown(metrics, catalog, &mut document)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StabilityTier;
    use std::fs;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_earlier_roots_win() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write(
            first.path(),
            "a/a.go",
            "package a\n\nvar X = prometheus.NewGauge(prometheus.GaugeOpts{Namespace: \"karpenter\", Name: \"x\", Help: \"from first\"})\n",
        );
        write(
            second.path(),
            "b/b.go",
            "package b\n\nvar X = prometheus.NewGauge(prometheus.GaugeOpts{Namespace: \"karpenter\", Name: \"x\", Help: \"from second\"})\n",
        );

        let metrics = extract_metrics(&[first.path(), second.path()], &Catalog::default()).unwrap();
        let x: Vec<_> = metrics.iter().filter(|m| m.record.name == "x").collect();
        assert_eq!(x.len(), 1);
        assert_eq!(x[0].record.help, "from first");
        assert_eq!(x[0].tier, StabilityTier::Alpha);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_synthesized_metrics_are_included() {
        let root = tempfile::tempdir().unwrap();
        let metrics = extract_metrics(&[root.path()], &Catalog::default()).unwrap();

        assert!(
            metrics
                .iter()
                .any(|m| m.record.subsystem == "client_go" && m.record.name == "request_total")
        );
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_render_is_deterministic() {
        let root = tempfile::tempdir().unwrap();
        write(
            root.path(),
            "pkg/metrics.go",
            "package pkg\n\nvar (\n\tA = prometheus.NewGauge(prometheus.GaugeOpts{Namespace: metrics.Namespace, Subsystem: \"nodes\", Name: \"a\"})\n\tB = prometheus.NewGauge(prometheus.GaugeOpts{Namespace: metrics.Namespace, Subsystem: \"pods\", Name: \"b\"})\n)\n",
        );

        let catalog = Catalog::default();
        let first = render_document(&extract_metrics(&[root.path()], &catalog).unwrap(), &catalog).unwrap();
        let second = render_document(&extract_metrics(&[root.path()], &catalog).unwrap(), &catalog).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("### `karpenter_nodes_a`"));
    }
}
