//! The metric model and the steps that turn raw findings into documented metrics
//!
//! A [`MetricRecord`] is one metric's namespace, subsystem, name and help text,
//! either scanned from source or synthesized from the catalog's pattern rules.
//!
//! # Implementation Model
//!
//! - [`synthesize`] expands the catalog's pattern rules into records for
//!   metrics that only exist at runtime.
//! - [`normalize`] merges scanned and synthesized records, drops duplicate
//!   identities and noise, folds library name prefixes into subsystems, and
//!   pairs every survivor with its [`StabilityTier`] as a [`ClassifiedMetric`].
//!
//! The output order of [`normalize`] follows the input order; sorting for
//! presentation is the report's job.

mod classified_metric;
mod metric_record;
mod normalizer;
mod pattern_synthesizer;
mod stability_tier;

pub use classified_metric::ClassifiedMetric;
pub use metric_record::MetricRecord;
pub use normalizer::normalize;
pub use pattern_synthesizer::synthesize;
pub use stability_tier::StabilityTier;

const LOG_TARGET: &str = "   metrics";
