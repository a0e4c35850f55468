#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metrics-docgen
//!
//! This library extracts Prometheus metric declarations from Go source trees
//! by static analysis and renders them as a markdown reference document.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`catalog`]: Symbols, pattern rules, stability tiers and document settings
//! - [`source`]: Go parsing and metric declaration scanning
//! - [`metrics`]: Metric records, synthesis and normalization
//! - [`reports`]: Markdown generation
//! - [`pipeline`]: End-to-end extraction and rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod catalog;
pub mod pipeline;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod source;
#[cfg(not(any(debug_assertions, test)))]
mod source;

pub use crate::catalog::Catalog;
pub use crate::commands::{Host, run};
pub use crate::metrics::{ClassifiedMetric, MetricRecord, StabilityTier};
pub use crate::pipeline::{extract_metrics, render_document};
pub use crate::source::ExtractError;
