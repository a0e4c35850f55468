use super::common;
use crate::Result;
use crate::catalog::{Catalog, DocumentSettings};
use crate::metrics::ClassifiedMetric;
use core::fmt::Write;

/// Write the metrics reference document.
///
/// The document opens with front matter for the docs site, a generated-file
/// notice and the intro paragraph. Metrics follow in [`common::sort_for_document`]
/// order, with a `## <Title> Metrics` heading whenever the subsystem title changes.
pub fn generate<W: Write>(metrics: &[ClassifiedMetric], catalog: &Catalog, writer: &mut W) -> Result<()> {
    write_preamble(&catalog.document, writer)?;

    let mut previous_title = String::new();
    for metric in common::sort_for_document(metrics, catalog) {
        let record = &metric.record;

        if !record.subsystem.is_empty() {
            let title = common::subsystem_title(&record.subsystem, catalog);
            if title != previous_title {
                writeln!(writer, "## {title} Metrics")?;
                writeln!(writer)?;
                previous_title = title;
            }
        }

        let qualified_name = record.qualified_name();
        if !qualified_name.is_empty() {
            writeln!(writer, "### `{qualified_name}`")?;
            writeln!(writer, "{}", record.help)?;
            writeln!(writer, "- Stability Level: {}", metric.tier)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_preamble<W: Write>(document: &DocumentSettings, writer: &mut W) -> Result<()> {
    writeln!(writer, "---")?;
    writeln!(writer, "title: \"{}\"", document.title)?;
    writeln!(writer, "linkTitle: \"{}\"", document.link_title)?;
    writeln!(writer, "weight: {}", document.weight)?;
    writeln!(writer)?;
    writeln!(writer, "description: >")?;
    writeln!(writer, "  {}", document.description)?;
    writeln!(writer, "---")?;

    if !document.notice.is_empty() {
        writeln!(writer, "<!-- {} -->", document.notice)?;
    }

    if !document.intro.is_empty() {
        writeln!(writer, "{}", document.intro.trim_end())?;
    }

    Ok(())
}
