//! CSV sink and the sequential group-by-group export loop

use crate::api::tcgcsv::{Group, TcgcsvClient};
use crate::error::{ExportError, Result};
use crate::merge::{merge_group, OutputRow};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of the export, fixed
const HEADER: [&str; 9] = [
    "productId",
    "setName",
    "productName",
    "rarity",
    "subTypeName",
    "marketPrice",
    "midPrice",
    "lowPrice",
    "highPrice",
];

/// CSV writer for output rows. Writes the header up front and flushes after
/// every group, so an interrupted run still leaves usable output.
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvExporter<File> {
    /// Create the output file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvExporter<W> {
    /// Wrap an arbitrary writer (for testing against an in-memory buffer)
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    /// Append one group's rows and flush
    pub fn write_rows(&mut self, rows: &[OutputRow]) -> Result<()> {
        for row in rows {
            let product_id = row.product_id.to_string();
            self.writer.write_record([
                product_id.as_str(),
                &row.set_name,
                &row.product_name,
                &row.rarity,
                &row.sub_type_name,
                &row.market_price,
                &row.mid_price,
                &row.low_price,
                &row.high_price,
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Finish writing and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

/// Counters for one export run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExportSummary {
    pub groups_processed: usize,
    pub groups_skipped: usize,
    pub rows_written: usize,
}

/// Fetch, merge and write every group in upstream order.
///
/// A failed products or prices fetch skips that group entirely (logged with
/// its identifier) and the run continues, so no partial rows are written
/// for a skipped group. Only a sink write failure is returned as `Err`.
pub fn export_groups<W: Write>(
    client: &TcgcsvClient,
    category_id: u32,
    groups: &[Group],
    exporter: &mut CsvExporter<W>,
) -> Result<ExportSummary> {
    let total = groups.len();
    let mut summary = ExportSummary::default();

    for (idx, group) in groups.iter().enumerate() {
        let (products, prices) = match client.fetch_group_data(category_id, group.group_id) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to fetch data for group {}: {}", group.group_id, e);
                summary.groups_skipped += 1;
                continue;
            }
        };

        let rows = merge_group(&group.name, &products, &prices);
        exporter.write_rows(&rows)?;

        summary.groups_processed += 1;
        summary.rows_written += rows.len();
        log::info!("Processed group {}/{}: {}", idx + 1, total, group.name);
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
