use crate::error::{IngestError, Result};
use crate::record::{collapse_whitespace, InvoiceRecord};
use crate::schema::{locate_header, Column, ColumnMap};
use crate::sheet::RawSheet;
use crate::workbook::decode_first_sheet;
use tracing::debug;

/// Extract normalized records from the rows strictly after the header.
///
/// All-blank rows are skipped and rows shorter than the header are padded
/// with empty fields; neither is an error. Inadmissible rows are dropped
/// silently. Output preserves encounter order (pre-sort).
#[must_use]
pub fn extract_rows(
    sheet: &RawSheet,
    header_index: usize,
    columns: &ColumnMap,
) -> Vec<InvoiceRecord> {
    let mut records = Vec::new();
    let mut blank = 0usize;
    let mut dropped = 0usize;

    for row in sheet.rows().iter().skip(header_index + 1) {
        if row.iter().all(|cell| cell.is_blank()) {
            blank += 1;
            continue;
        }

        // Reading past the end of a short row yields an empty field.
        let field = |column: Column| -> String {
            columns
                .index_of(column)
                .and_then(|i| row.get(i))
                .map(|cell| cell.as_str().trim().to_string())
                .unwrap_or_default()
        };

        let record = InvoiceRecord {
            account_name: field(Column::AccountName),
            issue_key: field(Column::IssueKey),
            issue_summary: field(Column::IssueSummary),
            work_description: collapse_whitespace(&field(Column::WorkDescription)),
            logged_hours: field(Column::LoggedHours),
            work_date: field(Column::WorkDate),
            full_name: field(Column::FullName),
        };

        if record.is_admissible() {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    if blank > 0 || dropped > 0 {
        debug!(blank, dropped, kept = records.len(), "filtered data rows");
    }

    records
}

/// Sort records ascending by account name, case-insensitively.
///
/// The underlying sort is stable, so records with equal account names keep
/// their encounter order.
pub fn sort_by_account(records: &mut [InvoiceRecord]) {
    records.sort_by(|a, b| {
        a.account_name
            .to_lowercase()
            .cmp(&b.account_name.to_lowercase())
    });
}

/// Run the full ingestion pipeline over an in-memory workbook file.
///
/// Decodes the first sheet, locates the header row, extracts and filters
/// data rows, and sorts the result by account name. The stages short-circuit
/// on the first failure, and a successful result is guaranteed non-empty.
///
/// # Errors
///
/// Returns the first stage failure: [`IngestError::Decode`],
/// [`IngestError::EmptyWorkbook`], [`IngestError::EmptySheet`],
/// [`IngestError::HeaderNotFound`], or [`IngestError::NoDataRows`] when
/// zero rows survive filtering.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<InvoiceRecord>> {
    let sheet = decode_first_sheet(bytes)?;
    let (header_index, columns) = locate_header(&sheet)?;

    let mut records = extract_rows(&sheet, header_index, &columns);
    if records.is_empty() {
        return Err(IngestError::NoDataRows);
    }

    sort_by_account(&mut records);
    debug!(records = records.len(), "ingestion complete");

    Ok(records)
}
