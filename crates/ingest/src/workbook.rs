use crate::cell::CellValue;
use crate::error::{IngestError, Result};
use crate::sheet::RawSheet;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use tracing::debug;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as serial days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// Decode the first sheet of a workbook held fully in memory.
///
/// Format detection is delegated to calamine, so both the legacy binary
/// and the OOXML container are accepted from the same entry point.
///
/// # Errors
///
/// Returns [`IngestError::Decode`] if the bytes are not a spreadsheet,
/// [`IngestError::EmptyWorkbook`] if it has no sheets, and
/// [`IngestError::EmptySheet`] if the first sheet has no rows.
pub fn decode_first_sheet(bytes: &[u8]) -> Result<RawSheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| IngestError::Decode(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first) = sheet_names.first() else {
        return Err(IngestError::EmptyWorkbook);
    };

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| IngestError::Decode(e.to_string()))?;

    if range.height() == 0 {
        return Err(IngestError::EmptySheet);
    }

    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(data_to_cell_value).collect())
        .collect();

    debug!(sheet = %first, rows = rows.len(), "decoded first worksheet");

    Ok(RawSheet::from(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_with_decode_error() {
        let result = decode_first_sheet(b"this is not a spreadsheet");
        assert!(matches!(result, Err(IngestError::Decode(_))));
    }

    #[test]
    fn test_empty_input_fails_with_decode_error() {
        let result = decode_first_sheet(&[]);
        assert!(matches!(result, Err(IngestError::Decode(_))));
    }

    #[test]
    fn test_data_conversion() {
        assert_eq!(data_to_cell_value(&Data::Empty), CellValue::Null);
        assert_eq!(
            data_to_cell_value(&Data::String("x".to_string())),
            CellValue::String("x".to_string())
        );
        assert_eq!(data_to_cell_value(&Data::Float(7.5)), CellValue::Float(7.5));
        assert_eq!(data_to_cell_value(&Data::Bool(true)), CellValue::Bool(true));
    }
}
