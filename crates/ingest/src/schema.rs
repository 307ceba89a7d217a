use crate::error::{IngestError, Result};
use crate::sheet::RawSheet;
use indexmap::IndexMap;
use tracing::debug;

/// The seven canonical columns a worklog export must provide.
///
/// Matching against raw header text is case-insensitive and exact after
/// trimming; the casing in the file is cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    AccountName,
    IssueKey,
    IssueSummary,
    WorkDescription,
    LoggedHours,
    WorkDate,
    FullName,
}

impl Column {
    /// All canonical columns in schema order
    pub const ALL: [Column; 7] = [
        Column::AccountName,
        Column::IssueKey,
        Column::IssueSummary,
        Column::WorkDescription,
        Column::LoggedHours,
        Column::WorkDate,
        Column::FullName,
    ];

    /// The canonical display title of the column
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Column::AccountName => "Account Name",
            Column::IssueKey => "Issue Key",
            Column::IssueSummary => "Issue summary",
            Column::WorkDescription => "Work Description",
            Column::LoggedHours => "Logged Hours",
            Column::WorkDate => "Work date",
            Column::FullName => "Full name",
        }
    }
}

/// Maps each canonical column to the cell index where its header was found.
///
/// Built once per ingestion by [`locate_header`]; immutable thereafter.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: IndexMap<Column, usize>,
}

impl ColumnMap {
    /// Get the cell index a column was resolved to, if present
    #[must_use]
    pub fn index_of(&self, column: Column) -> Option<usize> {
        self.indices.get(&column).copied()
    }

    /// Number of resolved columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if no columns are resolved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Locate the header row and resolve the column map.
///
/// Scans rows top-to-bottom and selects the first row whose cells, once
/// trimmed and lowercased, contain a match for every canonical column.
/// Rows above the match (titles, blank preamble) are ignored.
///
/// # Errors
///
/// Returns [`IngestError::HeaderNotFound`] listing the required column
/// titles if no row covers all of them.
pub fn locate_header(sheet: &RawSheet) -> Result<(usize, ColumnMap)> {
    for (row_idx, row) in sheet.rows().iter().enumerate() {
        if row.is_empty() {
            continue;
        }

        let normalized: Vec<String> = row
            .iter()
            .map(|cell| cell.as_str().trim().to_lowercase())
            .collect();

        let mut indices = IndexMap::new();
        for column in Column::ALL {
            let needle = column.title().to_lowercase();
            match normalized.iter().position(|cell| *cell == needle) {
                Some(i) => {
                    indices.insert(column, i);
                }
                None => break,
            }
        }

        if indices.len() == Column::ALL.len() {
            debug!(row = row_idx, "header row located");
            return Ok((row_idx, ColumnMap { indices }));
        }
    }

    Err(IngestError::HeaderNotFound {
        required: Column::ALL.iter().map(|c| c.title()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_cells() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.title()).collect()
    }

    #[test]
    fn test_header_in_first_row() {
        let sheet = RawSheet::from_rows(vec![header_cells()]);
        let (index, map) = locate_header(&sheet).unwrap();
        assert_eq!(index, 0);
        assert_eq!(map.index_of(Column::AccountName), Some(0));
        assert_eq!(map.index_of(Column::FullName), Some(6));
    }

    #[test]
    fn test_preamble_rows_are_skipped() {
        let sheet = RawSheet::from_rows(vec![
            vec![],
            vec!["Tempo worklog export"],
            header_cells(),
            vec!["Acme", "AB-1", "Summary", "Desc", "3", "2024-01-02", "Kari"],
        ]);
        let (index, _) = locate_header(&sheet).unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trimmed() {
        let sheet = RawSheet::from_rows(vec![vec![
            "  ACCOUNT NAME ",
            "issue key",
            "Issue Summary",
            "work description",
            "LOGGED HOURS",
            "Work Date",
            "FULL NAME",
        ]]);
        let (index, map) = locate_header(&sheet).unwrap();
        assert_eq!(index, 0);
        assert_eq!(map.len(), Column::ALL.len());
        assert_eq!(map.index_of(Column::LoggedHours), Some(4));
    }

    #[test]
    fn test_column_order_in_file_may_differ_from_schema_order() {
        let sheet = RawSheet::from_rows(vec![vec![
            "Full name",
            "Work date",
            "Logged Hours",
            "Work Description",
            "Issue summary",
            "Issue Key",
            "Account Name",
        ]]);
        let (_, map) = locate_header(&sheet).unwrap();
        assert_eq!(map.index_of(Column::AccountName), Some(6));
        assert_eq!(map.index_of(Column::FullName), Some(0));
    }

    #[test]
    fn test_missing_column_fails_with_required_list() {
        let sheet = RawSheet::from_rows(vec![vec![
            "Account Name",
            "Issue Key",
            "Issue summary",
            "Work Description",
            // no Logged Hours anywhere
            "Work date",
            "Full name",
        ]]);
        let err = locate_header(&sheet).unwrap_err();
        match err {
            IngestError::HeaderNotFound { required } => {
                assert!(required.contains(&"Logged Hours"));
                assert_eq!(required.len(), 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // The display string names the missing column for the user
        let sheet = RawSheet::from_rows(vec![vec!["nothing", "useful"]]);
        let message = locate_header(&sheet).unwrap_err().to_string();
        assert!(message.contains("Logged Hours"));
    }

    #[test]
    fn test_partial_coverage_does_not_match() {
        // A row with six of seven columns must not be selected even if a
        // later row has all seven.
        let mut six = header_cells();
        six.pop();
        let sheet = RawSheet::from_rows(vec![six, header_cells()]);
        let (index, _) = locate_header(&sheet).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_empty_sheet_has_no_header() {
        let sheet = RawSheet::new();
        assert!(matches!(
            locate_header(&sheet),
            Err(IngestError::HeaderNotFound { .. })
        ));
    }
}
