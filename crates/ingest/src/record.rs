use crate::schema::Column;
use serde::{Deserialize, Serialize};

/// One validated, normalized worklog row.
///
/// Every field is trimmed. Work Description additionally has line breaks
/// and internal whitespace runs collapsed to single spaces, so consumers
/// never see embedded newlines in that field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub account_name: String,
    pub issue_key: String,
    pub issue_summary: String,
    pub work_description: String,
    pub logged_hours: String,
    pub work_date: String,
    pub full_name: String,
}

impl InvoiceRecord {
    /// A record is kept only if at least one key field carries data;
    /// visually-empty spreadsheet rows are dropped as noise, not errors.
    #[must_use]
    pub fn is_admissible(&self) -> bool {
        !self.account_name.is_empty()
            || !self.issue_key.is_empty()
            || !self.work_description.is_empty()
    }

    /// Get a field by its canonical column
    #[must_use]
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::AccountName => &self.account_name,
            Column::IssueKey => &self.issue_key,
            Column::IssueSummary => &self.issue_summary,
            Column::WorkDescription => &self.work_description,
            Column::LoggedHours => &self.logged_hours,
            Column::WorkDate => &self.work_date,
            Column::FullName => &self.full_name,
        }
    }
}

/// Collapse CRLF/LF/CR and any run of whitespace to a single space, trimmed.
pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
