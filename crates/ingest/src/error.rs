use thiserror::Error;

/// Errors that can occur while ingesting a workbook
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("first sheet contains no rows")]
    EmptySheet,

    #[error("no header row found; required columns: {}", .required.join(", "))]
    HeaderNotFound { required: Vec<&'static str> },

    #[error("no valid data rows found below the header")]
    NoDataRows,

    #[error("could not read file as a spreadsheet: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
