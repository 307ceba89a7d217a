//! Worklog ingestion module for tally
//!
//! Converts a raw worklog export (the legacy binary or OOXML spreadsheet
//! formats) into an ordered sequence of validated, normalized invoice
//! records, or a single descriptive failure. The pipeline is synchronous
//! and owns no shared state: every call decodes its own sheet and produces
//! its own immutable record set, so independent ingestions never interact.
//!
//! # Examples
//!
//! ## Parsing an export held in memory
//!
//! ```no_run
//! use tally_ingest::parse_workbook;
//!
//! let bytes = std::fs::read("worklog.xlsx").unwrap();
//! let records = parse_workbook(&bytes).unwrap();
//!
//! // Records are sorted by account name, case-insensitively.
//! for record in &records {
//!     println!("{}: {}h", record.account_name, record.logged_hours);
//! }
//! ```
//!
//! ## Running the stages individually
//!
//! ```
//! use tally_ingest::{extract_rows, locate_header, Column, RawSheet};
//!
//! let sheet = RawSheet::from_rows(vec![
//!     vec!["Tempo export"],
//!     Column::ALL.iter().map(|c| c.title()).collect(),
//!     vec!["Acme", "AB-1", "Fix login", "Fixed it", "3", "2024-01-02", "Kari"],
//! ]);
//!
//! let (header_index, columns) = locate_header(&sheet).unwrap();
//! assert_eq!(header_index, 1);
//!
//! let records = extract_rows(&sheet, header_index, &columns);
//! assert_eq!(records[0].issue_key, "AB-1");
//! ```
//!
//! # Header discovery
//!
//! The header is the first row whose cells, trimmed and case-folded,
//! contain every canonical column title. Title rows or blank rows above it
//! are tolerated as preamble. A sheet with no such row fails with
//! [`IngestError::HeaderNotFound`], whose message lists the required
//! titles for the user.

mod cell;
mod error;
mod pipeline;
mod record;
mod schema;
mod sheet;
mod workbook;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export ingestion error types.
pub use error::{IngestError, Result};
/// Re-export pipeline stages and orchestrator.
pub use pipeline::{extract_rows, parse_workbook, sort_by_account};
/// Re-export record type.
pub use record::InvoiceRecord;
/// Re-export schema types and header discovery.
pub use schema::{locate_header, Column, ColumnMap};
/// Re-export raw sheet type.
pub use sheet::RawSheet;
/// Re-export workbook decoding.
pub use workbook::decode_first_sheet;
