//! Browser boundary for tally.
//!
//! Exposes the ingestion pipeline and review-session state to the popup UI.
//! Parsing takes the file bytes the page already buffered and returns a
//! plain `{success, data?, error?}` object; review state lives in a
//! [`Review`] handle the page keeps for the lifetime of one record set.

use serde::Serialize;
use tally_ingest::{parse_workbook, InvoiceRecord};
use tally_review::{MessagePool, ReviewSession};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log!("tally WASM initialized");
}

/// Outcome of one ingestion call, mirroring the UI's expectations:
/// either a full record set or a single display string, never both.
#[derive(Serialize)]
pub struct ParseOutcome {
    pub success: bool,
    pub data: Option<Vec<InvoiceRecord>>,
    pub error: Option<String>,
}

fn parse_outcome(data: &[u8]) -> ParseOutcome {
    match parse_workbook(data) {
        Ok(records) => ParseOutcome {
            success: true,
            data: Some(records),
            error: None,
        },
        Err(e) => ParseOutcome {
            success: false,
            data: None,
            error: Some(e.to_string()),
        },
    }
}

/// Parse a worklog export held in a byte buffer.
#[wasm_bindgen]
pub fn parse_workbook_bytes(data: &[u8]) -> Result<JsValue, JsValue> {
    let outcome = parse_outcome(data);
    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Review state for the record set currently on screen.
#[wasm_bindgen]
pub struct Review {
    session: ReviewSession,
    messages: MessagePool,
}

impl Default for Review {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Review {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Review {
            session: ReviewSession::new(),
            messages: MessagePool::new(),
        }
    }

    /// Ingest a new file and replace the records under review.
    ///
    /// Done marks from the previous set are cleared; positions are not
    /// stable across files. Returns the same outcome object as
    /// [`parse_workbook_bytes`].
    pub fn load(&mut self, data: &[u8]) -> Result<JsValue, JsValue> {
        let outcome = parse_outcome(data);
        match &outcome.data {
            Some(records) => self.session.replace_records(records.clone()),
            None => self.session.replace_records(Vec::new()),
        }
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The records under review, in their sorted order.
    pub fn records(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.records())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Toggle the done mark on a row; returns the new state, or undefined
    /// when the position is out of range.
    pub fn toggle_done(&mut self, index: usize) -> Option<bool> {
        self.session.toggle_done(index)
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.session.is_done(index)
    }

    pub fn done_count(&self) -> usize {
        self.session.done_count()
    }

    pub fn record_count(&self) -> usize {
        self.session.record_count()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Pick a confirmation message; the page supplies the entropy.
    pub fn confirmation(&self, seed: u32) -> Option<String> {
        self.messages
            .pick(u64::from(seed))
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_outcome;

    #[test]
    fn parse_outcome_reports_decode_errors() {
        let outcome = parse_outcome(b"not a workbook");
        assert!(!outcome.success);
        assert!(outcome.data.is_none());
        let error = outcome.error.expect("error should be present");
        assert!(error.contains("spreadsheet"));
    }
}
