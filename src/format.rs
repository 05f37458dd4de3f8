//! Validation and pretty-printing of discovered payloads

use crate::error::Result;
use crate::types::{Candidate, JsonResult};
use serde_json::Value;

/// Turn a candidate into the pipeline result
///
/// Attachment bytes are parsed and re-serialized with 2-space indentation.
/// Link payloads are already decoded and pass through unchanged.
pub fn format_candidate(candidate: Candidate) -> Result<JsonResult> {
    match candidate {
        Candidate::Attachment(bytes) => pretty_print(&bytes).map(JsonResult::Pretty),
        Candidate::Link { payload, .. } => Ok(JsonResult::Value(payload)),
    }
}

/// Parse `bytes` as JSON and pretty-print it
pub fn pretty_print(bytes: &[u8]) -> Result<String> {
    let text = String::from_utf8_lossy(bytes);
    let value: Value = serde_json::from_str(&text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
