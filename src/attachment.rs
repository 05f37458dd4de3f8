//! JSON candidates carried as attachments

use crate::types::{Candidate, ParsedMessage};
use tracing::debug;

/// Take the first attachment as the JSON candidate
///
/// Later attachments are never inspected, even when the first one is empty.
#[must_use]
pub fn extract_attachment(message: &ParsedMessage) -> Option<Candidate> {
    let first = message.attachments.first()?;

    if first.is_empty() {
        debug!("First attachment is empty");
        return None;
    }

    debug!(
        "Using first attachment {:?} ({} bytes)",
        first.filename,
        first.content.len()
    );

    Some(Candidate::Attachment(first.content.clone()))
}
