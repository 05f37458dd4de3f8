//! MIME decoding into a [`ParsedMessage`]

use crate::error::{ExtractError, Result};
use crate::types::{Attachment, ParsedMessage};
use mailparse::{DispositionType, ParsedMail};
use tracing::debug;

/// Parse raw email bytes into the structure the pipeline works on
pub fn parse_message(raw: &[u8]) -> Result<ParsedMessage> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut message = ParsedMessage::default();
    collect_parts(&parsed, &mut message);

    debug!(
        "Parsed message: text={} html={} attachments={}",
        message.body_text.is_some(),
        message.body_html.is_some(),
        message.attachments.len()
    );

    Ok(message)
}

fn collect_parts(part: &ParsedMail, message: &mut ParsedMessage) {
    if !part.subparts.is_empty() {
        for child in &part.subparts {
            collect_parts(child, message);
        }
        return;
    }

    let content_type = part.ctype.mimetype.to_lowercase();
    let disposition = part.get_content_disposition();
    let filename = disposition
        .params
        .get("filename")
        .or_else(|| part.ctype.params.get("name"))
        .cloned();

    let is_body_type = content_type == "text/plain" || content_type == "text/html";
    let is_attachment = matches!(disposition.disposition, DispositionType::Attachment)
        || filename.is_some()
        || !is_body_type;

    if is_attachment {
        match part.get_body_raw() {
            Ok(content) => message.attachments.push(Attachment {
                filename,
                content_type: Some(content_type),
                content,
            }),
            Err(e) => debug!("Skipping undecodable attachment part: {e}"),
        }
        return;
    }

    let Ok(body) = part.get_body() else {
        debug!("Skipping undecodable {content_type} part");
        return;
    };

    if content_type == "text/plain" && message.body_text.is_none() {
        message.body_text = Some(body);
    } else if content_type == "text/html" && message.body_html.is_none() {
        message.body_html = Some(body);
    }
}
