//! Fallback-ordered JSON discovery

use crate::attachment::extract_attachment;
use crate::config::ExtractorConfig;
use crate::error::{ExtractError, FetchError, Result};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::format::format_candidate;
use crate::links::LinkScanner;
use crate::parser::parse_message;
use crate::source::ContentSource;
use crate::types::JsonResult;
use tracing::{debug, warn};

/// Message returned when neither attachments nor links carry JSON
pub const NO_JSON_FOUND: &str = "No JSON data found in the email.";

/// Finds the JSON payload carried by an email
///
/// Holds no per-request state; construct once and call [`Self::extract`]
/// for each email.
pub struct JsonExtractor<F> {
    fetcher: F,
}

impl JsonExtractor<HttpFetcher> {
    /// Build an extractor backed by a `reqwest` client
    pub fn from_config(config: &ExtractorConfig) -> std::result::Result<Self, FetchError> {
        Ok(Self::new(HttpFetcher::new(config)?))
    }
}

impl<F: Fetcher> JsonExtractor<F> {
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch the email named by `identifier` and extract its JSON payload
    pub fn extract(&self, identifier: &str) -> Result<JsonResult> {
        let raw = ContentSource::new(&self.fetcher)
            .resolve(identifier)
            .inspect_err(|e| warn!("Could not load {identifier}: {e}"))?;

        debug!("Loaded {} bytes from {}", raw.bytes.len(), raw.origin);

        self.extract_raw(&raw.bytes)
    }

    /// Extract the JSON payload from an already loaded email
    ///
    /// The first attachment takes absolute priority: when present it must
    /// hold valid JSON, and links are not consulted.
    pub fn extract_raw(&self, raw: &[u8]) -> Result<JsonResult> {
        let message = parse_message(raw)?;

        if let Some(candidate) = extract_attachment(&message) {
            return format_candidate(candidate)
                .inspect_err(|e| warn!("Attachment is not valid JSON: {e}"));
        }

        debug!("No attachment candidate, scanning links");

        match LinkScanner::new(&self.fetcher).scan(&message) {
            Some(candidate) => format_candidate(candidate),
            None => {
                warn!("{NO_JSON_FOUND}");
                Err(ExtractError::NotFound(NO_JSON_FOUND.to_string()))
            }
        }
    }
}
