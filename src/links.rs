//! JSON candidates referenced by links in the message body

use crate::fetch::{Fetcher, HttpResponse};
use crate::types::{Candidate, ParsedMessage};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use tracing::debug;

static URL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Every HTTP(S) token in `text`, in order of appearance, duplicates kept
#[must_use]
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Why a link was passed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The GET failed or answered with a non-success status
    Fetch(String),

    /// The body was not an object or array
    NotJson,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(cause) => write!(f, "fetch failed: {cause}"),
            Self::NotJson => write!(f, "not JSON"),
        }
    }
}

/// A link that was tried and rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLink {
    pub url: String,
    pub reason: SkipReason,
}

/// Outcome of a full scan
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// The winning link, if any
    pub candidate: Option<Candidate>,

    /// Links tried before the winner (or all of them), in order
    pub skipped: Vec<SkippedLink>,
}

/// Walks body links in order and returns the first that yields JSON
pub struct LinkScanner<F> {
    fetcher: F,
}

impl<F: Fetcher> LinkScanner<F> {
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// First link in body order answering with JSON
    pub fn scan(&self, message: &ParsedMessage) -> Option<Candidate> {
        self.scan_report(message).candidate
    }

    /// Like [`Self::scan`], also reporting every rejected link
    pub fn scan_report(&self, message: &ParsedMessage) -> ScanReport {
        let mut report = ScanReport::default();

        let Some(body) = message.scannable_body() else {
            debug!("No body to scan for links");
            return report;
        };

        for url in find_urls(body) {
            let response = match self.fetcher.get(url) {
                Ok(response) => response,
                Err(e) => {
                    debug!("Skipping link {url}: {e}");
                    report.skipped.push(SkippedLink {
                        url: url.to_string(),
                        reason: SkipReason::Fetch(e.to_string()),
                    });
                    continue;
                }
            };

            if let Some(payload) = json_payload(&response) {
                debug!("Found JSON at {url}");
                report.candidate = Some(Candidate::Link {
                    url: url.to_string(),
                    payload,
                });
                return report;
            }

            debug!("Skipping link {url}: not JSON");
            report.skipped.push(SkippedLink {
                url: url.to_string(),
                reason: SkipReason::NotJson,
            });
        }

        report
    }
}

/// Decode a response into a JSON value if it qualifies
///
/// A JSON content type is accepted whatever the body holds; a body that
/// does not decode is kept as a string. Other content types qualify only
/// when the body decodes to an object or array.
fn json_payload(response: &HttpResponse) -> Option<Value> {
    let decoded = serde_json::from_slice::<Value>(&response.body);

    if response.is_json() {
        return Some(decoded.unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&response.body).into_owned())
        }));
    }

    decoded
        .ok()
        .filter(|value| value.is_object() || value.is_array())
}
