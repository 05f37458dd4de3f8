//! Flat summaries of SES-style delivery verdicts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing time above which a delivery counts as delayed
pub const DELAY_THRESHOLD_MILLIS: u64 = 1000;

/// Inbound-mail notification as delivered by SES
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub ses: SesPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SesPayload {
    pub mail: Mail,
    pub receipt: Receipt,
}

/// Mail section of a delivery event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mail {
    pub timestamp: String,
    pub source: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub destination: Vec<String>,
}

/// Receipt section of a delivery event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub processing_time_millis: u64,
    #[serde(default)]
    pub recipients: Vec<String>,
    pub spam_verdict: Verdict,
    pub virus_verdict: Verdict,
    pub spf_verdict: Verdict,
    pub dkim_verdict: Verdict,
    pub dmarc_verdict: Verdict,
    #[serde(default)]
    pub dmarc_policy: Option<String>,
}

/// A single pass/fail check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub status: String,
}

impl Verdict {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == "PASS"
    }
}

/// Flat record for one delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySummary {
    /// Spam check passed
    pub spam: bool,

    /// Virus check passed
    pub virus: bool,

    /// SPF, DKIM and DMARC all passed
    pub dns: bool,

    /// Month the mail was received, e.g. "June"
    #[serde(rename = "mes")]
    pub month: Option<String>,

    #[serde(rename = "retrasado")]
    pub delayed: bool,

    /// Local part of the sender
    #[serde(rename = "emisor")]
    pub sender: String,

    /// Local parts of the recipients
    #[serde(rename = "receptor")]
    pub recipients: Vec<String>,
}

impl DeliverySummary {
    #[must_use]
    pub fn from_record(record: &EventRecord) -> Self {
        let SesPayload { mail, receipt } = &record.ses;

        Self {
            spam: receipt.spam_verdict.passed(),
            virus: receipt.virus_verdict.passed(),
            dns: receipt.spf_verdict.passed()
                && receipt.dkim_verdict.passed()
                && receipt.dmarc_verdict.passed(),
            month: month_name(&mail.timestamp),
            delayed: receipt.processing_time_millis > DELAY_THRESHOLD_MILLIS,
            sender: local_part(&mail.source).to_string(),
            recipients: mail
                .destination
                .iter()
                .map(|d| local_part(d).to_string())
                .collect(),
        }
    }
}

/// One summary per record, in record order
#[must_use]
pub fn summarize(event: &EmailEvent) -> Vec<DeliverySummary> {
    event
        .records
        .iter()
        .map(DeliverySummary::from_record)
        .collect()
}

/// English month name of an RFC 3339 timestamp, in UTC
#[must_use]
pub fn month_name(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).format("%B").to_string())
}

/// Text before the first `@`, or the whole address
#[must_use]
pub fn local_part(address: &str) -> &str {
    address.split('@').next().unwrap_or(address)
}
