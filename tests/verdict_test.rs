use email_json_extract::verdict::{EmailEvent, local_part, month_name, summarize};
use serde_json::json;

fn event(spam: &str, spf: &str, millis: u64, timestamp: &str) -> EmailEvent {
    serde_json::from_value(json!({
        "Records": [{
            "eventSource": "aws:ses",
            "ses": {
                "mail": {
                    "timestamp": timestamp,
                    "source": "sender@shop.example",
                    "messageId": "abc123",
                    "destination": ["alice@example.com", "bob@example.com"],
                    "headersTruncated": false
                },
                "receipt": {
                    "timestamp": timestamp,
                    "processingTimeMillis": millis,
                    "recipients": ["alice@example.com"],
                    "spamVerdict": {"status": spam},
                    "virusVerdict": {"status": "PASS"},
                    "spfVerdict": {"status": spf},
                    "dkimVerdict": {"status": "PASS"},
                    "dmarcVerdict": {"status": "PASS"},
                    "dmarcPolicy": "reject",
                    "action": {"type": "Lambda"}
                }
            }
        }]
    }))
    .unwrap()
}

#[test]
fn test_summarize_all_pass() {
    let summaries = summarize(&event("PASS", "PASS", 300, "2023-06-11T20:53:34.123Z"));

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert!(summary.spam);
    assert!(summary.virus);
    assert!(summary.dns);
    assert!(!summary.delayed);
    assert_eq!(summary.month.as_deref(), Some("June"));
    assert_eq!(summary.sender, "sender");
    assert_eq!(summary.recipients, vec!["alice", "bob"]);
}

#[test]
fn test_summarize_failed_checks_and_delay() {
    let summary = &summarize(&event("FAIL", "SOFTFAIL", 1001, "2024-01-02T00:00:00Z"))[0];

    assert!(!summary.spam);
    assert!(!summary.dns);
    assert!(summary.delayed);
}

#[test]
fn test_delay_threshold_is_exclusive() {
    let summary = &summarize(&event("PASS", "PASS", 1000, "2024-01-02T00:00:00Z"))[0];

    assert!(!summary.delayed);
}

#[test]
fn test_summary_wire_keys() {
    let summary = &summarize(&event("PASS", "PASS", 10, "2024-12-31T23:00:00Z"))[0];
    let value = serde_json::to_value(summary).unwrap();

    assert_eq!(
        value,
        json!({
            "spam": true,
            "virus": true,
            "dns": true,
            "mes": "December",
            "retrasado": false,
            "emisor": "sender",
            "receptor": ["alice", "bob"]
        })
    );
}

#[test]
fn test_month_name() {
    assert_eq!(month_name("2024-03-01T10:00:00+02:00").as_deref(), Some("March"));
    assert_eq!(month_name("2024-03-01T01:00:00+02:00").as_deref(), Some("February"));
    assert!(month_name("yesterday").is_none());
}

#[test]
fn test_local_part() {
    assert_eq!(local_part("user@example.com"), "user");
    assert_eq!(local_part("no-at-sign"), "no-at-sign");
    assert_eq!(local_part("@example.com"), "");
}
