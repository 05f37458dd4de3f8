//! Core types flowing through the extraction pipeline

use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Where raw email content was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    LocalPath(PathBuf),
    RemoteUrl(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalPath(path) => write!(f, "{}", path.display()),
            Self::RemoteUrl(url) => write!(f, "{url}"),
        }
    }
}

/// Raw email bytes together with their origin
#[derive(Debug, Clone)]
pub struct RawContent {
    pub origin: Origin,
    pub bytes: Vec<u8>,
}

/// Structured view of an email, as needed for JSON discovery
#[derive(Debug, Clone, Default)]
pub struct ParsedMessage {
    /// Plain text body
    pub body_text: Option<String>,

    /// HTML body
    pub body_html: Option<String>,

    /// Attachments in MIME order
    pub attachments: Vec<Attachment>,
}

impl ParsedMessage {
    /// Body to scan for links: plain text first, HTML otherwise
    #[must_use]
    pub fn scannable_body(&self) -> Option<&str> {
        self.body_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.body_html.as_deref().filter(|h| !h.is_empty()))
    }
}

/// A single attachment
#[derive(Debug, Clone, Default)]
pub struct Attachment {
    /// Declared file name, if any
    pub filename: Option<String>,

    /// Declared MIME type, lowercased
    pub content_type: Option<String>,

    /// Decoded content
    pub content: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: None,
            content_type: None,
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A discovered, not yet formatted payload
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Raw bytes of the first attachment
    Attachment(Vec<u8>),

    /// Body of a link that answered with JSON
    Link { url: String, payload: Value },
}

impl Candidate {
    /// Short origin label for logs
    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Attachment(_) => "attachment",
            Self::Link { .. } => "link",
        }
    }
}

/// Final output of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum JsonResult {
    /// Attachment JSON re-serialized with 2-space indentation
    Pretty(String),

    /// Link JSON, returned as decoded
    Value(Value),
}

impl JsonResult {
    /// Pretty-printed text of the result
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        match self {
            Self::Pretty(text) => text.clone(),
            Self::Value(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Pretty(_) => None,
        }
    }
}

impl fmt::Display for JsonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pretty_string())
    }
}
