// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email JSON Extractor
//!
//! Finds the JSON payload carried by an inbound email and pretty-prints it.
//!
//! The email is loaded from a local path or an HTTP(S) URL. The first
//! attachment is tried first; when there is none, every link in the body is
//! fetched in order until one answers with JSON.
//!
//! # Features
//!
//! - Strict attachment-over-link priority
//! - Per-link failure isolation during link scanning
//! - Typed errors for missing content, transport failures and bad JSON
//! - Flat summaries of SES delivery verdicts
//!
//! # Example
//!
//! ```no_run
//! use email_json_extract::{ExtractorConfig, JsonExtractor};
//!
//! let extractor = JsonExtractor::from_config(&ExtractorConfig::default()).unwrap();
//! let json = extractor.extract("/var/mail/inbound/receipt.eml").unwrap();
//!
//! println!("{json}");
//! ```

mod attachment;
mod config;
mod error;
mod fetch;
mod format;
mod links;
mod parser;
mod pipeline;
mod source;
mod types;
pub mod verdict;

pub use attachment::extract_attachment;
pub use config::{DEFAULT_USER_AGENT, ExtractorConfig};
pub use error::{ExtractError, FetchError, Result};
pub use fetch::{Fetcher, HttpFetcher, HttpResponse};
pub use format::{format_candidate, pretty_print};
pub use links::{LinkScanner, ScanReport, SkipReason, SkippedLink, find_urls};
pub use parser::parse_message;
pub use pipeline::{JsonExtractor, NO_JSON_FOUND};
pub use source::{ContentSource, is_remote};
pub use types::*;
