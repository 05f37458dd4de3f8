//! Resolution of a path-or-URL identifier into raw email content

use crate::error::{ExtractError, Result};
use crate::fetch::Fetcher;
use crate::types::{Origin, RawContent};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Whether an identifier names a remote HTTP(S) resource
#[must_use]
pub fn is_remote(identifier: &str) -> bool {
    let lower = identifier
        .get(..8)
        .unwrap_or(identifier)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Reads email content from the local file system or over HTTP
pub struct ContentSource<F> {
    fetcher: F,
}

impl<F: Fetcher> ContentSource<F> {
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch the raw email named by `identifier`
    ///
    /// A single attempt is made. A missing local file is reported as
    /// [`ExtractError::NotFound`], anything else as [`ExtractError::Fetch`].
    pub fn resolve(&self, identifier: &str) -> Result<RawContent> {
        if is_remote(identifier) {
            let response = self
                .fetcher
                .get(identifier)
                .map_err(|e| ExtractError::fetch(identifier, e))?;

            debug!("Resolved remote email {identifier}");

            return Ok(RawContent {
                origin: Origin::RemoteUrl(identifier.to_string()),
                bytes: response.body,
            });
        }

        let path = PathBuf::from(identifier);
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::NotFound(format!("File not found: {identifier}")),
            _ => ExtractError::fetch(identifier, e),
        })?;

        debug!("Resolved local email {}", path.display());

        Ok(RawContent {
            origin: Origin::LocalPath(path),
            bytes,
        })
    }
}
