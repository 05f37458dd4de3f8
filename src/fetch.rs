//! HTTP fetch boundary

use crate::config::ExtractorConfig;
use crate::error::FetchError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// A fetched remote resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the declared content type is a JSON media type
    ///
    /// Matches `application/json` and any structured `+json` suffix,
    /// ignoring parameters such as `charset`.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            let mime = ct
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
    }
}

/// Performs a single GET for a URL
///
/// Implementations must return an error for non-2xx responses and must not
/// retry.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

/// Blocking `reqwest` implementation of [`Fetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ExtractorConfig) -> Result<Self, FetchError> {
        let builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            // `None` disables reqwest's built-in 30 s default
            .timeout(config.timeout);

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured client
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();

        debug!("Fetched {url}: {} bytes ({content_type:?})", body.len());

        Ok(HttpResponse {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
