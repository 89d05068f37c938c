//! HTTP retrieval of source pages.
//!
//! # Architecture
//!
//! - [`Fetcher`]: the seam the pipeline depends on, so tests can substitute
//!   canned responses and failures
//! - [`HttpFetcher`]: the `reqwest` implementation used in production
//!
//! # Request policy
//!
//! - Single attempt, no retries or backoff
//! - Bounded wait (30 seconds unless configured otherwise)
//! - Fixed [`USER_AGENT`]
//! - Certificates verified by rustls against the bundled web PKI roots
//! - `https` only; every redirect hop must pass the allow-list

use crate::error::FetchError;
use crate::utils::truncate_for_log;
use crate::validate::{is_allowed, is_allowed_url};
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Client identifier sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_REDIRECTS: usize = 5;

/// Retrieves the body of a page.
pub trait Fetcher {
    /// Fetch `url` and return its body text.
    ///
    /// A non-2xx response is an error, never a body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    https_only: bool,
}

impl HttpFetcher {
    /// Build the production client.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Self::build(timeout, true)
    }

    fn build(timeout: Duration, https_only: bool) -> Result<Self, FetchError> {
        let redirects = Policy::custom(|attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.error(format!("more than {MAX_REDIRECTS} redirects"))
            } else if !is_allowed(attempt.url()) {
                let target = attempt.url().to_string();
                attempt.error(format!("redirect to untrusted url {target}"))
            } else {
                attempt.follow()
            }
        });

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .use_rustls_tls()
            .tls_built_in_root_certs(true)
            .https_only(https_only)
            .redirect(redirects)
            .build()
            .map_err(|e| FetchError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, https_only })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if self.https_only && !is_allowed_url(url) {
            return Err(FetchError::UntrustedUrl(url.to_string()));
        }

        let t0 = Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(
                %status,
                elapsed_ms = t0.elapsed().as_millis(),
                body_preview = %truncate_for_log(&body, 200),
                "Non-success status"
            );
            return Err(FetchError::Transport(format!("HTTP {status} from {url}")));
        }

        let body = resp.text().await.map_err(FetchError::from_reqwest)?;
        debug!(
            %status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "Fetched page"
        );
        Ok(body)
    }
}
