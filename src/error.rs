//! Failure taxonomy for fetching and extracting a single source.
//!
//! Every variant is contained per source by the pipeline: it is logged with
//! the source name and the source contributes no records.

use std::error::Error as StdError;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Not `https`, or the host is outside the allow-list.
    #[error("refusing untrusted url: {0}")]
    UntrustedUrl(String),

    #[error("certificate validation failed: {0}")]
    Certificate(String),

    /// Timeout, connection failure, non-2xx status or unreadable body.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Classify a `reqwest` failure.
    ///
    /// Certificate problems surface deep in the source chain (hyper → io →
    /// rustls), so the chain is inspected before the coarse `reqwest` kinds.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let detail = error_chain(&err);
        if mentions_certificate(&err) {
            FetchError::Certificate(detail)
        } else if err.is_timeout() {
            FetchError::Transport(format!("timed out: {detail}"))
        } else if err.is_connect()
            || err.is_request()
            || err.is_status()
            || err.is_redirect()
            || err.is_body()
            || err.is_decode()
        {
            FetchError::Transport(detail)
        } else {
            FetchError::Unexpected(detail)
        }
    }
}

/// Whether any error in the source chain reports a certificate problem.
pub fn mentions_certificate(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.to_string().to_ascii_lowercase().contains("certificate") {
            return true;
        }
        current = e.source();
    }
    false
}

/// Render an error and all of its sources as `outer: inner: ...`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut current = err.source();
    while let Some(e) = current {
        let msg = e.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        current = e.source();
    }
    out
}
