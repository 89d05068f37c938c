//! Allow-list check for outbound requests.
//!
//! Only `https` URLs whose host is one of [`ALLOWED_DOMAINS`], or a
//! subdomain of one, may be fetched. The same check guards every redirect
//! hop (see [`crate::fetch`]).

use url::{Host, Url};

/// Domains the fetcher may contact.
pub const ALLOWED_DOMAINS: &[&str] = &["prsindia.org", "loksabha.nic.in", "sansad.in"];

/// Returns `true` if `url` is `https` and points at an allow-listed domain.
///
/// Unparseable input yields `false`.
pub fn is_allowed_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => is_allowed(&parsed),
        Err(_) => false,
    }
}

/// [`is_allowed_url`] for an already parsed URL.
pub fn is_allowed(url: &Url) -> bool {
    if url.scheme() != "https" {
        return false;
    }
    // IP literals never match a domain.
    let host = match url.host() {
        Some(Host::Domain(host)) => host.trim_end_matches('.').to_ascii_lowercase(),
        _ => return false,
    };

    ALLOWED_DOMAINS.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.'))
    })
}
