//! Server URL syntax check.
//!
//! Pure string analysis on top of the `url` crate: the scheme must be one of
//! `http`, `https` or `ftp`, and the host must be an IP literal, a local
//! single-label hostname, or a dotted domain whose top-level label is
//! delegated in the root zone (see [`super::tld`]) or local. Extra top-level
//! domains are passed in per call and never stored globally.

use tracing::trace;
use url::{Host, Url};

use super::tld::is_delegated;

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Local-only names accepted alongside the delegated domains.
const LOCAL_TLDS: [&str; 2] = ["localhost", "localdomain"];

/// Checks literal server URLs once their placeholders are substituted.
#[derive(Debug, Clone, Copy)]
pub struct ServerUrlValidator<'a> {
    additional_tlds: &'a [String],
}

impl<'a> ServerUrlValidator<'a> {
    #[must_use]
    pub const fn new(additional_tlds: &'a [String]) -> Self {
        Self { additional_tlds }
    }

    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        // `Url::parse` silently trims and strips whitespace; the raw text must not carry any.
        if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
            return false;
        }

        let Ok(parsed) = Url::parse(candidate) else {
            trace!(url = candidate, "server url does not parse");
            return false;
        };

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            trace!(url = candidate, scheme = parsed.scheme(), "unsupported scheme");
            return false;
        }

        match parsed.host() {
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
            Some(Host::Domain(domain)) => self.is_valid_domain(domain),
            None => false,
        }
    }

    fn is_valid_domain(&self, domain: &str) -> bool {
        let domain = domain.strip_suffix('.').unwrap_or(domain);
        let labels: Vec<&str> = domain.split('.').collect();
        if !labels.iter().all(|label| is_valid_label(label)) {
            trace!(domain, "malformed host label");
            return false;
        }

        match labels.as_slice() {
            [] => false,
            // Unqualified hostnames are local names (`localhost`, `api-gateway`).
            [_single] => true,
            [.., tld] => self.is_known_tld(tld),
        }
    }

    fn is_known_tld(&self, tld: &str) -> bool {
        let tld = tld.to_ascii_lowercase();
        if LOCAL_TLDS.contains(&tld.as_str()) || is_delegated(&tld) {
            return true;
        }

        let known = self.additional_tlds.iter().any(|extra| {
            let extra = extra.trim();
            extra
                .strip_prefix('.')
                .unwrap_or(extra)
                .eq_ignore_ascii_case(&tld)
        });
        if !known {
            trace!(tld = tld.as_str(), "unknown top-level domain");
        }
        known
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
