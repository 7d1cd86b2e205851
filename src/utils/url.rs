//! External link validation.
//!
//! Item metadata is user supplied, so its `external_url` is only rendered as a
//! link when it points at an allowlisted domain over http(s).

use thiserror::Error;

use crate::config::ALLOWED_REDIRECT_DOMAINS;

/// Why an external URL was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,
    #[error("URL must start with http:// or https://")]
    InvalidProtocol,
    #[error("URL has no host")]
    NoHost,
    #[error("Domain '{0}' is not allowed")]
    DomainNotAllowed(String),
}

/// Validate an item's external link against [`ALLOWED_REDIRECT_DOMAINS`].
pub fn validate_external_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let host = extract_host(url)?;
    if !is_domain_allowed(&host, ALLOWED_REDIRECT_DOMAINS) {
        return Err(UrlValidationError::DomainNotAllowed(host));
    }

    Ok(url.to_string())
}

/// Lowercased host without `www.` or port.
fn extract_host(url: &str) -> Result<String, UrlValidationError> {
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or(UrlValidationError::InvalidProtocol)?;

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    // Userinfo (`user@host`) is dropped so it cannot disguise the real host.
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = host_port.split(':').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return Err(UrlValidationError::NoHost);
    }
    Ok(host.to_string())
}

/// Exact or subdomain match against `allowed`.
fn is_domain_allowed(host: &str, allowed: &[&str]) -> bool {
    allowed
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_external_url("https://github.com/user/repo").is_ok());
        assert!(validate_external_url("https://www.opensea.io/assets/1").is_ok());
        assert!(validate_external_url("https://sepolia.etherscan.io/tx/0x1").is_ok());
        assert!(validate_external_url("HTTP://X.com/user").is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(validate_external_url("  "), Err(UrlValidationError::Empty));
        assert_eq!(
            validate_external_url("javascript:alert(1)"),
            Err(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("ipfs://bafy"),
            Err(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("https://evil.com/phishing"),
            Err(UrlValidationError::DomainNotAllowed("evil.com".to_string()))
        );
        assert_eq!(validate_external_url("https://"), Err(UrlValidationError::NoHost));
    }

    #[test]
    fn test_lookalike_domains_rejected() {
        assert!(validate_external_url("https://github.com.evil.com/").is_err());
        assert!(validate_external_url("https://notgithub.com/").is_err());
        assert!(validate_external_url("https://github.com@evil.com/").is_err());
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://api.github.com:443/repos"),
            Ok("api.github.com".to_string())
        );
        assert_eq!(extract_host("https://www.x.com?q=1"), Ok("x.com".to_string()));
    }
}
