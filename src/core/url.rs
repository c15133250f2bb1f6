//! Absolute URL building from the configured site.

use crate::core::config::SiteConfig;
use crate::core::error::{KewlError, Result};

/// Build `scheme://domain/path/` for `path`.
///
/// The scheme comes from `site.url_scheme`, which follows the
/// environment's current scheme (`KEWL_URL_SCHEME`) and defaults to
/// `https`. The result always has exactly one trailing slash.
///
/// # Examples
///
/// ```
/// use kewl::core::config::SiteConfig;
/// use kewl::core::url::build_absolute_url;
///
/// let site = SiteConfig { domain: "example.com".to_string(), ..Default::default() };
/// assert_eq!(build_absolute_url(&site, "/a").unwrap(), "https://example.com/a/");
/// ```
pub fn build_absolute_url(site: &SiteConfig, path: &str) -> Result<String> {
    let domain = site.domain.trim().trim_end_matches('/');
    if domain.is_empty() {
        return Err(KewlError::SiteNotConfigured);
    }

    let path = path.trim().trim_end_matches('/');
    let separator = if path.starts_with('/') { "" } else { "/" };

    if path.is_empty() {
        return Ok(format!("{}://{domain}/", site.url_scheme));
    }
    Ok(format!("{}://{domain}{separator}{path}/", site.url_scheme))
}
