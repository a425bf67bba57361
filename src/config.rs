use crate::constants::site;
use anyhow::{anyhow, Result};
use std::env;

/// Site-level configuration consumed by the SEO resolver.
///
/// Defaults come from the constant tables; `from_env` lets a deployment
/// override the identity fields without a rebuild.
/// Configuration priority: Environment variables > Defaults
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Company name appended to generated titles
    pub name: String,
    /// Canonical site origin (absolute, no trailing slash)
    pub url: String,
    /// Fallback page title
    pub default_title: String,
    /// Fallback meta description
    pub description: String,
    /// Default Open Graph preview image URL
    pub og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: site::NAME.to_string(),
            url: site::URL.to_string(),
            default_title: site::DEFAULT_TITLE.to_string(),
            description: site::DESCRIPTION.to_string(),
            og_image: site::OG_IMAGE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults. URL-shaped fields are validated.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let url = env::var("SITE_URL").unwrap_or(defaults.url);
        validate_url(&url, "SITE_URL")?;

        let og_image = env::var("SITE_OG_IMAGE").unwrap_or(defaults.og_image);
        validate_url(&og_image, "SITE_OG_IMAGE")?;

        Ok(Self {
            name: env::var("SITE_NAME").unwrap_or(defaults.name),
            url: normalize_origin(&url),
            default_title: env::var("SITE_DEFAULT_TITLE").unwrap_or(defaults.default_title),
            description: env::var("SITE_DESCRIPTION").unwrap_or(defaults.description),
            og_image,
        })
    }
}

/// Strip a trailing slash so canonical-URL concatenation stays well-defined
fn normalize_origin(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }

    // Basic scheme validation
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constant_tables() {
        let config = SiteConfig::default();
        assert_eq!(config.name, site::NAME);
        assert_eq!(config.url, site::URL);
        assert!(!config.url.ends_with('/'));
    }

    #[test]
    fn validate_url_rejects_bare_hosts() {
        assert!(validate_url("https://example.com", "X").is_ok());
        assert!(validate_url("http://example.com", "X").is_ok());
        assert!(validate_url("example.com", "X").is_err());
        assert!(validate_url("", "X").is_err());
    }

    #[test]
    fn normalize_origin_strips_trailing_slash() {
        assert_eq!(normalize_origin("https://a.com/"), "https://a.com");
        assert_eq!(normalize_origin("https://a.com"), "https://a.com");
    }

    #[test]
    fn env_overrides_win_over_defaults() {
        env::set_var("SITE_URL", "https://staging.catalystdigital.dev/");
        let config = SiteConfig::from_env().unwrap();
        env::remove_var("SITE_URL");

        assert_eq!(config.url, "https://staging.catalystdigital.dev");
        // untouched fields keep their defaults
        assert_eq!(config.name, site::NAME);
    }
}
