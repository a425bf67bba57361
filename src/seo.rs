//! Per-page SEO metadata resolution
//!
//! One [`SeoConfig`] is produced per page render by layering three sources,
//! highest precedence first: caller overrides, the static per-page entry,
//! then the global site defaults. Unknown page names are not an error; they
//! simply resolve to the global defaults.

use crate::config::SiteConfig;
use crate::constants::{keywords, site};
use serde::Serialize;
use serde_json::{Map, Value};

/// Resolved metadata for a single rendered page. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    /// Comma-joined keyword list
    pub keywords: String,
    /// Absolute canonical URL
    pub canonical: String,
    pub og_image: String,
    pub og_type: String,
    pub twitter_card: String,
    /// Additional override fields carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Caller-supplied overrides; every present field wins over both the page
/// entry and the global defaults.
#[derive(Debug, Clone, Default)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    /// Any further fields, passed through verbatim. String values under a
    /// known field name shadow the computed field instead.
    pub extra: Map<String, Value>,
}

/// Static per-page SEO entry
#[derive(Debug, Clone, Copy)]
pub struct PageSeo {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Look up the static entry for a page name. `None` for unknown pages.
pub fn page_entry(page_name: &str) -> Option<&'static PageSeo> {
    match page_name {
        "home" => Some(&HOME),
        "services" => Some(&SERVICES),
        "industries" => Some(&INDUSTRIES),
        "training" => Some(&TRAINING),
        "about" => Some(&ABOUT),
        "contact" => Some(&CONTACT),
        _ => None,
    }
}

static HOME: PageSeo = PageSeo {
    title: "AI Strategy & Digital Transformation Consulting",
    description: "Catalyst Digital Consulting helps mid-market companies turn AI \
        strategy into working systems. Experienced consultants, measurable \
        outcomes, and training your teams keep.",
    keywords: &[
        "digital transformation consulting",
        "AI strategy",
        "business process automation",
    ],
};

static SERVICES: PageSeo = PageSeo {
    title: "Consulting Services: AI Strategy, Automation & Analytics",
    description: "From AI readiness assessments to full automation rollouts, our \
        consultants scope, build, and hand over systems your team can run. \
        Fixed-fee engagements, no lock-in.",
    keywords: &[
        "AI readiness assessment",
        "automation consulting",
        "analytics implementation",
    ],
};

static INDUSTRIES: PageSeo = PageSeo {
    title: "Industries We Serve: Healthcare, Finance & Manufacturing",
    description: "Deep experience across regulated industries: healthcare intake \
        automation, financial reporting pipelines, and manufacturing analytics \
        that hold up to audit.",
    keywords: &[
        "healthcare digital transformation",
        "financial services automation",
        "manufacturing analytics",
    ],
};

static TRAINING: PageSeo = PageSeo {
    title: "Team Training & Enablement Programs",
    description: "Hands-on workshops that leave your team running the systems we \
        build together. AI literacy, automation operations, and analytics \
        practice for working professionals.",
    keywords: &[
        "AI training for teams",
        "automation workshops",
        "corporate technology training",
    ],
};

static ABOUT: PageSeo = PageSeo {
    title: "About Catalyst Digital Consulting",
    description: "A senior-only consulting team with over a decade of experience \
        delivering digital transformation for mid-market companies. Meet the \
        people who do the work.",
    keywords: &["about catalyst digital", "consulting team", "company history"],
};

static CONTACT: PageSeo = PageSeo {
    title: "Contact Us for a Free Consultation",
    description: "Tell us where your operations slow down and we will show you \
        what modern tooling can do about it. Free 45-minute consultation, no \
        sales pressure.",
    keywords: &["contact", "free consultation", "digital transformation quote"],
};

/// Resolve the SEO record for `page_name`.
///
/// Per-field precedence: `overrides` field, else the page entry, else the
/// global default. `twitter_card` is fixed site-wide; `canonical` without
/// an explicit override degenerates to the site origin plus `"/"` (an edge
/// case policy, not an error).
pub fn resolve_page_seo(
    site: &SiteConfig,
    page_name: &str,
    overrides: Option<&SeoOverrides>,
) -> SeoConfig {
    let page = page_entry(page_name);

    let title = overrides
        .and_then(|o| o.title.clone())
        .or_else(|| page.map(|p| p.title.to_string()))
        .unwrap_or_else(|| site.default_title.clone());

    let description = overrides
        .and_then(|o| o.description.clone())
        .or_else(|| page.map(|p| p.description.to_string()))
        .unwrap_or_else(|| site.description.clone());

    let keywords = overrides
        .and_then(|o| o.keywords.clone())
        .or_else(|| page.map(|p| p.keywords.join(", ")))
        .unwrap_or_else(|| keywords::PRIMARY.join(", "));

    let canonical = overrides
        .and_then(|o| o.canonical.clone())
        .unwrap_or_else(|| format!("{}/", site.url));

    let og_image = overrides
        .and_then(|o| o.og_image.clone())
        .unwrap_or_else(|| site.og_image.clone());

    let og_type = overrides
        .and_then(|o| o.og_type.clone())
        .unwrap_or_else(|| site::OG_TYPE.to_string());

    let mut config = SeoConfig {
        title,
        description,
        keywords,
        canonical,
        og_image,
        og_type,
        twitter_card: site::TWITTER_CARD.to_string(),
        extra: overrides.map(|o| o.extra.clone()).unwrap_or_default(),
    };
    apply_extra_shadowing(&mut config);
    config
}

/// Extra override fields always win, even over computed defaults: a string
/// value under a known field name replaces that field and leaves `extra`
/// for the genuinely unknown ones.
fn apply_extra_shadowing(config: &mut SeoConfig) {
    if let Some(v) = take_string(&mut config.extra, "title") {
        config.title = v;
    }
    if let Some(v) = take_string(&mut config.extra, "description") {
        config.description = v;
    }
    if let Some(v) = take_string(&mut config.extra, "keywords") {
        config.keywords = v;
    }
    if let Some(v) = take_string(&mut config.extra, "canonical") {
        config.canonical = v;
    }
    if let Some(v) = take_string(&mut config.extra, "og_image") {
        config.og_image = v;
    }
    if let Some(v) = take_string(&mut config.extra, "og_type") {
        config.og_type = v;
    }
    if let Some(v) = take_string(&mut config.extra, "twitter_card") {
        config.twitter_card = v;
    }
}

/// Remove `key` when it holds a string; non-string values stay put
fn take_string(extra: &mut Map<String, Value>, key: &str) -> Option<String> {
    match extra.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            extra.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_page_uses_page_entry() {
        let site = SiteConfig::default();
        let config = resolve_page_seo(&site, "services", None);
        assert_eq!(config.title, SERVICES.title);
        assert_eq!(config.keywords, SERVICES.keywords.join(", "));
        assert_eq!(config.og_type, "website");
        assert_eq!(config.twitter_card, "summary_large_image");
    }

    #[test]
    fn unknown_page_degrades_to_global_defaults() {
        let site = SiteConfig::default();
        let config = resolve_page_seo(&site, "no-such-page", None);
        assert_eq!(config.title, site.default_title);
        assert_eq!(config.description, site.description);
        assert_eq!(config.keywords, keywords::PRIMARY.join(", "));
    }

    #[test]
    fn canonical_degenerates_to_site_root_without_override() {
        let site = SiteConfig::default();
        let config = resolve_page_seo(&site, "home", None);
        assert_eq!(config.canonical, format!("{}/", site.url));
    }

    #[test]
    fn overrides_win_over_page_entry() {
        let site = SiteConfig::default();
        let overrides = SeoOverrides {
            title: Some("Custom Title".to_string()),
            canonical: Some("https://catalystdigitalconsulting.com/services/ai".to_string()),
            ..Default::default()
        };
        let config = resolve_page_seo(&site, "services", Some(&overrides));
        assert_eq!(config.title, "Custom Title");
        assert_eq!(
            config.canonical,
            "https://catalystdigitalconsulting.com/services/ai"
        );
        // untouched fields still come from the page entry
        assert_eq!(config.description, SERVICES.description);
    }

    #[test]
    fn extra_fields_pass_through_verbatim() {
        let site = SiteConfig::default();
        let mut overrides = SeoOverrides::default();
        overrides.extra.insert(
            "og_locale".to_string(),
            Value::String("en_US".to_string()),
        );
        let config = resolve_page_seo(&site, "home", Some(&overrides));
        assert_eq!(
            config.extra.get("og_locale"),
            Some(&Value::String("en_US".to_string()))
        );
    }

    #[test]
    fn extra_shadows_computed_fields() {
        let site = SiteConfig::default();
        let mut overrides = SeoOverrides::default();
        overrides.extra.insert(
            "twitter_card".to_string(),
            Value::String("summary".to_string()),
        );
        let config = resolve_page_seo(&site, "home", Some(&overrides));
        assert_eq!(config.twitter_card, "summary");
        assert!(config.extra.is_empty());
    }

    #[test]
    fn serializes_with_flattened_extra() {
        let site = SiteConfig::default();
        let mut overrides = SeoOverrides::default();
        overrides
            .extra
            .insert("og_locale".to_string(), Value::String("en_US".to_string()));
        let config = resolve_page_seo(&site, "about", Some(&overrides));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["title"], ABOUT.title);
        assert_eq!(json["og_locale"], "en_US");
    }
}
