//! Site identity constants
//!
//! Centralized canonical data for the Catalyst Digital marketing sites:
//! brand identity, keyword tables, and the length budgets used by the SEO
//! utilities. Everything here is static; behavior lives in the resolver
//! modules.

/// Brand identity and global SEO defaults
pub mod site {
    /// Company name, appended to page titles as `" | <NAME>"`
    pub const NAME: &str = "Catalyst Digital Consulting";

    /// Canonical site origin (absolute, no trailing slash)
    pub const URL: &str = "https://catalystdigitalconsulting.com";

    /// Short tagline used in hero sections and social previews
    pub const TAGLINE: &str = "Digital transformation, delivered";

    /// Fallback page title when neither the page table nor overrides
    /// provide one
    pub const DEFAULT_TITLE: &str =
        "Catalyst Digital Consulting | AI Strategy & Digital Transformation";

    /// Global meta description fallback
    pub const DESCRIPTION: &str = "Catalyst Digital Consulting helps mid-market \
        companies modernize operations with AI strategy, process automation, and \
        hands-on team training. Over a decade of experience across healthcare, \
        finance, and manufacturing.";

    /// Default Open Graph preview image
    pub const OG_IMAGE: &str = "https://catalystdigitalconsulting.com/images/og-default.png";

    /// Open Graph object type for every page
    pub const OG_TYPE: &str = "website";

    /// Twitter card style, fixed across the site
    pub const TWITTER_CARD: &str = "summary_large_image";
}

/// Keyword tables used by the SEO resolver and keyword-string builder
pub mod keywords {
    /// Global primary keywords, appended to every generated keyword string
    pub const PRIMARY: &[&str] = &[
        "digital transformation",
        "AI strategy",
        "business consulting",
        "process automation",
        "technology consulting",
    ];

    /// Industry-targeted keywords
    pub const INDUSTRIES: &[&str] = &[
        "healthcare digital transformation",
        "financial services automation",
        "manufacturing analytics",
        "retail personalization",
        "logistics optimization",
    ];

    /// Location-targeted keywords
    pub const LOCATIONS: &[&str] = &[
        "consulting Denver",
        "consulting Austin",
        "consulting Chicago",
        "remote digital consulting",
    ];
}

/// Length budgets and thresholds for SEO copy
pub mod seo {
    /// Soft cap for meta descriptions (search snippet budget)
    ///
    /// Soft because the truncation heuristic prefers cutting at a sentence
    /// or word boundary and then appends `"..."`, which can push edge
    /// inputs slightly over.
    pub const MAX_DESCRIPTION_LENGTH: usize = 160;

    /// Maximum entries in a generated keyword string
    pub const MAX_KEYWORDS: usize = 15;

    /// How far back from the description cap a sentence-ending period may
    /// sit and still be preferred over a word-boundary cut
    pub const SENTENCE_WINDOW: usize = 50;

    /// Recommended title length range (chars)
    pub const TITLE_MIN: usize = 40;
    pub const TITLE_MAX: usize = 65;

    /// Recommended description length range (chars)
    pub const DESCRIPTION_MIN: usize = 140;
    pub const DESCRIPTION_MAX: usize = 160;
}
