//! SEO copy validation
//!
//! Rule evaluation against fixed length budgets and copy heuristics for the
//! marketing pages. Total over its input: every call returns a populated
//! audit, never an error.

use crate::constants::seo;

/// Page copy under audit
#[derive(Debug, Clone)]
pub struct PageContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
    /// Whether the page carries proof elements (case studies, testimonials,
    /// client logos)
    pub has_proof_elements: bool,
}

/// Audit result. `is_valid` tracks warnings only; suggestions are advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAudit {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Evaluate page copy against the fixed SEO thresholds.
///
/// Warnings fire on length-budget violations (title 40-65 chars,
/// description 140-160 chars). Suggestions fire on missing copy heuristics
/// and never affect `is_valid`.
pub fn validate_content(content: &PageContent<'_>) -> ContentAudit {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    let title_len = content.title.chars().count();
    if title_len < seo::TITLE_MIN {
        warnings.push(format!(
            "Title is {title_len} chars; aim for {}-{}",
            seo::TITLE_MIN,
            seo::TITLE_MAX
        ));
    } else if title_len > seo::TITLE_MAX {
        warnings.push(format!(
            "Title is {title_len} chars; search results clip past {}",
            seo::TITLE_MAX
        ));
    }

    let description_len = content.description.chars().count();
    if description_len < seo::DESCRIPTION_MIN {
        warnings.push(format!(
            "Description is {description_len} chars; aim for {}-{}",
            seo::DESCRIPTION_MIN,
            seo::DESCRIPTION_MAX
        ));
    } else if description_len > seo::DESCRIPTION_MAX {
        warnings.push(format!(
            "Description is {description_len} chars; snippets clip past {}",
            seo::DESCRIPTION_MAX
        ));
    }

    let title_lower = content.title.to_lowercase();
    if !title_lower.contains("help") && !title_lower.contains("consulting") {
        suggestions.push("Consider 'help' or 'consulting' in the title".to_string());
    }

    let description_lower = content.description.to_lowercase();
    if !description_lower.contains("expert") && !description_lower.contains("experience") {
        suggestions.push("Consider 'expert' or 'experience' in the description".to_string());
    }

    if !content.has_proof_elements {
        suggestions
            .push("Add proof elements (case studies, testimonials, client logos)".to_string());
    }

    let is_valid = warnings.is_empty();
    if !is_valid {
        log::debug!(
            "content audit for '{}': {} warning(s)",
            content.title,
            warnings.len()
        );
    }

    ContentAudit {
        is_valid,
        warnings,
        suggestions,
    }
}
