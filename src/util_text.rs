//! Text helpers for titles, descriptions, and keyword strings
//!
//! All pure functions. Length accounting is in chars, not bytes, so copy
//! with typographic punctuation stays safe to slice.

use crate::config::SiteConfig;
use crate::constants::{keywords, seo};

/// Page title with the company suffix, e.g. `"Services | Catalyst Digital
/// Consulting"`. With `include_company` off the input passes through
/// unchanged.
pub fn generate_title(site: &SiteConfig, page_title: &str, include_company: bool) -> String {
    if include_company {
        format!("{page_title} | {}", site.name)
    } else {
        page_title.to_string()
    }
}

/// Best-effort truncation of a meta description to `max_length` chars
/// (typically [`seo::MAX_DESCRIPTION_LENGTH`]).
///
/// Content within the budget passes through unchanged. Otherwise the
/// `max_length - 3` prefix is cut at the last sentence-ending period when
/// one falls within [`seo::SENTENCE_WINDOW`] chars of the budget, else at
/// the last space, then `"..."` is appended. Readability wins over the
/// budget: the suffix can push edge inputs slightly past `max_length`.
pub fn truncate_description(content: &str, max_length: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= max_length {
        return content.to_string();
    }

    let prefix = &chars[..max_length.saturating_sub(3)];
    let last_sentence = prefix.iter().rposition(|&c| c == '.');
    let last_space = prefix.iter().rposition(|&c| c == ' ');

    let cut = match last_sentence {
        // A sentence boundary near the budget reads better than a word cut
        Some(pos) if pos > max_length.saturating_sub(seo::SENTENCE_WINDOW) => pos + 1,
        _ => last_space.unwrap_or(prefix.len()),
    };

    let head: String = prefix[..cut].iter().collect();
    format!("{}...", head.trim_end())
}

/// Combined keyword string: `primary`, then `secondary`, then the global
/// [`keywords::PRIMARY`] list, lowercased, deduplicated in first-seen
/// order, capped at [`seo::MAX_KEYWORDS`], each entry re-capitalized on
/// its first letter, joined with `", "`.
pub fn build_keyword_string(primary: &[&str], secondary: &[&str]) -> String {
    let mut combined: Vec<String> = Vec::new();
    for keyword in primary
        .iter()
        .chain(secondary.iter())
        .chain(keywords::PRIMARY.iter())
    {
        let lowered = keyword.to_lowercase();
        if !combined.contains(&lowered) {
            combined.push(lowered);
        }
    }
    combined.truncate(seo::MAX_KEYWORDS);

    combined
        .iter()
        .map(|kw| capitalize_first(kw))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercase only the first letter, leaving the rest as-is
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
