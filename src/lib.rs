//! sitekit - configuration core for the Catalyst Digital marketing sites
//!
//! This library resolves the two kinds of configuration the page templates
//! consume:
//!
//! - **Theme tokens**: two named palettes behind one fixed, fully typed
//!   schema, with the current selection held in an explicit
//!   [`theme::ThemeResolver`] and mirrored into client-side storage.
//! - **SEO metadata**: per-page [`seo::SeoConfig`] records produced by
//!   layering caller overrides over the static page table over the global
//!   site defaults, plus the text utilities that keep titles, descriptions,
//!   and keyword strings inside their budgets.
//!
//! Everything is synchronous and single-threaded: the only mutable state is
//! the current theme selection, changed by explicit user action. Every
//! resolution operation is total; unknown page names and unknown persisted
//! theme names degrade to defaults rather than failing.

// Static identity and keyword tables
pub mod constants;

// Site-level configuration (defaults + env overrides)
pub mod config;

// Theme registry, tokens, and selection state
pub mod theme;

// Client-side settings persistence
pub mod storage;

// Per-page SEO metadata resolution
pub mod seo;

// Title/description/keyword text helpers
pub mod util_text;

// SEO copy validation
pub mod validate;

pub use config::SiteConfig;
pub use seo::{resolve_page_seo, SeoConfig, SeoOverrides};
pub use storage::{FileStore, MemoryStore, SettingsStore, THEME_KEY};
pub use theme::{tokens::ThemeTokens, ThemeId, ThemeResolver};
pub use validate::{validate_content, ContentAudit, PageContent};
