//! Theme registry and selection state
//!
//! Two named palettes share one token schema (see [`tokens`]). The
//! selection lives in an explicit [`ThemeResolver`] context object handed
//! to the render tree rather than ambient global state: initialize it from
//! persisted storage (or the default) at application start; there is
//! nothing to flush at exit since writes are synchronous.

pub mod tokens;

use crate::storage::{SettingsStore, THEME_KEY};
use anyhow::{anyhow, Result};
use std::fmt;
use tokens::ThemeTokens;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeId {
    /// Saturated blue/teal on white (default)
    #[default]
    ModernBusiness,
    /// Navy/bronze on warm ivory
    TrustworthyProfessional,
}

impl ThemeId {
    /// Every registered theme, in registry order
    pub const ALL: [ThemeId; 2] = [ThemeId::ModernBusiness, ThemeId::TrustworthyProfessional];

    /// Get the token set for this theme
    pub fn tokens(&self) -> ThemeTokens {
        match self {
            ThemeId::ModernBusiness => ThemeTokens::modern_business(),
            ThemeId::TrustworthyProfessional => ThemeTokens::trustworthy_professional(),
        }
    }
}

impl std::str::FromStr for ThemeId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "modern" | "modernbusiness" | "modern-business" => Ok(ThemeId::ModernBusiness),
            "trustworthy" | "trustworthyprofessional" | "trustworthy-professional" => {
                Ok(ThemeId::TrustworthyProfessional)
            }
            _ => Err(anyhow!(
                "Unknown theme '{s}'. Available: modern-business, trustworthy-professional"
            )),
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeId::ModernBusiness => write!(f, "modern-business"),
            ThemeId::TrustworthyProfessional => write!(f, "trustworthy-professional"),
        }
    }
}

/// Holds the current theme selection and mirrors it into a settings store.
///
/// Single-threaded by design: the selection changes only on explicit user
/// action, never concurrently.
#[derive(Debug)]
pub struct ThemeResolver<S: SettingsStore> {
    current: ThemeId,
    tokens: ThemeTokens,
    store: S,
}

impl<S: SettingsStore> ThemeResolver<S> {
    /// Start from the default theme, then rehydrate any persisted
    /// selection from `store`.
    pub fn new(store: S) -> Self {
        let mut resolver = Self {
            current: ThemeId::default(),
            tokens: ThemeId::default().tokens(),
            store,
        };
        resolver.restore();
        resolver
    }

    /// Currently selected theme
    pub fn current(&self) -> ThemeId {
        self.current
    }

    /// Token set of the currently selected theme
    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    /// Replace the current selection and persist its name under the
    /// `"theme"` key. The only side effect is the storage write.
    pub fn set_theme(&mut self, id: ThemeId) -> Result<()> {
        self.current = id;
        self.tokens = id.tokens();
        self.store.set(THEME_KEY, &id.to_string())
    }

    /// Consume the resolver and hand back its store (reload simulation in
    /// tests, teardown at application exit)
    pub fn into_store(self) -> S {
        self.store
    }

    /// Rehydrate the selection from storage. A persisted name that resolves
    /// against the registry replaces the current selection; an unknown name
    /// keeps the current theme (not an error); an absent key is a no-op.
    pub fn restore(&mut self) {
        let Some(name) = self.store.get(THEME_KEY) else {
            return;
        };
        match name.parse::<ThemeId>() {
            Ok(id) if id != self.current => {
                self.current = id;
                self.tokens = id.tokens();
            }
            Ok(_) => {}
            Err(_) => {
                log::debug!(
                    "ignoring unrecognized persisted theme '{name}', keeping '{}'",
                    self.current
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn theme_parsing() {
        assert_eq!(
            "modern-business".parse::<ThemeId>().unwrap(),
            ThemeId::ModernBusiness
        );
        assert_eq!(
            "MODERN".parse::<ThemeId>().unwrap(),
            ThemeId::ModernBusiness
        );
        assert_eq!(
            "trustworthy-professional".parse::<ThemeId>().unwrap(),
            ThemeId::TrustworthyProfessional
        );
        assert!("invalid".parse::<ThemeId>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for id in ThemeId::ALL {
            assert_eq!(id.to_string().parse::<ThemeId>().unwrap(), id);
        }
    }

    #[test]
    fn all_themes_resolve_tokens() {
        for id in ThemeId::ALL {
            let tokens = id.tokens();
            assert_eq!(tokens.name, id.to_string());
        }
    }

    #[test]
    fn new_resolver_defaults_to_modern_business() {
        let resolver = ThemeResolver::new(MemoryStore::new());
        assert_eq!(resolver.current(), ThemeId::ModernBusiness);
        assert_eq!(resolver.tokens().name, "modern-business");
    }

    #[test]
    fn set_theme_persists_name() {
        let mut resolver = ThemeResolver::new(MemoryStore::new());
        resolver
            .set_theme(ThemeId::TrustworthyProfessional)
            .unwrap();
        assert_eq!(
            resolver.store.get(THEME_KEY).as_deref(),
            Some("trustworthy-professional")
        );
        assert_eq!(resolver.tokens().name, "trustworthy-professional");
    }

    #[test]
    fn restore_ignores_unknown_name() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "corporate-neon").unwrap();
        let resolver = ThemeResolver::new(store);
        assert_eq!(resolver.current(), ThemeId::ModernBusiness);
    }

    #[test]
    fn restore_applies_known_name() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "trustworthy-professional").unwrap();
        let resolver = ThemeResolver::new(store);
        assert_eq!(resolver.current(), ThemeId::TrustworthyProfessional);
    }
}
