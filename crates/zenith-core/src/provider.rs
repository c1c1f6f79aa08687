//! Theme provider seam and the shared configurator
//!
//! Styles never hold a theme. They hold (or are handed) a
//! [`ThemeProvider`] and ask it for tokens at the moment they render, so a
//! theme change shows up on the next render without resolving styles again.

use crate::colors::{Color, ColorName, Colors};
use crate::error::ThemeError;
use crate::theme::{Theme, ThemeName};
use crate::tokens::{Constants, Fonts, Spacings};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Provider Trait
// =============================================================================

/// Read-only source of design tokens
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ThemeProvider: Send + Sync {
    /// Snapshot of the current tokens
    fn tokens(&self) -> Theme;
}

impl ThemeProvider for Theme {
    fn tokens(&self) -> Theme {
        self.clone()
    }
}

/// Token accessors for anything that can reach a [`ThemeProvider`]
///
/// Every accessor goes back to the provider, so callers always see the
/// provider's current state.
pub trait ThemeDependencies {
    /// The provider tokens are read from
    fn theme_provider(&self) -> &dyn ThemeProvider;

    /// Current color tokens
    fn colors(&self) -> Colors {
        self.theme_provider().tokens().colors
    }

    /// Current font tokens
    fn fonts(&self) -> Fonts {
        self.theme_provider().tokens().fonts
    }

    /// Current spacing tokens
    fn spacings(&self) -> Spacings {
        self.theme_provider().tokens().spacings
    }

    /// Current constants
    fn constants(&self) -> Constants {
        self.theme_provider().tokens().constants
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Persisted theme preferences
///
/// ```rust
/// use zenith_core::{ColorName, ThemeName, ThemeSettings};
///
/// let settings = ThemeSettings::from_json(
///     r##"{ "theme": "light", "colors": { "primary": "#00FF00" } }"##,
/// ).unwrap();
/// assert_eq!(settings.theme, ThemeName::Light);
/// assert!(settings.colors.contains_key(&ColorName::Primary));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Base theme
    #[serde(default)]
    pub theme: ThemeName,
    /// Per-token color overrides applied on top of the base theme
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub colors: HashMap<ColorName, Color>,
}

impl ThemeSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the theme these settings describe
    pub fn build(&self) -> Theme {
        let mut theme = Theme::named(self.theme);
        for (name, color) in &self.colors {
            theme.colors.set(*name, *color);
        }
        theme
    }
}

// =============================================================================
// Configurator
// =============================================================================

/// Shared, switchable theme
///
/// Clones share the same underlying theme; a change made through any clone is
/// visible to every style that reads tokens afterwards.
#[derive(Debug, Clone, Default)]
pub struct ThemeConfigurator {
    theme: Arc<RwLock<Theme>>,
}

impl ThemeConfigurator {
    /// Create a configurator showing a built-in theme
    pub fn new(name: ThemeName) -> Self {
        Self::with_theme(Theme::named(name))
    }

    /// Create a configurator around a specific theme
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Arc::new(RwLock::new(theme)),
        }
    }

    /// Create a configurator from persisted settings
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        tracing::debug!(
            theme = %settings.theme,
            overrides = settings.colors.len(),
            "Loading theme settings"
        );
        Self::with_theme(settings.build())
    }

    /// Switch to another built-in theme, dropping any token overrides
    pub fn change(&self, name: ThemeName) {
        tracing::debug!(theme = %name, "Changing theme");
        *self.theme.write() = Theme::named(name);
    }

    /// Override a single color token
    pub fn set_color(&self, name: ColorName, color: Color) {
        tracing::debug!(token = %name, color = %color, "Overriding color token");
        self.theme.write().colors.set(name, color);
    }

    /// Apply an arbitrary edit to the current theme
    ///
    /// The edit runs on a copy with no lock held, so it may read tokens
    /// through any clone of this configurator.
    pub fn update(&self, edit: impl FnOnce(&mut Theme)) {
        let mut theme = self.tokens();
        edit(&mut theme);
        *self.theme.write() = theme;
    }

    /// Name of the current theme
    pub fn theme_name(&self) -> ThemeName {
        self.theme.read().name
    }
}

impl ThemeProvider for ThemeConfigurator {
    fn tokens(&self) -> Theme {
        self.theme.read().clone()
    }
}
