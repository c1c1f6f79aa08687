//! Theme bundles
//!
//! A [`Theme`] groups every token family under one name. Two themes ship:
//! - Dark: near-black backgrounds with a neon green accent (the default)
//! - Light: white backgrounds with a purple accent
//!
//! # Usage
//!
//! ```rust
//! use zenith_core::{FontName, Theme, ThemeName};
//!
//! let theme = Theme::named(ThemeName::Dark);
//! let body = theme.fonts.font(FontName::Small);
//! assert_eq!(body.size, 14.0);
//! ```

use crate::colors::Colors;
use crate::error::ThemeError;
use crate::tokens::{Constants, Fonts, Spacings};
use serde::{Deserialize, Serialize};

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    Light,
    /// Dark theme
    #[default]
    Dark,
}

impl ThemeName {
    /// Every theme name
    pub const ALL: [ThemeName; 2] = [ThemeName::Light, ThemeName::Dark];

    /// Identifier used in settings files
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Complete set of design tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color tokens
    pub colors: Colors,
    /// Font tokens
    pub fonts: Fonts,
    /// Spacing tokens
    pub spacings: Spacings,
    /// Shared constants
    pub constants: Constants,
}

impl Theme {
    /// The dark theme
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            colors: Colors::dark(),
            fonts: Fonts::default(),
            spacings: Spacings::default(),
            constants: Constants::default(),
        }
    }

    /// The light theme
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            colors: Colors::light(),
            fonts: Fonts::default(),
            spacings: Spacings::default(),
            constants: Constants::default(),
        }
    }

    /// Build the theme for a name
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorName;

    #[test]
    fn test_theme_name_display() {
        assert_eq!(ThemeName::Light.to_string(), "Light");
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert!(matches!(
            "dim".parse::<ThemeName>(),
            Err(ThemeError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_named_themes() {
        for name in ThemeName::ALL {
            assert_eq!(Theme::named(name).name, name);
        }
        assert!(Theme::default().is_dark());
        assert!(!Theme::light().is_dark());
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for name in ThemeName::ALL {
            let theme = Theme::named(name);
            assert_ne!(
                theme.colors.color(ColorName::TextPrimary),
                theme.colors.color(ColorName::BackgroundA)
            );
        }
    }

    #[test]
    fn test_theme_serialization() {
        let theme = Theme::light();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"name\":\"light\""));
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }
}
