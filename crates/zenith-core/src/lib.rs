//! Theme provider for the Zenith design system
//!
//! This crate owns the read-only design tokens every Zenith style renders
//! with, grouped the same way the styles consume them:
//!
//! - [`colors`] - Semantic color tokens keyed by [`ColorName`]
//! - [`tokens`] - Fonts, spacings and shared constants
//! - [`theme`] - Light and dark theme bundles
//! - [`provider`] - The [`ThemeProvider`] seam, the shared
//!   [`ThemeConfigurator`] and theme settings
//!
//! # Example
//!
//! ```rust
//! use zenith_core::{ColorName, ThemeConfigurator, ThemeName, ThemeProvider};
//!
//! let configurator = ThemeConfigurator::new(ThemeName::Dark);
//! let before = configurator.tokens().colors.color(ColorName::Primary);
//!
//! configurator.change(ThemeName::Light);
//! let after = configurator.tokens().colors.color(ColorName::Primary);
//! assert_ne!(before, after);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod colors;
pub mod error;
pub mod provider;
pub mod theme;
pub mod tokens;

pub use colors::{Color, ColorName, Colors};
pub use error::ThemeError;
pub use provider::{ThemeConfigurator, ThemeDependencies, ThemeProvider, ThemeSettings};
pub use theme::{Theme, ThemeName};
pub use tokens::{BaseFont, Constants, FontName, Fonts, SpacingName, Spacings};

#[cfg(any(test, feature = "mock"))]
pub use provider::MockThemeProvider;
