//! Render environment
//!
//! The [`Environment`] is threaded through every render call. It carries the
//! injected [`ThemeProvider`] and the ambient default style of each
//! [`StyleKind`]. A subtree installs its own default with
//! [`Environment::with_style`], which returns a child environment; the
//! parent is untouched, so the override ends where the child goes out of
//! scope.
//!
//! ```rust
//! use zenith::button::{ButtonStyleCase, ButtonStyleKey};
//! use zenith::Environment;
//! use zenith_core::Theme;
//!
//! let root = Environment::new(Theme::dark());
//! let child = root.with_style::<ButtonStyleKey>(ButtonStyleCase::Secondary.style());
//!
//! assert_eq!(child.style::<ButtonStyleKey>(), ButtonStyleCase::Secondary.style());
//! assert_eq!(root.style::<ButtonStyleKey>(), ButtonStyleCase::Primary.style());
//! ```

use crate::style::{AnyStyle, StyleKind};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use zenith_core::{Theme, ThemeDependencies, ThemeProvider};

/// Links a style kind to its configuration type and process-wide default
pub trait StyleKey: 'static {
    /// Configuration rendered by styles of this kind
    type Configuration: 'static;

    /// Kind this key stands for
    const KIND: StyleKind;

    /// Style used when no enclosing scope installed one
    fn default_style() -> AnyStyle<Self::Configuration>;
}

/// One installed override; layers form a parent-linked chain
struct StyleLayer {
    kind: StyleKind,
    style: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<StyleLayer>>,
}

/// Context passed down the render call chain
#[derive(Clone)]
pub struct Environment {
    theme: Arc<dyn ThemeProvider>,
    styles: Option<Arc<StyleLayer>>,
}

impl Environment {
    /// Create a root environment reading tokens from `provider`
    pub fn new(provider: impl ThemeProvider + 'static) -> Self {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a root environment around an already shared provider
    pub fn from_shared(provider: Arc<dyn ThemeProvider>) -> Self {
        Self {
            theme: provider,
            styles: None,
        }
    }

    /// Current theme tokens
    pub fn theme(&self) -> Theme {
        self.theme.tokens()
    }

    /// The injected provider
    pub fn provider(&self) -> &Arc<dyn ThemeProvider> {
        &self.theme
    }

    /// Default style of kind `K` in this scope
    pub fn style<K: StyleKey>(&self) -> AnyStyle<K::Configuration> {
        self.layers()
            .filter(|layer| layer.kind == K::KIND)
            .find_map(|layer| layer.style.downcast_ref::<AnyStyle<K::Configuration>>())
            .cloned()
            .unwrap_or_else(K::default_style)
    }

    /// Child environment whose default style of kind `K` is `style`
    pub fn with_style<K: StyleKey>(&self, style: AnyStyle<K::Configuration>) -> Self
    where
        K::Configuration: 'static,
    {
        tracing::debug!(kind = ?K::KIND, style = style.name(), "Overriding ambient style");
        Self {
            theme: Arc::clone(&self.theme),
            styles: Some(Arc::new(StyleLayer {
                kind: K::KIND,
                style: Arc::new(style),
                parent: self.styles.clone(),
            })),
        }
    }

    /// Run `body` with `style` installed as the default of kind `K`
    pub fn scoped<K: StyleKey, R>(
        &self,
        style: AnyStyle<K::Configuration>,
        body: impl FnOnce(&Environment) -> R,
    ) -> R {
        body(&self.with_style::<K>(style))
    }

    /// Whether some enclosing scope overrides kind `kind`
    pub fn is_overridden(&self, kind: StyleKind) -> bool {
        self.layers().any(|layer| layer.kind == kind)
    }

    fn layers(&self) -> impl Iterator<Item = &StyleLayer> {
        std::iter::successors(self.styles.as_deref(), |layer| layer.parent.as_deref())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeDependencies for Environment {
    fn theme_provider(&self) -> &dyn ThemeProvider {
        self.theme.as_ref()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overrides: Vec<StyleKind> = self.layers().map(|layer| layer.kind).collect();
        f.debug_struct("Environment")
            .field("overrides", &overrides)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ButtonStyleCase, ButtonStyleKey};
    use crate::divider::{DividerStyleCase, DividerStyleKey};
    use crate::text::{TextStyleCase, TextStyleKey};
    use zenith_core::{MockThemeProvider, ThemeConfigurator, ThemeName};

    #[test]
    fn test_defaults_without_overrides() {
        let env = Environment::default();
        assert_eq!(env.style::<ButtonStyleKey>(), ButtonStyleCase::Primary.style());
        assert_eq!(env.style::<TextStyleKey>(), TextStyleCase::SmallPrimary.style());
        for kind in StyleKind::ALL {
            assert!(!env.is_overridden(kind));
        }
    }

    #[test]
    fn test_override_is_scoped_to_child() {
        let root = Environment::default();
        let child = root.with_style::<DividerStyleKey>(DividerStyleCase::Tertiary.style());

        assert_eq!(child.style::<DividerStyleKey>(), DividerStyleCase::Tertiary.style());
        assert!(child.is_overridden(StyleKind::Divider));
        assert_eq!(root.style::<DividerStyleKey>(), DividerStyleCase::Primary.style());
        assert!(!root.is_overridden(StyleKind::Divider));
    }

    #[test]
    fn test_nearest_override_wins() {
        let root = Environment::default();
        let outer = root.with_style::<ButtonStyleKey>(ButtonStyleCase::Secondary.style());
        let inner = outer.with_style::<ButtonStyleKey>(ButtonStyleCase::Primary.style());

        assert_eq!(inner.style::<ButtonStyleKey>(), ButtonStyleCase::Primary.style());
        assert_eq!(outer.style::<ButtonStyleKey>(), ButtonStyleCase::Secondary.style());
    }

    #[test]
    fn test_overrides_of_other_kinds_pass_through() {
        let env = Environment::default()
            .with_style::<ButtonStyleKey>(ButtonStyleCase::Secondary.style())
            .with_style::<DividerStyleKey>(DividerStyleCase::Secondary.style());

        assert_eq!(env.style::<ButtonStyleKey>(), ButtonStyleCase::Secondary.style());
        assert_eq!(env.style::<TextStyleKey>(), TextStyleCase::SmallPrimary.style());
    }

    #[test]
    fn test_scoped_restores_on_exit() {
        let root = Environment::default();
        let inside = root.scoped::<ButtonStyleKey, _>(ButtonStyleCase::Secondary.style(), |env| {
            env.style::<ButtonStyleKey>()
        });

        assert_eq!(inside, ButtonStyleCase::Secondary.style());
        assert_eq!(root.style::<ButtonStyleKey>(), ButtonStyleCase::Primary.style());
    }

    #[test]
    fn test_children_share_the_provider() {
        let configurator = ThemeConfigurator::new(ThemeName::Dark);
        let root = Environment::new(configurator.clone());
        let child = root.with_style::<ButtonStyleKey>(ButtonStyleCase::Secondary.style());

        configurator.change(ThemeName::Light);
        assert_eq!(child.theme().name, ThemeName::Light);
    }

    #[test]
    fn test_style_lookup_does_not_read_theme() {
        let mut provider = MockThemeProvider::new();
        provider.expect_tokens().never();

        let env = Environment::new(provider);
        let _ = env.style::<ButtonStyleKey>();
        let _ = env.with_style::<TextStyleKey>(TextStyleCase::BigBoldPrimary.style());
    }
}
