//! Style protocol and type erasure
//!
//! A [`Style`] turns a configuration into a [`Renderable`], reading theme
//! tokens from the [`Environment`] while it does so. [`AnyStyle`] hides the
//! concrete style type behind one call so that styles of the same kind can be
//! stored together and swapped at runtime.

use crate::environment::Environment;
use crate::renderable::Renderable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Component families that accept pluggable styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKind {
    /// Buttons
    Button,
    /// Dividers
    Divider,
    /// Text
    Text,
    /// Images from assets, symbols or URLs
    DynamicImage,
    /// Radio buttons
    RadioButton,
}

impl StyleKind {
    /// Every style kind
    pub const ALL: [StyleKind; 5] = [
        StyleKind::Button,
        StyleKind::Divider,
        StyleKind::Text,
        StyleKind::DynamicImage,
        StyleKind::RadioButton,
    ];
}

/// A pluggable style
///
/// Implementations must not capture theme tokens when constructed. Tokens
/// are read from `env` inside [`Style::make_body`], so a theme change is
/// picked up by the next render.
pub trait Style: Send + Sync + 'static {
    /// Data the style renders from
    type Configuration;

    /// Render the configuration
    fn make_body(&self, configuration: &Self::Configuration, env: &Environment) -> Renderable;

    /// Stable descriptive name of this style, including its parameters
    fn id(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

// =============================================================================
// Identity
// =============================================================================

/// Namespace for name-based style identifiers
const STYLE_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2b8e_4d3a_4c5b_9e7f_1a2b_3c4d_5e6f);

/// Identity token of an erased style
///
/// Derived from the style's name, so it survives clones and re-resolving the
/// same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(Uuid);

impl StyleId {
    /// Identifier for a style name
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&STYLE_NAMESPACE, name.as_bytes()))
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Erased Style
// =============================================================================

type MakeBody<C> = dyn Fn(&C, &Environment) -> Renderable + Send + Sync;

/// Type-erased style for configuration `C`
pub struct AnyStyle<C> {
    id: StyleId,
    name: Cow<'static, str>,
    make_body: Arc<MakeBody<C>>,
}

impl<C: 'static> AnyStyle<C> {
    /// Erase a concrete style
    pub fn new<S>(style: S) -> Self
    where
        S: Style<Configuration = C>,
    {
        let name = style.id();
        let make_body: Arc<MakeBody<C>> = Arc::new(move |configuration: &C, env: &Environment| {
            style.make_body(configuration, env)
        });
        Self {
            id: StyleId::from_name(&name),
            name,
            make_body,
        }
    }

    /// Build a style from a closure
    ///
    /// `name` becomes the identity, so it must be unique per behavior.
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, make_body: F) -> Self
    where
        F: Fn(&C, &Environment) -> Renderable + Send + Sync + 'static,
    {
        let name = name.into();
        Self {
            id: StyleId::from_name(&name),
            name,
            make_body: Arc::new(make_body),
        }
    }

    /// Identity token
    pub fn id(&self) -> StyleId {
        self.id
    }

    /// Descriptive name of the wrapped style
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render a configuration with the wrapped style
    pub fn render(&self, configuration: &C, env: &Environment) -> Renderable {
        (self.make_body)(configuration, env)
    }
}

impl<C> Clone for AnyStyle<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            make_body: Arc::clone(&self.make_body),
        }
    }
}

impl<C> fmt::Debug for AnyStyle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyStyle")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl<C> PartialEq for AnyStyle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for AnyStyle<C> {}

impl<C: 'static> Style for AnyStyle<C> {
    type Configuration = C;

    fn make_body(&self, configuration: &C, env: &Environment) -> Renderable {
        self.render(configuration, env)
    }

    fn id(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}
