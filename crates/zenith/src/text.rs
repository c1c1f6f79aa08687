//! Text styles
//!
//! A text style pairs a font token with a color token. Fonts carry a design
//! line height taller than their natural one; the difference (never
//! negative) is applied as line spacing between lines, and half of it as
//! padding above and below so a single line still occupies the full design
//! height.

use crate::environment::{Environment, StyleKey};
use crate::renderable::{EdgeInsets, Renderable};
use crate::style::{AnyStyle, Style, StyleKind};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use zenith_core::{ColorName, FontName};

/// Data a text style renders from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextConfiguration {
    /// Text to display
    pub content: String,
}

impl TextConfiguration {
    /// Configuration for `content`
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Erased text style
pub type AnyTextStyle = AnyStyle<TextConfiguration>;

/// Color tokens text may be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyleColor {
    /// Main text color
    TextPrimary,
    /// Muted text color
    TextSecondary,
    /// Brand accent
    Primary,
}

impl TextStyleColor {
    /// Theme color token
    pub fn color_name(&self) -> ColorName {
        match self {
            TextStyleColor::TextPrimary => ColorName::TextPrimary,
            TextStyleColor::TextSecondary => ColorName::TextSecondary,
            TextStyleColor::Primary => ColorName::Primary,
        }
    }
}

/// Font token plus color token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTextStyle {
    font: FontName,
    color: TextStyleColor,
}

impl BaseTextStyle {
    /// Style from a font and a color
    pub fn new(font: FontName, color: TextStyleColor) -> Self {
        Self { font, color }
    }

    /// Small font in `color`
    pub fn small(color: TextStyleColor) -> Self {
        Self::new(FontName::Small, color)
    }

    /// Medium font in `color`
    pub fn medium(color: TextStyleColor) -> Self {
        Self::new(FontName::Medium, color)
    }

    /// Medium bold font in `color`
    pub fn medium_bold(color: TextStyleColor) -> Self {
        Self::new(FontName::MediumBold, color)
    }

    /// Big bold font in `color`
    pub fn big_bold(color: TextStyleColor) -> Self {
        Self::new(FontName::BigBold, color)
    }
}

impl Style for BaseTextStyle {
    type Configuration = TextConfiguration;

    fn make_body(&self, configuration: &TextConfiguration, env: &Environment) -> Renderable {
        let theme = env.theme();
        let font = theme.fonts.font(self.font).clone();
        let line_spacing = font.extra_leading();

        Renderable::new(StyleKind::Text)
            .with_content(configuration.content.clone())
            .with_foreground(theme.colors.color(self.color.color_name()))
            .with_line_spacing(line_spacing)
            .with_padding(EdgeInsets::vertical(line_spacing / 2.0))
            .with_font(font)
    }

    fn id(&self) -> Cow<'static, str> {
        Cow::Owned(format!("BaseTextStyle({:?}, {:?})", self.font, self.color))
    }
}

/// Named text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyleCase {
    /// Small, main text color
    SmallTextPrimary,
    /// Small, muted text color
    SmallTextSecondary,
    /// Small, brand accent
    SmallPrimary,
    /// Medium, main text color
    MediumTextPrimary,
    /// Medium, muted text color
    MediumTextSecondary,
    /// Medium, brand accent
    MediumPrimary,
    /// Medium bold, main text color
    MediumBoldTextPrimary,
    /// Medium bold, muted text color
    MediumBoldTextSecondary,
    /// Medium bold, brand accent
    MediumBoldPrimary,
    /// Big bold, main text color
    BigBoldTextPrimary,
    /// Big bold, muted text color
    BigBoldTextSecondary,
    /// Big bold, brand accent
    BigBoldPrimary,
}

impl TextStyleCase {
    /// Every case
    pub const ALL: [TextStyleCase; 12] = [
        TextStyleCase::SmallTextPrimary,
        TextStyleCase::SmallTextSecondary,
        TextStyleCase::SmallPrimary,
        TextStyleCase::MediumTextPrimary,
        TextStyleCase::MediumTextSecondary,
        TextStyleCase::MediumPrimary,
        TextStyleCase::MediumBoldTextPrimary,
        TextStyleCase::MediumBoldTextSecondary,
        TextStyleCase::MediumBoldPrimary,
        TextStyleCase::BigBoldTextPrimary,
        TextStyleCase::BigBoldTextSecondary,
        TextStyleCase::BigBoldPrimary,
    ];

    /// Font and color tokens of the case
    pub fn parts(&self) -> (FontName, TextStyleColor) {
        use TextStyleCase::*;
        use TextStyleColor as C;
        match self {
            SmallTextPrimary => (FontName::Small, C::TextPrimary),
            SmallTextSecondary => (FontName::Small, C::TextSecondary),
            SmallPrimary => (FontName::Small, C::Primary),
            MediumTextPrimary => (FontName::Medium, C::TextPrimary),
            MediumTextSecondary => (FontName::Medium, C::TextSecondary),
            MediumPrimary => (FontName::Medium, C::Primary),
            MediumBoldTextPrimary => (FontName::MediumBold, C::TextPrimary),
            MediumBoldTextSecondary => (FontName::MediumBold, C::TextSecondary),
            MediumBoldPrimary => (FontName::MediumBold, C::Primary),
            BigBoldTextPrimary => (FontName::BigBold, C::TextPrimary),
            BigBoldTextSecondary => (FontName::BigBold, C::TextSecondary),
            BigBoldPrimary => (FontName::BigBold, C::Primary),
        }
    }

    /// Resolve the case to its style
    pub fn style(&self) -> AnyTextStyle {
        tracing::trace!(case = ?self, "Resolving text style");
        let (font, color) = self.parts();
        AnyStyle::new(BaseTextStyle::new(font, color))
    }
}

/// Ambient text style key
pub struct TextStyleKey;

impl StyleKey for TextStyleKey {
    type Configuration = TextConfiguration;
    const KIND: StyleKind = StyleKind::Text;

    fn default_style() -> AnyTextStyle {
        TextStyleCase::SmallPrimary.style()
    }
}

/// A run of text
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    style: Option<AnyTextStyle>,
}

impl Text {
    /// Create text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    /// Use a specific style instead of the ambient one
    pub fn with_style(mut self, style: AnyTextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Render with the explicit style, or the environment's default
    pub fn render(&self, env: &Environment) -> Renderable {
        let style = match &self.style {
            Some(style) => style.clone(),
            None => env.style::<TextStyleKey>(),
        };
        style.render(&TextConfiguration::new(self.content.clone()), env)
    }
}
