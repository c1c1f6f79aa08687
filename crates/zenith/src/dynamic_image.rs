//! Dynamic image styles
//!
//! A dynamic image is either a remote URL loaded asynchronously or a local
//! asset/symbol name. The source kind is decided from the string alone.

use crate::environment::{Environment, StyleKey};
use crate::renderable::{Frame, ImageSource, Renderable};
use crate::style::{AnyStyle, Style, StyleKind};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use zenith_core::{ColorName, ThemeDependencies};

/// Prefix that marks a remote source
const REMOTE_PREFIX: &str = "https://";

/// Where the image comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicImageType {
    /// Loaded from the network
    Async,
    /// Bundled asset or system symbol
    Local,
}

impl DynamicImageType {
    /// Classify a source string
    pub fn of(source: &str) -> Self {
        if source.starts_with(REMOTE_PREFIX) {
            DynamicImageType::Async
        } else {
            DynamicImageType::Local
        }
    }
}

/// Data a dynamic image style renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicImageConfiguration {
    /// URL or asset name
    pub source: String,
    /// Classification of `source`
    pub image_type: DynamicImageType,
}

impl DynamicImageConfiguration {
    /// Configuration for `source`
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let image_type = DynamicImageType::of(&source);
        Self { source, image_type }
    }

    /// Renderable image source
    pub fn image_source(&self) -> ImageSource {
        match self.image_type {
            DynamicImageType::Async => ImageSource::Remote(self.source.clone()),
            DynamicImageType::Local => ImageSource::Local(self.source.clone()),
        }
    }
}

/// Erased dynamic image style
pub type AnyDynamicImageStyle = AnyStyle<DynamicImageConfiguration>;

/// Untinted image at its natural size
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDynamicImageStyle;

impl Style for PlainDynamicImageStyle {
    type Configuration = DynamicImageConfiguration;

    fn make_body(
        &self,
        configuration: &DynamicImageConfiguration,
        _env: &Environment,
    ) -> Renderable {
        Renderable::new(StyleKind::DynamicImage).with_image(configuration.image_source())
    }
}

/// Fixed image sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    /// 16×16
    Small,
    /// 24×24
    Medium,
}

impl ImageSize {
    /// Edge length in points
    pub fn points(&self) -> f32 {
        match self {
            ImageSize::Small => 16.0,
            ImageSize::Medium => 24.0,
        }
    }
}

/// Tint applied to a sized image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicImageColor {
    /// Main text color
    Primary,
    /// Muted text color
    Secondary,
    /// Brand accent
    Tertiary,
}

impl DynamicImageColor {
    /// Theme color token
    pub fn color_name(&self) -> ColorName {
        match self {
            DynamicImageColor::Primary => ColorName::TextPrimary,
            DynamicImageColor::Secondary => ColorName::TextSecondary,
            DynamicImageColor::Tertiary => ColorName::Primary,
        }
    }
}

/// Tinted image in a square frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedDynamicImageStyle {
    size: ImageSize,
    color: DynamicImageColor,
}

impl SizedDynamicImageStyle {
    /// 16pt image tinted `color`
    pub fn small(color: DynamicImageColor) -> Self {
        Self {
            size: ImageSize::Small,
            color,
        }
    }

    /// 24pt image tinted `color`
    pub fn medium(color: DynamicImageColor) -> Self {
        Self {
            size: ImageSize::Medium,
            color,
        }
    }
}

impl Style for SizedDynamicImageStyle {
    type Configuration = DynamicImageConfiguration;

    fn make_body(
        &self,
        configuration: &DynamicImageConfiguration,
        env: &Environment,
    ) -> Renderable {
        Renderable::new(StyleKind::DynamicImage)
            .with_image(configuration.image_source())
            .with_foreground(env.colors().color(self.color.color_name()))
            .with_frame(Frame::square(self.size.points()))
    }

    fn id(&self) -> Cow<'static, str> {
        Cow::Owned(format!("SizedDynamicImageStyle({:?}, {:?})", self.size, self.color))
    }
}

/// Named dynamic image styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicImageStyleCase {
    /// Small, main text color
    SmallPrimary,
    /// Small, muted text color
    SmallSecondary,
    /// Small, brand accent
    SmallTertiary,
    /// Medium, main text color
    MediumPrimary,
    /// Medium, muted text color
    MediumSecondary,
    /// Medium, brand accent
    MediumTertiary,
}

impl DynamicImageStyleCase {
    /// Every case
    pub const ALL: [DynamicImageStyleCase; 6] = [
        DynamicImageStyleCase::SmallPrimary,
        DynamicImageStyleCase::SmallSecondary,
        DynamicImageStyleCase::SmallTertiary,
        DynamicImageStyleCase::MediumPrimary,
        DynamicImageStyleCase::MediumSecondary,
        DynamicImageStyleCase::MediumTertiary,
    ];

    /// Resolve the case to its style
    pub fn style(&self) -> AnyDynamicImageStyle {
        tracing::trace!(case = ?self, "Resolving dynamic image style");
        let style = match self {
            Self::SmallPrimary => SizedDynamicImageStyle::small(DynamicImageColor::Primary),
            Self::SmallSecondary => SizedDynamicImageStyle::small(DynamicImageColor::Secondary),
            Self::SmallTertiary => SizedDynamicImageStyle::small(DynamicImageColor::Tertiary),
            Self::MediumPrimary => SizedDynamicImageStyle::medium(DynamicImageColor::Primary),
            Self::MediumSecondary => SizedDynamicImageStyle::medium(DynamicImageColor::Secondary),
            Self::MediumTertiary => SizedDynamicImageStyle::medium(DynamicImageColor::Tertiary),
        };
        AnyStyle::new(style)
    }
}

/// Ambient dynamic image style key
pub struct DynamicImageStyleKey;

impl StyleKey for DynamicImageStyleKey {
    type Configuration = DynamicImageConfiguration;
    const KIND: StyleKind = StyleKind::DynamicImage;

    fn default_style() -> AnyDynamicImageStyle {
        DynamicImageStyleCase::SmallPrimary.style()
    }
}

/// An image from a URL or a local name
#[derive(Debug, Clone)]
pub struct DynamicImage {
    configuration: DynamicImageConfiguration,
    style: Option<AnyDynamicImageStyle>,
}

impl DynamicImage {
    /// Create an image; `https://` sources load asynchronously
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            configuration: DynamicImageConfiguration::new(source),
            style: None,
        }
    }

    /// How the source will be loaded
    pub fn image_type(&self) -> DynamicImageType {
        self.configuration.image_type
    }

    /// Use a specific style instead of the ambient one
    pub fn with_style(mut self, style: AnyDynamicImageStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Render with the explicit style, or the environment's default
    pub fn render(&self, env: &Environment) -> Renderable {
        let style = match &self.style {
            Some(style) => style.clone(),
            None => env.style::<DynamicImageStyleKey>(),
        };
        style.render(&self.configuration, env)
    }
}
