//! Divider styles

use crate::environment::{Environment, StyleKey};
use crate::renderable::{Frame, Renderable};
use crate::style::{AnyStyle, Style, StyleKind};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use zenith_core::{ColorName, ThemeDependencies};

/// Direction a divider runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Full width, fixed height
    #[default]
    Horizontal,
    /// Full height, fixed width
    Vertical,
}

/// Data a divider style renders from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerConfiguration {
    /// Direction
    pub axis: Axis,
    /// Line thickness in points
    pub thickness: f32,
}

impl Default for DividerConfiguration {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            thickness: 1.0,
        }
    }
}

/// Erased divider style
pub type AnyDividerStyle = AnyStyle<DividerConfiguration>;

/// Solid line in one color token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDividerStyle {
    color: ColorName,
}

impl OverlayDividerStyle {
    /// Divider drawn in `color`
    pub fn new(color: ColorName) -> Self {
        Self { color }
    }
}

impl Style for OverlayDividerStyle {
    type Configuration = DividerConfiguration;

    fn make_body(&self, configuration: &DividerConfiguration, env: &Environment) -> Renderable {
        let frame = match configuration.axis {
            Axis::Horizontal => Frame {
                width: None,
                height: Some(configuration.thickness),
            },
            Axis::Vertical => Frame {
                width: Some(configuration.thickness),
                height: None,
            },
        };

        Renderable::new(StyleKind::Divider)
            .with_background(env.colors().color(self.color))
            .with_frame(frame)
    }

    fn id(&self) -> Cow<'static, str> {
        Cow::Owned(format!("OverlayDividerStyle({})", self.color))
    }
}

/// Named divider styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DividerStyleCase {
    /// Main text color
    Primary,
    /// Muted text color
    Secondary,
    /// Brand accent
    Tertiary,
}

impl DividerStyleCase {
    /// Every case
    pub const ALL: [DividerStyleCase; 3] = [
        DividerStyleCase::Primary,
        DividerStyleCase::Secondary,
        DividerStyleCase::Tertiary,
    ];

    /// Color token the case draws with
    pub fn color(&self) -> ColorName {
        match self {
            DividerStyleCase::Primary => ColorName::TextPrimary,
            DividerStyleCase::Secondary => ColorName::TextSecondary,
            DividerStyleCase::Tertiary => ColorName::Primary,
        }
    }

    /// Resolve the case to its style
    pub fn style(&self) -> AnyDividerStyle {
        tracing::trace!(case = ?self, "Resolving divider style");
        AnyStyle::new(OverlayDividerStyle::new(self.color()))
    }
}

/// Ambient divider style key
pub struct DividerStyleKey;

impl StyleKey for DividerStyleKey {
    type Configuration = DividerConfiguration;
    const KIND: StyleKind = StyleKind::Divider;

    fn default_style() -> AnyDividerStyle {
        DividerStyleCase::Primary.style()
    }
}

/// A divider line
#[derive(Debug, Clone, Default)]
pub struct Divider {
    configuration: DividerConfiguration,
    style: Option<AnyDividerStyle>,
}

impl Divider {
    /// Horizontal hairline
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical hairline
    pub fn vertical() -> Self {
        Self {
            configuration: DividerConfiguration {
                axis: Axis::Vertical,
                ..DividerConfiguration::default()
            },
            style: None,
        }
    }

    /// Set thickness
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.configuration.thickness = thickness;
        self
    }

    /// Use a specific style instead of the ambient one
    pub fn with_style(mut self, style: AnyDividerStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Render with the explicit style, or the environment's default
    pub fn render(&self, env: &Environment) -> Renderable {
        let style = match &self.style {
            Some(style) => style.clone(),
            None => env.style::<DividerStyleKey>(),
        };
        style.render(&self.configuration, env)
    }
}
