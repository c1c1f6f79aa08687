//! Render output
//!
//! Styles do not draw. They describe what to draw as a [`Renderable`]: a
//! serializable tree of resolved values (fonts, colors, insets, frames) that
//! the host toolkit turns into pixels.

use crate::style::StyleKind;
use serde::{Deserialize, Serialize};
use zenith_core::{BaseFont, Color};

// =============================================================================
// Geometry
// =============================================================================

/// Insets on each edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset
    pub top: f32,
    /// Leading inset
    pub leading: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Trailing inset
    pub trailing: f32,
}

impl EdgeInsets {
    /// Same inset on every edge
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    /// Inset on top and bottom only
    pub fn vertical(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            ..Self::default()
        }
    }
}

/// Fixed dimensions; `None` means fill the available space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Width in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Height in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Frame {
    /// Square frame
    pub fn square(size: f32) -> Self {
        Self {
            width: Some(size),
            height: Some(size),
        }
    }
}

/// Outline shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum Shape {
    /// Fully rounded ends
    Capsule,
    /// Circle
    Circle,
}

/// Stroke around the content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: f32,
    /// Outline the stroke follows
    pub shape: Shape,
}

impl Border {
    /// Create a border
    pub fn new(color: Color, width: f32, shape: Shape) -> Self {
        Self {
            color,
            width,
            shape,
        }
    }
}

/// Where an image is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "source", rename_all = "lowercase")]
pub enum ImageSource {
    /// Fetched over the network
    Remote(String),
    /// Bundled asset or system symbol
    Local(String),
}

// =============================================================================
// Renderable
// =============================================================================

/// Resolved output of a style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    /// Component family that produced this node
    pub kind: StyleKind,
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Text font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<BaseFont>,
    /// Foreground (text or tint) color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    /// Fill color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Stroke
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Padding around the content
    #[serde(default)]
    pub padding: EdgeInsets,
    /// Fixed size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
    /// Extra space between text lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
    /// Image to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSource>,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Nested nodes, laid out along the main axis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Renderable>,
}

impl Renderable {
    /// Create an empty node
    pub fn new(kind: StyleKind) -> Self {
        Self {
            kind,
            content: None,
            font: None,
            foreground: None,
            background: None,
            border: None,
            padding: EdgeInsets::default(),
            frame: None,
            line_spacing: None,
            spacing: None,
            image: None,
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    /// Set text content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set font
    pub fn with_font(mut self, font: BaseFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Set foreground color
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set fill color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set border
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Set frame
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Set line spacing
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    /// Set gap between children
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set image
    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = Some(image);
        self
    }

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: Renderable) -> Self {
        self.children.push(child);
        self
    }
}
