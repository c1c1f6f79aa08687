//! Semantic color tokens
//!
//! Styles never reference raw colors. They ask the current theme for a
//! [`ColorName`] and get back whatever that theme maps it to.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Color Value
// =============================================================================

/// An sRGB color with alpha
///
/// Parsed from and printed as `#RRGGBB` (opaque) or `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel (255 = opaque)
    pub alpha: u8,
}

impl Color {
    /// Create an opaque color
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Create a color with an explicit alpha
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse a hex color string
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(hex.to_string()));
        }
        let channel = |at: usize| {
            digits
                .get(at..at + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ThemeError::InvalidColor(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(2)?, channel(4)?, channel(6)?, channel(0)?)),
            _ => Err(ThemeError::InvalidColor(hex.to_string())),
        }
    }

    /// Format as a hex string
    pub fn to_hex(&self) -> String {
        if self.alpha == 255 {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        }
    }

    /// Whether the color is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// =============================================================================
// Primitive Palette
// =============================================================================

/// Raw palette the themes are assembled from
pub(crate) mod primitive {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0x0E, 0x0E, 0x11);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const GRAY: Color = Color::rgb(0xBC, 0xBC, 0xBC);
    pub const EXTRA_LIGHT_GRAY: Color = Color::rgb(0xF5, 0xF5, 0xF5);
    pub const LIGHT_GRAY: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const DARK_GRAY: Color = Color::rgb(0x22, 0x22, 0x22);
    pub const GRAY_WITH_OPACITY: Color = Color::rgba(0x2F, 0x2F, 0x35, 0x80);

    pub const PURPLE_SUPPORT: Color = Color::rgb(0xA8, 0x11, 0xCD);
    pub const YELLOW_SUPPORT: Color = Color::rgb(0xED, 0xFF, 0x22);
    pub const ORANGE_SUPPORT: Color = Color::rgb(0xFB, 0x9B, 0x2E);
    pub const RED_SUPPORT: Color = Color::rgb(0xFF, 0x1F, 0x1F);
    pub const NEON_GREEN: Color = Color::rgb(0xB6, 0xFB, 0x2D);
    pub const WATER_GREEN: Color = Color::rgb(0x43, 0xE5, 0x8D);
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic color token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorName {
    /// Brand accent
    Primary,
    /// Main text color
    TextPrimary,
    /// Muted text color
    TextSecondary,
    /// Secondary highlight accent
    HighlightA,
    /// Screen background
    BackgroundA,
    /// Elevated surface background
    BackgroundB,
    /// Higher elevated surface background
    BackgroundC,
    /// Translucent overlay background
    BackgroundD,
    /// Critical state
    Critical,
    /// Attention state
    Attention,
    /// Danger state
    Danger,
    /// Positive state
    Positive,
}

impl ColorName {
    /// Every color token, in declaration order
    pub const ALL: [ColorName; 12] = [
        ColorName::Primary,
        ColorName::TextPrimary,
        ColorName::TextSecondary,
        ColorName::HighlightA,
        ColorName::BackgroundA,
        ColorName::BackgroundB,
        ColorName::BackgroundC,
        ColorName::BackgroundD,
        ColorName::Critical,
        ColorName::Attention,
        ColorName::Danger,
        ColorName::Positive,
    ];

    /// Token name as used in settings files
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Primary => "primary",
            ColorName::TextPrimary => "textPrimary",
            ColorName::TextSecondary => "textSecondary",
            ColorName::HighlightA => "highlightA",
            ColorName::BackgroundA => "backgroundA",
            ColorName::BackgroundB => "backgroundB",
            ColorName::BackgroundC => "backgroundC",
            ColorName::BackgroundD => "backgroundD",
            ColorName::Critical => "critical",
            ColorName::Attention => "attention",
            ColorName::Danger => "danger",
            ColorName::Positive => "positive",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownColorName(s.to_string()))
    }
}

/// Color tokens for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    /// Brand accent
    pub primary: Color,
    /// Main text color
    pub text_primary: Color,
    /// Muted text color
    pub text_secondary: Color,
    /// Secondary highlight accent
    pub highlight_a: Color,
    /// Screen background
    pub background_a: Color,
    /// Elevated surface background
    pub background_b: Color,
    /// Higher elevated surface background
    pub background_c: Color,
    /// Translucent overlay background
    pub background_d: Color,
    /// Critical state
    pub critical: Color,
    /// Attention state
    pub attention: Color,
    /// Danger state
    pub danger: Color,
    /// Positive state
    pub positive: Color,
}

impl Colors {
    /// Dark theme colors
    pub fn dark() -> Self {
        use primitive::*;
        Self {
            primary: NEON_GREEN,
            text_primary: WHITE,
            text_secondary: GRAY,
            highlight_a: PURPLE_SUPPORT,
            background_a: BLACK,
            background_b: DARK_GRAY,
            background_c: LIGHT_GRAY,
            background_d: GRAY_WITH_OPACITY,
            critical: RED_SUPPORT,
            attention: YELLOW_SUPPORT,
            danger: ORANGE_SUPPORT,
            positive: WATER_GREEN,
        }
    }

    /// Light theme colors
    pub fn light() -> Self {
        use primitive::*;
        Self {
            primary: PURPLE_SUPPORT,
            text_primary: BLACK,
            text_secondary: LIGHT_GRAY,
            highlight_a: NEON_GREEN,
            background_a: WHITE,
            background_b: EXTRA_LIGHT_GRAY,
            background_c: GRAY,
            background_d: GRAY_WITH_OPACITY,
            critical: RED_SUPPORT,
            attention: YELLOW_SUPPORT,
            danger: ORANGE_SUPPORT,
            positive: WATER_GREEN,
        }
    }

    /// Look up a color by token name
    pub fn color(&self, name: ColorName) -> Color {
        match name {
            ColorName::Primary => self.primary,
            ColorName::TextPrimary => self.text_primary,
            ColorName::TextSecondary => self.text_secondary,
            ColorName::HighlightA => self.highlight_a,
            ColorName::BackgroundA => self.background_a,
            ColorName::BackgroundB => self.background_b,
            ColorName::BackgroundC => self.background_c,
            ColorName::BackgroundD => self.background_d,
            ColorName::Critical => self.critical,
            ColorName::Attention => self.attention,
            ColorName::Danger => self.danger,
            ColorName::Positive => self.positive,
        }
    }

    /// Replace the color behind a token name
    pub fn set(&mut self, name: ColorName, color: Color) {
        let slot = match name {
            ColorName::Primary => &mut self.primary,
            ColorName::TextPrimary => &mut self.text_primary,
            ColorName::TextSecondary => &mut self.text_secondary,
            ColorName::HighlightA => &mut self.highlight_a,
            ColorName::BackgroundA => &mut self.background_a,
            ColorName::BackgroundB => &mut self.background_b,
            ColorName::BackgroundC => &mut self.background_c,
            ColorName::BackgroundD => &mut self.background_d,
            ColorName::Critical => &mut self.critical,
            ColorName::Attention => &mut self.attention,
            ColorName::Danger => &mut self.danger,
            ColorName::Positive => &mut self.positive,
        };
        *slot = color;
    }
}
