//! Font, spacing and constant tokens
//!
//! Spacing follows a 4px base grid. Fonts carry both the glyph size and the
//! line height the design calls for, so text styles can derive the extra
//! leading they need.

use crate::colors::{primitive, Color};
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Tokens
// =============================================================================

/// Font family used by every text token
pub const FONT_FAMILY: &str = "Gilroy";

/// Font weights in CSS numeric form
pub mod font_weight {
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semibold (600)
    pub const SEMIBOLD: u16 = 600;
}

/// Font token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontName {
    /// Body and label text
    Small,
    /// Subheadings
    Medium,
    /// Emphasized subheadings
    MediumBold,
    /// Display numbers and hero titles
    BigBold,
}

impl FontName {
    /// Every font token, in declaration order
    pub const ALL: [FontName; 4] = [
        FontName::Small,
        FontName::Medium,
        FontName::MediumBold,
        FontName::BigBold,
    ];
}

/// A concrete font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseFont {
    /// Font family name
    pub family: String,
    /// Numeric weight
    pub weight: u16,
    /// Point size
    pub size: f32,
    /// Natural line height of the font at this size
    pub font_line_height: f32,
    /// Line height the design asks for
    pub line_height: f32,
}

impl BaseFont {
    /// Create a font in the design system family
    pub fn new(weight: u16, size: f32, line_height: f32) -> Self {
        Self {
            family: FONT_FAMILY.to_string(),
            weight,
            size,
            font_line_height: size,
            line_height,
        }
    }

    /// Leading to add on top of the font's natural line height
    pub fn extra_leading(&self) -> f32 {
        (self.line_height - self.font_line_height).max(0.0)
    }
}

/// Font tokens for one theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fonts {
    /// Body and label text (14/17)
    pub small: BaseFont,
    /// Subheadings (20/24)
    pub medium: BaseFont,
    /// Emphasized subheadings (20/24 semibold)
    pub medium_bold: BaseFont,
    /// Display text (56/64 semibold)
    pub big_bold: BaseFont,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            small: BaseFont::new(font_weight::MEDIUM, 14.0, 17.0),
            medium: BaseFont::new(font_weight::MEDIUM, 20.0, 24.0),
            medium_bold: BaseFont::new(font_weight::SEMIBOLD, 20.0, 24.0),
            big_bold: BaseFont::new(font_weight::SEMIBOLD, 56.0, 64.0),
        }
    }
}

impl Fonts {
    /// Look up a font by token name
    pub fn font(&self, name: FontName) -> &BaseFont {
        match name {
            FontName::Small => &self.small,
            FontName::Medium => &self.medium,
            FontName::MediumBold => &self.medium_bold,
            FontName::BigBold => &self.big_bold,
        }
    }
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingName {
    /// 0px
    None,
    /// 4px
    ExtraSmall,
    /// 8px
    Small,
    /// 16px
    Medium,
    /// 20px
    Large,
    /// 32px
    ExtraLarge,
    /// 64px
    Ultra,
}

/// Spacing tokens in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacings {
    /// No spacing
    pub none: f32,
    /// Minimal nudges
    pub extra_small: f32,
    /// Subtle margins and paddings
    pub small: f32,
    /// Default component padding
    pub medium: f32,
    /// Section separation
    pub large: f32,
    /// Breathing room between content blocks
    pub extra_large: f32,
    /// Wide layouts
    pub ultra: f32,
}

impl Default for Spacings {
    fn default() -> Self {
        Self {
            none: 0.0,
            extra_small: 4.0,
            small: 8.0,
            medium: 16.0,
            large: 20.0,
            extra_large: 32.0,
            ultra: 64.0,
        }
    }
}

impl Spacings {
    /// Look up a spacing by token name
    pub fn spacing(&self, name: SpacingName) -> f32 {
        match name {
            SpacingName::None => self.none,
            SpacingName::ExtraSmall => self.extra_small,
            SpacingName::Small => self.small,
            SpacingName::Medium => self.medium,
            SpacingName::Large => self.large,
            SpacingName::ExtraLarge => self.extra_large,
            SpacingName::Ultra => self.ultra,
        }
    }
}

// =============================================================================
// Constants
// =============================================================================

/// Shared non-color constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constants {
    /// Opacity of disabled controls
    pub disabled_opacity: f32,
    /// Opacity of a control while pressed
    pub tap_opacity: f32,
    /// Small button edge
    pub small_button_size: f32,
    /// Medium button edge
    pub medium_button_size: f32,
    /// Default animation duration in seconds
    pub animation_timer: f32,
    /// Small corner radius
    pub small_corner_radius: f32,
    /// Default corner radius
    pub corner_radius: f32,
    /// Hairline stroke color
    pub stroke_color: Color,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            disabled_opacity: 0.3,
            tap_opacity: 0.3,
            small_button_size: 44.0,
            medium_button_size: 48.0,
            animation_timer: 0.5,
            small_corner_radius: 8.0,
            corner_radius: 16.0,
            stroke_color: primitive::GRAY_WITH_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_lookup() {
        let fonts = Fonts::default();
        assert_eq!(fonts.font(FontName::Small).size, 14.0);
        assert_eq!(fonts.font(FontName::BigBold).weight, font_weight::SEMIBOLD);
        for name in FontName::ALL {
            assert_eq!(fonts.font(name).family, FONT_FAMILY);
        }
    }

    #[test]
    fn test_extra_leading() {
        let fonts = Fonts::default();
        assert_eq!(fonts.small.extra_leading(), 3.0);
        assert_eq!(fonts.big_bold.extra_leading(), 8.0);
    }

    #[test]
    fn test_spacing_scale() {
        let spacings = Spacings::default();
        assert_eq!(spacings.spacing(SpacingName::None), 0.0);
        assert_eq!(spacings.spacing(SpacingName::ExtraSmall), 4.0);
        assert_eq!(spacings.spacing(SpacingName::Medium), 16.0);
        assert_eq!(spacings.spacing(SpacingName::Ultra), 64.0);
    }

    #[test]
    fn test_spacings_are_on_grid() {
        let spacings = Spacings::default();
        for value in [
            spacings.none,
            spacings.extra_small,
            spacings.small,
            spacings.medium,
            spacings.large,
            spacings.extra_large,
            spacings.ultra,
        ] {
            assert_eq!(value % 4.0, 0.0, "{value} is off the 4px grid");
        }
    }

    #[test]
    fn test_constants_default() {
        let constants = Constants::default();
        assert_eq!(constants.disabled_opacity, 0.3);
        assert!(constants.small_button_size < constants.medium_button_size);
    }
}
