//! Button styles
//!
//! Both shipped styles draw an outlined capsule around a small label and
//! differ only in accent color.

use crate::environment::{Environment, StyleKey};
use crate::renderable::{Border, EdgeInsets, Renderable, Shape};
use crate::style::{AnyStyle, Style, StyleKind};
use serde::{Deserialize, Serialize};
use zenith_core::{Color, Theme};

/// Data a button style renders from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonConfiguration {
    /// Button label
    pub label: String,
    /// Whether the button is being pressed
    pub is_pressed: bool,
}

impl ButtonConfiguration {
    /// Configuration for an idle button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_pressed: false,
        }
    }
}

/// Erased button style
pub type AnyButtonStyle = AnyStyle<ButtonConfiguration>;

fn outlined_capsule(
    configuration: &ButtonConfiguration,
    theme: &Theme,
    accent: Color,
) -> Renderable {
    let opacity = if configuration.is_pressed {
        theme.constants.tap_opacity
    } else {
        1.0
    };

    Renderable::new(StyleKind::Button)
        .with_content(configuration.label.clone())
        .with_font(theme.fonts.small.clone())
        .with_padding(EdgeInsets::all(theme.spacings.medium))
        .with_border(Border::new(accent, 1.0, Shape::Capsule))
        .with_foreground(accent)
        .with_opacity(opacity)
}

/// Capsule outlined in the brand accent
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryButtonStyle;

impl Style for PrimaryButtonStyle {
    type Configuration = ButtonConfiguration;

    fn make_body(&self, configuration: &ButtonConfiguration, env: &Environment) -> Renderable {
        let theme = env.theme();
        let accent = theme.colors.primary;
        outlined_capsule(configuration, &theme, accent)
    }
}

/// Capsule outlined in the main text color
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondaryButtonStyle;

impl Style for SecondaryButtonStyle {
    type Configuration = ButtonConfiguration;

    fn make_body(&self, configuration: &ButtonConfiguration, env: &Environment) -> Renderable {
        let theme = env.theme();
        let accent = theme.colors.text_primary;
        outlined_capsule(configuration, &theme, accent)
    }
}

/// Named button styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonStyleCase {
    /// [`PrimaryButtonStyle`]
    Primary,
    /// [`SecondaryButtonStyle`]
    Secondary,
}

impl ButtonStyleCase {
    /// Every case
    pub const ALL: [ButtonStyleCase; 2] = [ButtonStyleCase::Primary, ButtonStyleCase::Secondary];

    /// Resolve the case to its style
    pub fn style(&self) -> AnyButtonStyle {
        tracing::trace!(case = ?self, "Resolving button style");
        match self {
            ButtonStyleCase::Primary => AnyStyle::new(PrimaryButtonStyle),
            ButtonStyleCase::Secondary => AnyStyle::new(SecondaryButtonStyle),
        }
    }
}

/// Ambient button style key
pub struct ButtonStyleKey;

impl StyleKey for ButtonStyleKey {
    type Configuration = ButtonConfiguration;
    const KIND: StyleKind = StyleKind::Button;

    fn default_style() -> AnyButtonStyle {
        ButtonStyleCase::Primary.style()
    }
}

/// A button
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    is_pressed: bool,
    style: Option<AnyButtonStyle>,
}

impl Button {
    /// Create a button with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_pressed: false,
            style: None,
        }
    }

    /// Set pressed state
    pub fn pressed(mut self, is_pressed: bool) -> Self {
        self.is_pressed = is_pressed;
        self
    }

    /// Use a specific style instead of the ambient one
    pub fn with_style(mut self, style: AnyButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Configuration handed to the style
    pub fn configuration(&self) -> ButtonConfiguration {
        ButtonConfiguration {
            label: self.label.clone(),
            is_pressed: self.is_pressed,
        }
    }

    /// Render with the explicit style, or the environment's default
    pub fn render(&self, env: &Environment) -> Renderable {
        let style = match &self.style {
            Some(style) => style.clone(),
            None => env.style::<ButtonStyleKey>(),
        };
        style.render(&self.configuration(), env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_core::{ColorName, ThemeConfigurator, ThemeName, ThemeProvider};

    #[test]
    fn test_primary_uses_theme_tokens() {
        let env = Environment::new(Theme::dark());
        let theme = Theme::dark();

        let node = ButtonStyleCase::Primary
            .style()
            .render(&ButtonConfiguration::new("Save"), &env);

        assert_eq!(node.kind, StyleKind::Button);
        assert_eq!(node.content.as_deref(), Some("Save"));
        assert_eq!(node.font, Some(theme.fonts.small.clone()));
        assert_eq!(node.foreground, Some(theme.colors.primary));
        assert_eq!(node.padding, EdgeInsets::all(theme.spacings.medium));
        assert_eq!(
            node.border,
            Some(Border::new(theme.colors.primary, 1.0, Shape::Capsule))
        );
        assert_eq!(node.opacity, 1.0);
    }

    #[test]
    fn test_secondary_uses_text_color() {
        let env = Environment::new(Theme::light());
        let node = ButtonStyleCase::Secondary
            .style()
            .render(&ButtonConfiguration::new("Cancel"), &env);
        assert_eq!(node.foreground, Some(Theme::light().colors.text_primary));
    }

    #[test]
    fn test_pressed_dims() {
        let env = Environment::default();
        let node = Button::new("Go").pressed(true).render(&env);
        assert_eq!(node.opacity, Theme::default().constants.tap_opacity);
    }

    #[test]
    fn test_resolution_is_pure() {
        let env = Environment::default();
        let configuration = ButtonConfiguration::new("Save");
        for case in ButtonStyleCase::ALL {
            assert_eq!(
                case.style().render(&configuration, &env),
                case.style().render(&configuration, &env)
            );
            assert_eq!(case.style().id(), case.style().id());
        }
    }

    #[test]
    fn test_cases_resolve_to_distinct_styles() {
        assert_ne!(
            ButtonStyleCase::Primary.style(),
            ButtonStyleCase::Secondary.style()
        );
    }

    #[test]
    fn test_retheme_without_resolving_again() {
        let configurator = ThemeConfigurator::new(ThemeName::Dark);
        let env = Environment::new(configurator.clone());
        let style = ButtonStyleCase::Primary.style();
        let configuration = ButtonConfiguration::new("Save");

        let blue = Color::rgb(0, 0, 255);
        let green = Color::rgb(0, 255, 0);

        configurator.set_color(ColorName::Primary, blue);
        assert_eq!(style.render(&configuration, &env).foreground, Some(blue));

        configurator.set_color(ColorName::Primary, green);
        assert_eq!(style.render(&configuration, &env).foreground, Some(green));
        assert_eq!(configurator.tokens().colors.primary, green);
    }

    #[test]
    fn test_button_prefers_explicit_style() {
        let env = Environment::default()
            .with_style::<ButtonStyleKey>(ButtonStyleCase::Secondary.style());
        let theme = Theme::default();

        let ambient = Button::new("Log set").render(&env);
        assert_eq!(ambient.foreground, Some(theme.colors.text_primary));

        let explicit = Button::new("Log set")
            .with_style(ButtonStyleCase::Primary.style())
            .render(&env);
        assert_eq!(explicit.foreground, Some(theme.colors.primary));
    }

    #[test]
    fn test_case_serialization() {
        let json = serde_json::to_string(&ButtonStyleCase::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
        let parsed: ButtonStyleCase = serde_json::from_str("\"primary\"").unwrap();
        assert_eq!(parsed, ButtonStyleCase::Primary);
    }
}
