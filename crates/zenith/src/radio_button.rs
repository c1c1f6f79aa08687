//! Radio button styles
//!
//! A radio button renders as a row: a circular indicator followed by its
//! label. Selection state flows through a [`Binding`], so several buttons
//! tagged against one selection behave as a single-choice group.

use crate::binding::Binding;
use crate::environment::{Environment, StyleKey};
use crate::renderable::{Border, Frame, Renderable, Shape};
use crate::style::{AnyStyle, Style, StyleKind};
use serde::{Deserialize, Serialize};
use zenith_core::{ColorName, Theme};

/// Diameter of the indicator circle
pub const INDICATOR_SIZE: f32 = 20.0;

/// Data a radio button style renders from
#[derive(Debug, Clone)]
pub struct RadioButtonConfiguration {
    /// Label next to the indicator
    pub text: String,
    /// Selection flag
    pub is_selected: Binding<bool>,
    /// Disabled flag
    pub is_disabled: Binding<bool>,
}

impl RadioButtonConfiguration {
    /// Mark selected unless disabled
    pub fn select(&self) {
        if self.is_disabled.get() {
            tracing::trace!(text = %self.text, "Ignoring tap on disabled radio button");
            return;
        }
        self.is_selected.set(true);
    }
}

/// Erased radio button style
pub type AnyRadioButtonStyle = AnyStyle<RadioButtonConfiguration>;

fn radio_row(
    configuration: &RadioButtonConfiguration,
    theme: &Theme,
    accent: ColorName,
) -> Renderable {
    let colors = &theme.colors;
    let accent = colors.color(accent);

    let indicator =
        Renderable::new(StyleKind::RadioButton).with_frame(Frame::square(INDICATOR_SIZE));
    let indicator = if configuration.is_selected.get() {
        indicator
            .with_background(accent)
            .with_border(Border::new(accent, 1.0, Shape::Circle))
    } else {
        indicator.with_border(Border::new(colors.text_secondary, 1.0, Shape::Circle))
    };

    let label = Renderable::new(StyleKind::Text)
        .with_content(configuration.text.clone())
        .with_font(theme.fonts.small.clone())
        .with_foreground(colors.text_primary);

    let opacity = if configuration.is_disabled.get() {
        theme.constants.disabled_opacity
    } else {
        1.0
    };

    Renderable::new(StyleKind::RadioButton)
        .with_spacing(theme.spacings.small)
        .with_opacity(opacity)
        .with_child(indicator)
        .with_child(label)
}

/// Indicator filled with the brand accent
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRadioButtonStyle;

impl Style for DefaultRadioButtonStyle {
    type Configuration = RadioButtonConfiguration;

    fn make_body(&self, configuration: &RadioButtonConfiguration, env: &Environment) -> Renderable {
        radio_row(configuration, &env.theme(), ColorName::Primary)
    }
}

/// Indicator filled with the highlight color
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightRadioButtonStyle;

impl Style for HighlightRadioButtonStyle {
    type Configuration = RadioButtonConfiguration;

    fn make_body(&self, configuration: &RadioButtonConfiguration, env: &Environment) -> Renderable {
        radio_row(configuration, &env.theme(), ColorName::HighlightA)
    }
}

/// Named radio button styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadioButtonStyleCase {
    /// [`DefaultRadioButtonStyle`]
    Default,
    /// [`HighlightRadioButtonStyle`]
    Highlight,
}

impl RadioButtonStyleCase {
    /// Every case
    pub const ALL: [RadioButtonStyleCase; 2] =
        [RadioButtonStyleCase::Default, RadioButtonStyleCase::Highlight];

    /// Resolve the case to its style
    pub fn style(&self) -> AnyRadioButtonStyle {
        tracing::trace!(case = ?self, "Resolving radio button style");
        match self {
            RadioButtonStyleCase::Default => AnyStyle::new(DefaultRadioButtonStyle),
            RadioButtonStyleCase::Highlight => AnyStyle::new(HighlightRadioButtonStyle),
        }
    }
}

/// Ambient radio button style key
pub struct RadioButtonStyleKey;

impl StyleKey for RadioButtonStyleKey {
    type Configuration = RadioButtonConfiguration;
    const KIND: StyleKind = StyleKind::RadioButton;

    fn default_style() -> AnyRadioButtonStyle {
        RadioButtonStyleCase::Default.style()
    }
}

/// A radio button
#[derive(Debug, Clone)]
pub struct RadioButton {
    configuration: RadioButtonConfiguration,
    style: Option<AnyRadioButtonStyle>,
}

impl RadioButton {
    /// Radio button driven by its own selection flag
    pub fn new(is_selected: Binding<bool>, text: impl Into<String>) -> Self {
        Self {
            configuration: RadioButtonConfiguration {
                text: text.into(),
                is_selected,
                is_disabled: Binding::constant(false),
            },
            style: None,
        }
    }

    /// Radio button selected while `selection` holds `tag`
    pub fn tagged<V>(tag: V, selection: Binding<Option<V>>, text: impl Into<String>) -> Self
    where
        V: PartialEq + Clone + Send + Sync + 'static,
    {
        Self::new(Binding::tagged(selection, tag), text)
    }

    /// Bind the disabled flag
    pub fn with_disabled(mut self, is_disabled: Binding<bool>) -> Self {
        self.configuration.is_disabled = is_disabled;
        self
    }

    /// Fix the disabled flag
    pub fn disabled(self, is_disabled: bool) -> Self {
        self.with_disabled(Binding::constant(is_disabled))
    }

    /// Use a specific style instead of the ambient one
    pub fn with_style(mut self, style: AnyRadioButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Whether the button is currently selected
    pub fn is_selected(&self) -> bool {
        self.configuration.is_selected.get()
    }

    /// Handle a tap
    pub fn tap(&self) {
        self.configuration.select();
    }

    /// Render with the explicit style, or the environment's default
    pub fn render(&self, env: &Environment) -> Renderable {
        let style = match &self.style {
            Some(style) => style.clone(),
            None => env.style::<RadioButtonStyleKey>(),
        };
        style.render(&self.configuration, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::State;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Level {
        Beginner,
        Advanced,
    }

    #[test]
    fn test_tagged_group_is_single_choice() {
        let selection = State::new(None);
        let beginner = RadioButton::tagged(Level::Beginner, selection.binding(), "Beginner");
        let advanced = RadioButton::tagged(Level::Advanced, selection.binding(), "Advanced");

        beginner.tap();
        assert_eq!(selection.get(), Some(Level::Beginner));
        assert!(beginner.is_selected());
        assert!(!advanced.is_selected());

        advanced.tap();
        assert_eq!(selection.get(), Some(Level::Advanced));
        assert!(!beginner.is_selected());
    }

    #[test]
    fn test_disabled_ignores_tap() {
        let selection = State::new(None);
        let button =
            RadioButton::tagged(Level::Beginner, selection.binding(), "Beginner").disabled(true);

        button.tap();
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_selected_rendering() {
        let theme = Theme::dark();
        let env = Environment::new(theme.clone());
        let flag = State::new(true);

        let node = RadioButton::new(flag.binding(), "Kettlebell").render(&env);
        assert_eq!(node.kind, StyleKind::RadioButton);
        assert_eq!(node.spacing, Some(theme.spacings.small));
        assert_eq!(node.children.len(), 2);

        let indicator = &node.children[0];
        assert_eq!(indicator.frame, Some(Frame::square(INDICATOR_SIZE)));
        assert_eq!(indicator.background, Some(theme.colors.primary));

        let label = &node.children[1];
        assert_eq!(label.content.as_deref(), Some("Kettlebell"));
        assert_eq!(label.font, Some(theme.fonts.small.clone()));
        assert_eq!(label.foreground, Some(theme.colors.text_primary));
    }

    #[test]
    fn test_unselected_rendering() {
        let theme = Theme::light();
        let env = Environment::new(theme.clone());
        let node = RadioButton::new(Binding::constant(false), "Bodyweight").render(&env);

        let indicator = &node.children[0];
        assert!(indicator.background.is_none());
        assert_eq!(
            indicator.border,
            Some(Border::new(theme.colors.text_secondary, 1.0, Shape::Circle))
        );
    }

    #[test]
    fn test_highlight_accent() {
        let theme = Theme::dark();
        let env = Environment::new(theme.clone())
            .with_style::<RadioButtonStyleKey>(RadioButtonStyleCase::Highlight.style());

        let node = RadioButton::new(Binding::constant(true), "Bodyweight").render(&env);
        assert_eq!(node.children[0].background, Some(theme.colors.highlight_a));
    }

    #[test]
    fn test_disabled_dims() {
        let env = Environment::default();
        let node = RadioButton::new(Binding::constant(false), "Bands")
            .disabled(true)
            .render(&env);
        assert_eq!(node.opacity, Theme::default().constants.disabled_opacity);
    }

    #[test]
    fn test_render_reflects_selection_changes() {
        let env = Environment::default();
        let flag = State::new(false);
        let button = RadioButton::new(flag.binding(), "Rings");

        assert!(button.render(&env).children[0].background.is_none());
        button.tap();
        assert!(flag.get());
        assert!(button.render(&env).children[0].background.is_some());
    }
}
