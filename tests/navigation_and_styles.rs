//! End-to-end behavior of navigation, style resolution and theming

use kettle_gym::routes::{ProgramId, TabRoute, WorkoutPlanRoute};
use kettle_gym::AppShell;
use router::{Router, TabRouter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use zenith::button::{ButtonConfiguration, ButtonStyleCase, ButtonStyleKey};
use zenith::divider::{DividerStyleCase, DividerStyleKey};
use zenith::text::{Text, TextStyleCase, TextStyleKey};
use zenith::{Button, Divider, Environment};
use zenith_core::{
    Color, ColorName, MockThemeProvider, Theme, ThemeConfigurator, ThemeName, ThemeProvider,
    ThemeSettings,
};

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_stack_push_pop_and_overpop() {
    let router = Router::new();
    router.navigate(WorkoutPlanRoute::Detail(ProgramId(1)));
    router.navigate(WorkoutPlanRoute::Edit(ProgramId(1)));
    assert_eq!(
        router.all(),
        vec![
            WorkoutPlanRoute::Detail(ProgramId(1)),
            WorkoutPlanRoute::Edit(ProgramId(1)),
        ]
    );

    router.navigate_back();
    assert_eq!(router.all(), vec![WorkoutPlanRoute::Detail(ProgramId(1))]);

    router.navigate_back();
    router.navigate_back();
    assert!(router.all().is_empty());
    assert_eq!(router.current(), None);
}

#[test]
fn test_tab_selection_round_trip() {
    let tabs = TabRouter::new(TabRoute::Home);
    tabs.select(TabRoute::ComingSoon);
    assert_eq!(tabs.selected(), TabRoute::ComingSoon);

    for tab in TabRoute::ALL {
        tabs.select(tab);
        assert_eq!(tabs.selected(), tab);
    }
}

#[test]
fn test_reset_yields_single_destination() {
    let router = Router::new();
    router.navigate(WorkoutPlanRoute::CreateWorkoutPlan);
    router.navigate(WorkoutPlanRoute::ComingSoonFeature);
    router.reset(WorkoutPlanRoute::Detail(ProgramId(9)));
    assert_eq!(router.all(), vec![WorkoutPlanRoute::Detail(ProgramId(9))]);
}

#[test]
fn test_shell_tab_reselect_pops_home() {
    let shell = AppShell::default();
    let updates = shell.home().subscribe();

    shell.home().navigate(WorkoutPlanRoute::Detail(ProgramId(2)));
    shell.tap_tab(TabRoute::Home);

    assert!(shell.home().is_empty());
    assert!(updates.has_changed().unwrap());
}

// =============================================================================
// Styles
// =============================================================================

#[test]
fn test_primary_button_resolves_deterministically() {
    let mut provider = MockThemeProvider::new();
    provider.expect_tokens().times(2).returning(Theme::dark);
    let env = Environment::new(provider);
    let configuration = ButtonConfiguration::new("Save");

    let first = ButtonStyleCase::Primary.style().render(&configuration, &env);
    let second = ButtonStyleCase::Primary.style().render(&configuration, &env);

    let theme = Theme::dark();
    assert_eq!(first, second);
    assert_eq!(first.font, Some(theme.fonts.small.clone()));
    assert_eq!(first.foreground, Some(theme.colors.primary));
    assert_eq!(first.padding.top, theme.spacings.medium);
}

#[test]
fn test_theme_change_between_renders() {
    let blue = Color::rgb(0, 0, 255);
    let green = Color::rgb(0, 255, 0);
    let calls = Arc::new(AtomicUsize::new(0));

    let mut provider = MockThemeProvider::new();
    let counter = Arc::clone(&calls);
    provider.expect_tokens().times(2).returning(move || {
        let mut theme = Theme::dark();
        theme.colors.primary = if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            blue
        } else {
            green
        };
        theme
    });

    let env = Environment::new(provider);
    let style = ButtonStyleCase::Primary.style();
    let configuration = ButtonConfiguration::new("Save");

    let first = style.render(&configuration, &env);
    let second = style.render(&configuration, &env);

    assert_eq!(first.foreground, Some(blue));
    assert_eq!(second.foreground, Some(green));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_configurator_recolor_reaches_resolved_style() {
    let configurator = ThemeConfigurator::new(ThemeName::Dark);
    let env = Environment::new(configurator.clone());
    let button = Button::new("Save");

    configurator.set_color(ColorName::Primary, Color::rgb(0, 0, 255));
    let before = button.render(&env);
    configurator.set_color(ColorName::Primary, Color::rgb(0, 255, 0));
    let after = button.render(&env);

    assert_eq!(before.foreground, Some(Color::rgb(0, 0, 255)));
    assert_eq!(after.foreground, Some(Color::rgb(0, 255, 0)));
}

#[test]
fn test_ambient_overrides_nest_and_unwind() {
    let env = Environment::new(Theme::light());
    let colors = Theme::light().colors;

    let rendered = env.scoped::<DividerStyleKey, _>(DividerStyleCase::Tertiary.style(), |section| {
        let inner = section.with_style::<TextStyleKey>(TextStyleCase::BigBoldTextPrimary.style());
        (
            Divider::new().render(&inner),
            Text::new("Total volume").render(&inner),
            Button::new("Start").render(&inner),
        )
    });

    assert_eq!(rendered.0.background, Some(colors.primary));
    assert_eq!(rendered.1.font, Some(Theme::light().fonts.big_bold));
    assert_eq!(rendered.2.foreground, Some(colors.primary));

    assert_eq!(env.style::<DividerStyleKey>(), DividerStyleCase::Primary.style());
    assert_eq!(env.style::<ButtonStyleKey>(), ButtonStyleCase::Primary.style());
}

#[test]
fn test_settings_drive_the_shell_theme() {
    let settings =
        ThemeSettings::from_json(r##"{ "theme": "light", "colors": { "primary": "#00FF00" } }"##)
            .unwrap();
    let shell = AppShell::from_settings(&settings);

    assert_eq!(shell.theme().theme_name(), ThemeName::Light);
    assert_eq!(shell.theme().tokens().colors.primary, Color::rgb(0, 255, 0));
    assert_eq!(shell.tab_bar()[0].foreground, Some(Color::rgb(0, 255, 0)));
}
