//! App shell
//!
//! [`AppShell`] owns the navigation and theme state every screen shares:
//! the tab selection, the home tab's navigation stack, the theme
//! configurator and the root render [`Environment`].

use crate::routes::{Screen, TabRoute, WorkoutPlanRoute};
use router::{Routable, Router, TabRouter};
use zenith::text::{Text, TextStyleCase};
use zenith::{Environment, Renderable};
use zenith_core::{ThemeConfigurator, ThemeSettings};

/// Root of the app's navigation and theme state
#[derive(Debug)]
pub struct AppShell {
    tabs: TabRouter<TabRoute>,
    home: Router<WorkoutPlanRoute>,
    theme: ThemeConfigurator,
    environment: Environment,
}

impl AppShell {
    /// Shell on the home tab, rendering with `theme`
    pub fn new(theme: ThemeConfigurator) -> Self {
        let environment = Environment::new(theme.clone());
        Self {
            tabs: TabRouter::new(TabRoute::Home),
            home: Router::new(),
            theme,
            environment,
        }
    }

    /// Shell themed from settings
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        Self::new(ThemeConfigurator::from_settings(settings))
    }

    /// Shared tab selection
    pub fn tabs(&self) -> &TabRouter<TabRoute> {
        &self.tabs
    }

    /// Navigation stack of the home tab
    pub fn home(&self) -> &Router<WorkoutPlanRoute> {
        &self.home
    }

    /// Theme configurator
    pub fn theme(&self) -> &ThemeConfigurator {
        &self.theme
    }

    /// Root render environment
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Handle a tap on the tab bar
    ///
    /// Tapping the home tab while it is selected pops its stack to root.
    pub fn tap_tab(&self, tab: TabRoute) {
        let home = &self.home;
        self.tabs.select_with_reselect(tab, |reselected| {
            if *reselected == TabRoute::Home {
                home.pop_to_root();
            }
        });
    }

    /// Screen currently on top
    pub fn visible_screen(&self) -> Screen {
        match self.tabs.selected() {
            TabRoute::Home => self
                .home
                .current()
                .map(|route| route.body())
                .unwrap_or_else(|| TabRoute::Home.body()),
            tab => tab.body(),
        }
    }

    /// Tab bar labels, the selected tab in the accent color
    pub fn tab_bar(&self) -> Vec<Renderable> {
        let selected = self.tabs.selected();
        TabRoute::ALL
            .iter()
            .map(|tab| {
                let case = if *tab == selected {
                    TextStyleCase::SmallPrimary
                } else {
                    TextStyleCase::SmallTextSecondary
                };
                Text::new(tab.label())
                    .with_style(case.style())
                    .render(&self.environment)
            })
            .collect()
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new(ThemeConfigurator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ProgramId;
    use zenith_core::{Theme, ThemeName};

    #[test]
    fn test_starts_on_home_root() {
        let shell = AppShell::default();
        assert_eq!(shell.tabs().selected(), TabRoute::Home);
        assert_eq!(shell.visible_screen(), Screen::Home);
    }

    #[test]
    fn test_visible_screen_follows_stack() {
        let shell = AppShell::default();
        shell.home().navigate(WorkoutPlanRoute::Detail(ProgramId(1)));
        assert_eq!(
            shell.visible_screen(),
            Screen::ProgramDetail {
                program: ProgramId(1)
            }
        );

        shell.tap_tab(TabRoute::ComingSoon);
        assert_eq!(shell.visible_screen(), Screen::ComingSoon);
        assert_eq!(shell.home().depth(), 1);
    }

    #[test]
    fn test_reselecting_home_pops_to_root() {
        let shell = AppShell::default();
        shell.home().navigate(WorkoutPlanRoute::Detail(ProgramId(1)));
        shell.home().navigate(WorkoutPlanRoute::Edit(ProgramId(1)));

        shell.tap_tab(TabRoute::Home);
        assert!(shell.home().is_empty());
        assert_eq!(shell.visible_screen(), Screen::Home);
    }

    #[test]
    fn test_switching_tabs_keeps_home_stack() {
        let shell = AppShell::default();
        shell.home().navigate(WorkoutPlanRoute::CreateWorkoutPlan);

        shell.tap_tab(TabRoute::ComingSoon);
        shell.tap_tab(TabRoute::Home);
        assert_eq!(shell.home().current(), Some(WorkoutPlanRoute::CreateWorkoutPlan));
    }

    #[test]
    fn test_tab_bar_highlights_selection() {
        let shell = AppShell::new(ThemeConfigurator::new(ThemeName::Dark));
        let colors = Theme::dark().colors;

        let bar = shell.tab_bar();
        assert_eq!(bar[0].content.as_deref(), Some("Home"));
        assert_eq!(bar[0].foreground, Some(colors.primary));
        assert_eq!(bar[1].foreground, Some(colors.text_secondary));

        shell.tap_tab(TabRoute::ComingSoon);
        let bar = shell.tab_bar();
        assert_eq!(bar[0].foreground, Some(colors.text_secondary));
        assert_eq!(bar[1].foreground, Some(colors.primary));
    }

    #[test]
    fn test_theme_change_reaches_environment() {
        let shell = AppShell::default();
        shell.theme().change(ThemeName::Light);
        assert_eq!(shell.environment().theme().name, ThemeName::Light);
    }
}
