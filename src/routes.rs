//! Destinations of the KettleGym app

use router::Routable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training program identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub u64);

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program-{}", self.0)
    }
}

/// Workout session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Screen a destination renders into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Screen {
    /// Program list on the home tab
    Home,
    /// Placeholder tab
    ComingSoon,
    /// Workout plan wizard
    CreateWorkoutPlan,
    /// Plans inside a program
    WorkoutPlans {
        /// Program shown
        program: ProgramId,
    },
    /// Running session
    WorkoutSession {
        /// Session shown
        session: SessionId,
    },
    /// Program overview
    ProgramDetail {
        /// Program shown
        program: ProgramId,
    },
    /// Program editor
    EditProgram {
        /// Program edited
        program: ProgramId,
    },
    /// Feature not built yet
    ComingSoonFeature,
}

impl Screen {
    /// Navigation bar title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Programs",
            Screen::ComingSoon | Screen::ComingSoonFeature => "Coming soon",
            Screen::CreateWorkoutPlan => "New workout plan",
            Screen::WorkoutPlans { .. } => "Workout plans",
            Screen::WorkoutSession { .. } => "Session",
            Screen::ProgramDetail { .. } => "Program",
            Screen::EditProgram { .. } => "Edit program",
        }
    }
}

/// Bottom tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabRoute {
    /// Programs and workouts
    Home,
    /// Upcoming features
    ComingSoon,
}

impl TabRoute {
    /// Tabs in display order
    pub const ALL: [TabRoute; 2] = [TabRoute::Home, TabRoute::ComingSoon];

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            TabRoute::Home => "Home",
            TabRoute::ComingSoon => "Coming soon",
        }
    }

    /// Tab bar symbol
    pub fn icon(&self) -> &'static str {
        "list.dash"
    }
}

impl Routable for TabRoute {
    type Body = Screen;

    fn body(&self) -> Screen {
        match self {
            TabRoute::Home => Screen::Home,
            TabRoute::ComingSoon => Screen::ComingSoon,
        }
    }
}

/// Destinations pushed on the home tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutPlanRoute {
    /// Workout plan wizard
    CreateWorkoutPlan,
    /// Plans inside a program
    WorkoutPlans(ProgramId),
    /// Running session
    WorkoutSession(SessionId),
    /// Program overview
    Detail(ProgramId),
    /// Program editor
    Edit(ProgramId),
    /// Feature not built yet
    ComingSoonFeature,
}

impl Routable for WorkoutPlanRoute {
    type Body = Screen;

    fn body(&self) -> Screen {
        match *self {
            WorkoutPlanRoute::CreateWorkoutPlan => Screen::CreateWorkoutPlan,
            WorkoutPlanRoute::WorkoutPlans(program) => Screen::WorkoutPlans { program },
            WorkoutPlanRoute::WorkoutSession(session) => Screen::WorkoutSession { session },
            WorkoutPlanRoute::Detail(program) => Screen::ProgramDetail { program },
            WorkoutPlanRoute::Edit(program) => Screen::EditProgram { program },
            WorkoutPlanRoute::ComingSoonFeature => Screen::ComingSoonFeature,
        }
    }
}
