//! KettleGym
//!
//! Application glue for the KettleGym workout tracker. The building blocks
//! live in their own crates and are re-exported here:
//!
//! - [`zenith_core`] - Theme tokens and the theme provider
//! - [`zenith`] - Pluggable component styles
//! - [`router`] - Navigation stack and tab selection
//!
//! This crate adds the app's destinations ([`routes`]), the [`AppShell`]
//! that owns shared navigation and theme state, and logging setup.
//!
//! # Example
//!
//! ```rust
//! use kettle_gym::routes::{ProgramId, Screen, TabRoute, WorkoutPlanRoute};
//! use kettle_gym::AppShell;
//!
//! let shell = AppShell::default();
//! shell.home().navigate(WorkoutPlanRoute::Detail(ProgramId(1)));
//! assert_eq!(shell.visible_screen(), Screen::ProgramDetail { program: ProgramId(1) });
//!
//! // Tapping the selected tab again returns to its root
//! shell.tap_tab(TabRoute::Home);
//! assert_eq!(shell.visible_screen(), Screen::Home);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod routes;
pub mod shell;

pub use logging::init_logging;
pub use shell::AppShell;

pub use router;
pub use zenith;
pub use zenith_core;
