//! Zenith design system styles
//!
//! Components in this crate do not decide how they look. Each one builds a
//! configuration and hands it to a pluggable [`Style`], which reads the
//! current theme tokens and describes the result as a [`Renderable`].
//!
//! # Modules
//!
//! - [`style`] - The [`Style`] trait, [`AnyStyle`] erasure and [`StyleId`]
//! - [`environment`] - Render context with ambient default styles
//! - [`binding`] - Read/write bindings used by configurations
//! - [`renderable`] - Render output
//! - [`button`], [`divider`], [`text`], [`dynamic_image`], [`radio_button`] -
//!   Components, their shipped styles and `*StyleCase` registries
//!
//! # Example
//!
//! ```rust
//! use zenith::text::{Text, TextStyleCase, TextStyleKey};
//! use zenith::Environment;
//! use zenith_core::{Theme, ThemeName, ThemeConfigurator};
//!
//! let configurator = ThemeConfigurator::new(ThemeName::Dark);
//! let env = Environment::new(configurator.clone())
//!     .with_style::<TextStyleKey>(TextStyleCase::MediumTextPrimary.style());
//!
//! let title = Text::new("Swing 10x");
//! let dark = title.render(&env);
//!
//! configurator.change(ThemeName::Light);
//! let light = title.render(&env);
//!
//! assert_eq!(dark.foreground, Some(Theme::dark().colors.text_primary));
//! assert_eq!(light.foreground, Some(Theme::light().colors.text_primary));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod button;
pub mod divider;
pub mod dynamic_image;
pub mod environment;
pub mod radio_button;
pub mod renderable;
pub mod style;
pub mod text;

pub use binding::{Binding, State};
pub use button::{Button, ButtonStyleCase};
pub use divider::{Divider, DividerStyleCase};
pub use dynamic_image::{DynamicImage, DynamicImageStyleCase};
pub use environment::{Environment, StyleKey};
pub use radio_button::{RadioButton, RadioButtonStyleCase};
pub use renderable::{Border, EdgeInsets, Frame, ImageSource, Renderable, Shape};
pub use style::{AnyStyle, Style, StyleId, StyleKind};
pub use text::{Text, TextStyleCase};
