//! Navigation state for KettleGym screens
//!
//! Two routers cover the app's navigation needs:
//!
//! - [`Router`] - A push/pop stack of destinations owned by one screen
//! - [`TabRouter`] - The selected tab, shared by every screen under it
//!
//! Both publish their state through a `tokio::sync::watch` channel. Hosts
//! subscribe once and re-render whenever the receiver reports a change. The
//! API is synchronous; no runtime is required to mutate or observe.
//!
//! # Example
//!
//! ```rust
//! use router::{Routable, Router};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum Destination {
//!     Detail(u32),
//!     Edit(u32),
//! }
//!
//! impl Routable for Destination {
//!     type Body = String;
//!
//!     fn body(&self) -> String {
//!         format!("{self:?}")
//!     }
//! }
//!
//! let router = Router::new();
//! let updates = router.subscribe();
//!
//! router.navigate(Destination::Detail(7));
//! router.navigate(Destination::Edit(7));
//! router.navigate_back();
//!
//! assert_eq!(router.current(), Some(Destination::Detail(7)));
//! assert!(updates.has_changed().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod stack;
pub mod tabs;

pub use stack::Router;
pub use tabs::TabRouter;

use std::fmt::Debug;
use std::hash::Hash;

/// A destination in a closed set of navigable screens
///
/// Destinations are plain values. Rendering one depends only on its own
/// fields.
pub trait Routable: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// What the destination renders into
    type Body;

    /// Build the screen for this destination
    fn body(&self) -> Self::Body;
}
