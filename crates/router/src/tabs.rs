//! Tab selection

use crate::Routable;
use std::sync::Arc;
use tokio::sync::watch;

/// Currently selected tab
///
/// Cloning yields another handle to the same selection, so a screen deep in
/// a tab can switch tabs.
#[derive(Debug, Clone)]
pub struct TabRouter<R: Routable> {
    selection: Arc<watch::Sender<R>>,
}

impl<R: Routable> TabRouter<R> {
    /// Create a router with `initial` selected
    pub fn new(initial: R) -> Self {
        let (selection, _) = watch::channel(initial);
        Self {
            selection: Arc::new(selection),
        }
    }

    /// Select `tab`; the last write wins
    pub fn select(&self, tab: R) {
        tracing::debug!(tab = ?tab, "Selecting tab");
        self.selection.send_replace(tab);
    }

    /// Select `tab`, first calling `on_reselect` if it is already selected
    pub fn select_with_reselect(&self, tab: R, on_reselect: impl FnOnce(&R)) {
        if self.selected() == tab {
            tracing::debug!(tab = ?tab, "Tab reselected");
            on_reselect(&tab);
        }
        self.select(tab);
    }

    /// The selected tab
    pub fn selected(&self) -> R {
        self.selection.borrow().clone()
    }

    /// Observe selection changes
    pub fn subscribe(&self) -> watch::Receiver<R> {
        self.selection.subscribe()
    }
}
