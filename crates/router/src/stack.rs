//! Navigation stack

use crate::Routable;
use tokio::sync::watch;

/// Push/pop stack of destinations
///
/// The stack starts empty, which means the owning screen shows its root.
/// It is owned by the screen that created it and is deliberately not
/// `Clone`; descendants receive `&Router` to push onto it.
#[derive(Debug)]
pub struct Router<R: Routable> {
    stack: watch::Sender<Vec<R>>,
}

impl<R: Routable> Router<R> {
    /// Create an empty stack
    pub fn new() -> Self {
        let (stack, _) = watch::channel(Vec::new());
        Self { stack }
    }

    /// Push a destination
    pub fn navigate(&self, to: R) {
        tracing::debug!(destination = ?to, "Navigating");
        self.stack.send_modify(|stack| stack.push(to));
    }

    /// Pop the top destination; does nothing on an empty stack
    pub fn navigate_back(&self) {
        let popped = self.stack.send_if_modified(|stack| stack.pop().is_some());
        if popped {
            tracing::debug!(depth = self.depth(), "Navigated back");
        }
    }

    /// Replace the whole stack with `[to]`
    pub fn reset(&self, to: R) {
        tracing::debug!(destination = ?to, "Resetting navigation stack");
        self.stack.send_replace(vec![to]);
    }

    /// Clear the stack, returning to the root screen
    pub fn pop_to_root(&self) {
        let cleared = self.stack.send_if_modified(|stack| {
            if stack.is_empty() {
                false
            } else {
                stack.clear();
                true
            }
        });
        if cleared {
            tracing::debug!("Popped to root");
        }
    }

    /// Top destination, or `None` at the root
    pub fn current(&self) -> Option<R> {
        self.stack.borrow().last().cloned()
    }

    /// Every destination, bottom to top
    pub fn all(&self) -> Vec<R> {
        self.stack.borrow().clone()
    }

    /// Number of pushed destinations
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// Whether the root screen is showing
    pub fn is_empty(&self) -> bool {
        self.stack.borrow().is_empty()
    }

    /// Whether there is anything to pop
    pub fn can_go_back(&self) -> bool {
        !self.is_empty()
    }

    /// Bodies of every destination, bottom to top
    pub fn bodies(&self) -> Vec<R::Body> {
        self.stack.borrow().iter().map(Routable::body).collect()
    }

    /// Observe stack changes
    pub fn subscribe(&self) -> watch::Receiver<Vec<R>> {
        self.stack.subscribe()
    }
}

impl<R: Routable> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}
