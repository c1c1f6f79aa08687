//! Read/write bindings to state owned elsewhere
//!
//! Configurations carry bindings instead of values when a style or component
//! needs to write back, such as a radio button marking itself selected.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared mutable cell that bindings can point at
#[derive(Debug, Default)]
pub struct State<T> {
    value: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> State<T> {
    /// Create state holding `value`
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Replace the value
    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }

    /// Binding that reads and writes this state
    pub fn binding(&self) -> Binding<T> {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(move || reader.get(), move |value| writer.set(value))
    }
}

/// Getter/setter pair over some piece of state
pub struct Binding<T> {
    get: Arc<dyn Fn() -> T + Send + Sync>,
    set: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&(self.get)()).finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Create a binding from a getter and a setter
    pub fn new(
        get: impl Fn() -> T + Send + Sync + 'static,
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read-only binding; writes are dropped
    pub fn constant(value: T) -> Self {
        Self::new(move || value.clone(), |_| {})
    }

    /// Current value
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Write a value through the binding
    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl Binding<bool> {
    /// Selection flag for one option of a single-choice group
    ///
    /// Reads `true` while `selection` holds `tag`. Writing `true` stores `tag`
    /// in `selection`; writing `false` is ignored, since an option cannot
    /// unselect itself.
    pub fn tagged<V>(selection: Binding<Option<V>>, tag: V) -> Self
    where
        V: PartialEq + Clone + Send + Sync + 'static,
    {
        let reader = selection.clone();
        let read_tag = tag.clone();
        Binding::new(
            move || reader.get().as_ref() == Some(&read_tag),
            move |selected| {
                // A false write leaves the group's selection unchanged
                if selected {
                    selection.set(Some(tag.clone()));
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Grip {
        Overhand,
        Underhand,
    }

    #[test]
    fn test_state_binding_round_trip() {
        let state = State::new(false);
        let binding = state.binding();

        binding.set(true);
        assert!(state.get());

        state.set(false);
        assert!(!binding.get());
    }

    #[test]
    fn test_constant_ignores_writes() {
        let binding = Binding::constant(3);
        binding.set(10);
        assert_eq!(binding.get(), 3);
    }

    #[test]
    fn test_tagged_selection() {
        let selection = State::new(None);
        let overhand = Binding::tagged(selection.binding(), Grip::Overhand);
        let underhand = Binding::tagged(selection.binding(), Grip::Underhand);

        assert!(!overhand.get());
        overhand.set(true);
        assert_eq!(selection.get(), Some(Grip::Overhand));
        assert!(overhand.get());
        assert!(!underhand.get());

        underhand.set(true);
        assert!(!overhand.get());
        assert!(underhand.get());
    }

    #[test]
    fn test_tagged_ignores_unselect() {
        let selection = State::new(Some(Grip::Underhand));
        let underhand = Binding::tagged(selection.binding(), Grip::Underhand);

        underhand.set(false);
        assert_eq!(selection.get(), Some(Grip::Underhand));
    }

    #[test]
    fn test_debug_shows_current_value() {
        let binding = Binding::constant("snatch");
        assert_eq!(format!("{binding:?}"), "Binding(\"snatch\")");
    }
}
