//! Global shortcuts and their activation callbacks.
//!
//! A [`Shortcut`] is owned by the application.  Backends only ever borrow it
//! while binding or unbinding; the native module may keep a clone of the
//! callback handle for as long as the registration lives, but must drop it on
//! unbind.

use std::fmt;
use std::sync::Arc;

/// Callback invoked when a bound shortcut fires.
pub type ShortcutCallback = Arc<dyn Fn() + Send + Sync>;

/// A global key combination that opens a menu.
#[derive(Clone)]
pub struct Shortcut {
    /// Unique among the shortcuts bound on one backend instance.
    pub id: String,
    /// Human-readable key combination, e.g. `"Control+Space"`.
    pub trigger: String,
    callback: ShortcutCallback,
}

impl Shortcut {
    /// Creates a shortcut that runs `callback` whenever it fires.
    pub fn new<F>(id: impl Into<String>, trigger: impl Into<String>, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            trigger: trigger.into(),
            callback: Arc::new(callback),
        }
    }

    /// Runs the activation callback.
    pub fn activate(&self) {
        (self.callback)();
    }

    /// A clone of the callback handle, for registration tables.
    pub fn callback(&self) -> ShortcutCallback {
        Arc::clone(&self.callback)
    }
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("id", &self.id)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_activate_runs_callback_each_time() {
        // Arrange
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let shortcut = Shortcut::new("main-menu", "Control+Space", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Act
        shortcut.activate();
        shortcut.activate();

        // Assert
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clones_share_the_same_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let shortcut = Shortcut::new("a", "Alt+A", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let clone = shortcut.clone();
        clone.activate();
        (shortcut.callback())();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_output_omits_callback() {
        let shortcut = Shortcut::new("menu", "Super+M", || {});

        let text = format!("{shortcut:?}");

        assert!(text.contains("\"menu\""));
        assert!(text.contains("\"Super+M\""));
        assert!(text.ends_with(".. }"));
    }
}
