//! Recording native module for tests and dry runs.
//!
//! # Why a recording native module?
//!
//! A real native module:
//!
//! - Needs a running Wayland compositor that exposes the virtual-input and
//!   global-shortcut protocols.
//! - Actually moves the pointer and presses keys on the machine running it.
//! - Cannot be observed directly from Rust test code.
//!
//! `RecordingNative` replaces all of that with in-memory recording.  Each call
//! is pushed into a `Mutex<Vec<...>>` together with the (tokio) time it was
//! made, so tests can assert on order *and* on the delays between events.
//! Under a paused tokio clock those timestamps are virtual.
//!
//! # Usage in tests
//!
//! ```ignore
//! let native = Arc::new(RecordingNative::new());
//! let backend = HyprlandBackend::new(native.clone(), control_tool);
//!
//! backend.move_pointer(10, 0).await;
//!
//! assert_eq!(native.calls(), vec![NativeCall::MovePointer { dx: 10, dy: 0 }]);
//! ```
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` before wrapping the module in an `Arc` to make every
//! fallible method return an error.  `fail_on_key` narrows the failure to one
//! key code, which is how tests break a sequence half way.  Failed calls are
//! not recorded.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use pieglue_core::{domain::shortcut::ShortcutCallback, Shortcut};
use tokio::time::Instant;

use crate::application::native::{ActiveWindow, NativeCapabilities, NativeError};

/// One recorded native call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    MovePointer { dx: i32, dy: i32 },
    SimulateKey { code: u32, down: bool },
    BindShortcut(String),
    UnbindShortcut(String),
    UnbindAllShortcuts,
    ActiveWindow,
    RestoreFocus,
}

/// A native module that records every call instead of touching the OS.
#[derive(Default)]
pub struct RecordingNative {
    /// Every successful call with the time it was made.
    pub calls: Mutex<Vec<(Instant, NativeCall)>>,
    /// Shortcut callbacks currently registered, keyed by shortcut id.
    pub registrations: Mutex<HashMap<String, ShortcutCallback>>,
    /// Returned by `active_window`.
    pub active_window: ActiveWindow,
    /// When `true`, every fallible method returns an error.
    pub should_fail: bool,
    /// When set, `simulate_key` fails for this key code only.
    pub fail_on_key: Option<u32>,
}

impl RecordingNative {
    /// Creates an empty recorder with `should_fail = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose fallible methods all fail.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// The recorded calls without their timestamps.
    pub fn calls(&self) -> Vec<NativeCall> {
        lock(&self.calls).iter().map(|(_, call)| call.clone()).collect()
    }

    /// The recorded calls with their timestamps.
    pub fn timed_calls(&self) -> Vec<(Instant, NativeCall)> {
        lock(&self.calls).clone()
    }

    /// Ids of the shortcuts currently registered, sorted.
    pub fn registered_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = lock(&self.registrations).keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Fires the shortcut registered under `id`, as the compositor would.
    ///
    /// Returns `false` if nothing is registered under `id`.
    pub fn fire(&self, id: &str) -> bool {
        // Clone the callback first so it never runs while the lock is held.
        let callback = lock(&self.registrations).get(id).cloned();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    fn record(&self, call: NativeCall) {
        lock(&self.calls).push((Instant::now(), call));
    }

    fn check(&self, what: &str) -> Result<(), NativeError> {
        if self.should_fail {
            return Err(NativeError::Protocol(format!("mock failure: {what}")));
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NativeCapabilities for RecordingNative {
    fn move_pointer(&self, dx: i32, dy: i32) -> Result<(), NativeError> {
        self.check("move_pointer")?;
        self.record(NativeCall::MovePointer { dx, dy });
        Ok(())
    }

    fn simulate_key(&self, code: u32, down: bool) -> Result<(), NativeError> {
        self.check("simulate_key")?;
        if self.fail_on_key == Some(code) {
            return Err(NativeError::Protocol(format!("mock failure: key {code}")));
        }
        self.record(NativeCall::SimulateKey { code, down });
        Ok(())
    }

    fn bind_shortcut(&self, shortcut: &Shortcut) -> Result<(), NativeError> {
        if self.should_fail {
            return Err(NativeError::Registration(format!(
                "mock failure: bind {}",
                shortcut.id
            )));
        }
        lock(&self.registrations).insert(shortcut.id.clone(), shortcut.callback());
        self.record(NativeCall::BindShortcut(shortcut.id.clone()));
        Ok(())
    }

    fn unbind_shortcut(&self, shortcut: &Shortcut) -> Result<(), NativeError> {
        if self.should_fail {
            return Err(NativeError::Registration(format!(
                "mock failure: unbind {}",
                shortcut.id
            )));
        }
        lock(&self.registrations).remove(&shortcut.id);
        self.record(NativeCall::UnbindShortcut(shortcut.id.clone()));
        Ok(())
    }

    fn unbind_all_shortcuts(&self) {
        lock(&self.registrations).clear();
        self.record(NativeCall::UnbindAllShortcuts);
    }

    fn active_window(&self) -> Result<ActiveWindow, NativeError> {
        self.check("active_window")?;
        self.record(NativeCall::ActiveWindow);
        Ok(self.active_window.clone())
    }

    fn restore_focus(&self) {
        self.record(NativeCall::RestoreFocus);
    }
}
