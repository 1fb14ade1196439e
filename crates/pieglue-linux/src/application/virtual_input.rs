//! Shared virtual-input operations for wlroots-based compositors.
//!
//! Every compositor built on wlroots exposes the same two input protocols:
//! `wlr-virtual-pointer-unstable-v1` for pointer motion and
//! `virtual-keyboard-unstable-v1` for key events.  [`WlrVirtualInput`]
//! implements the backend operations that only need those protocols, so a
//! concrete compositor backend composes it and adds window queries and
//! shortcut handling on top.
//!
//! # Key simulation (for beginners)
//!
//! A key sequence is a list of timed press/release events.  Playback happens
//! in two phases:
//!
//! 1. **Validate** – every key name is translated through the [`KeyTable`].
//!    One unknown name aborts the whole call before any key is touched, so an
//!    invalid sequence can never leave a modifier half-pressed.
//! 2. **Play** – events are sent strictly in order.  A positive delay suspends
//!    only the calling task (`tokio::time::sleep`), never the runtime.

use std::sync::Arc;

use pieglue_core::{KeySequence, KeyTable};
use tracing::{debug, error};

use super::backend::BackendError;
use super::native::NativeCapabilities;

/// Pointer and keyboard operations shared by every wlroots backend.
pub struct WlrVirtualInput {
    native: Arc<dyn NativeCapabilities>,
    keys: Arc<KeyTable>,
}

impl WlrVirtualInput {
    /// Creates the helper using the default Linux key table.
    pub fn new(native: Arc<dyn NativeCapabilities>) -> Self {
        Self::with_key_table(native, KeyTable::linux())
    }

    /// Creates the helper with a custom key table.
    pub fn with_key_table(native: Arc<dyn NativeCapabilities>, keys: Arc<KeyTable>) -> Self {
        Self { native, keys }
    }

    /// Moves the pointer through the virtual-pointer protocol.
    ///
    /// A failure is logged and swallowed: a missed pointer nudge does not
    /// affect any later operation.
    pub async fn move_pointer(&self, dx: i32, dy: i32) {
        if let Err(e) = self.native.move_pointer(dx, dy) {
            error!("failed to move mouse pointer by ({dx}, {dy}): {e}");
        }
    }

    /// Validates and then plays `keys` through the virtual-keyboard protocol.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::UnknownKey`] without sending anything if a name
    /// is not in the key table, or [`BackendError::Protocol`] as soon as a key
    /// event fails; the remaining events are not sent.
    pub async fn simulate_keys(&self, keys: &KeySequence) -> Result<(), BackendError> {
        let codes = self.keys.codes_for(keys.iter().map(|k| k.name.as_str()))?;

        for (stroke, code) in keys.iter().zip(codes) {
            if stroke.delay_ms > 0 {
                tokio::time::sleep(stroke.delay()).await;
            }

            debug!(key = %stroke.name, code, down = stroke.down, "simulating key");
            self.native
                .simulate_key(code, stroke.down)
                .map_err(BackendError::Protocol)?;
        }

        Ok(())
    }

    /// Does nothing.
    ///
    /// On Wayland the window that had focus before the menu opened regains it
    /// automatically once the menu surface is gone.
    pub async fn restore_focus(&self) {}
}

// ── Tests ─────────────────────────────────────────────────────────────────────
