//! The native capability contract.
//!
//! The privileged, protocol-level work (writing to a virtual pointer or
//! keyboard device, registering global shortcuts with the compositor) is done
//! by a native module that lives outside this crate.  Backends only see it
//! through the [`NativeCapabilities`] trait, injected at construction time.
//!
//! The native module owns every OS handle it uses (one virtual pointer, one
//! virtual keyboard, one shortcut registration table) and is responsible for
//! its own thread safety.  Backends never cache or duplicate those handles.

use pieglue_core::Shortcut;
use thiserror::Error;

/// Error type for native module calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// A virtual-input protocol request failed (device unavailable, connection lost, ...).
    #[error("protocol error: {0}")]
    Protocol(String),
    /// The compositor refused to register or remove a global shortcut.
    #[error("registration error: {0}")]
    Registration(String),
}

/// Identity of the focused window as reported by the native module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveWindow {
    /// Application identifier.
    pub app: String,
    /// Window title.
    pub name: String,
}

/// Operations the native module offers to backends.
///
/// Each backend variant uses the subset that works on its host: the wlroots
/// family uses pointer movement, key simulation and shortcut registration,
/// while other variants also rely on `active_window` and `restore_focus`.
pub trait NativeCapabilities: Send + Sync {
    /// Moves the pointer by `(dx, dy)` pixels relative to its current position.
    fn move_pointer(&self, dx: i32, dy: i32) -> Result<(), NativeError>;

    /// Presses (`down == true`) or releases the key with the given native code.
    fn simulate_key(&self, code: u32, down: bool) -> Result<(), NativeError>;

    /// Registers `shortcut` with the compositor's global-shortcut mechanism.
    ///
    /// The implementation may keep a clone of the shortcut's callback until
    /// the shortcut is unbound.
    fn bind_shortcut(&self, shortcut: &Shortcut) -> Result<(), NativeError>;

    /// Removes a registration made by [`bind_shortcut`](Self::bind_shortcut).
    fn unbind_shortcut(&self, shortcut: &Shortcut) -> Result<(), NativeError>;

    /// Removes every registration.
    fn unbind_all_shortcuts(&self);

    /// Returns the focused window.
    fn active_window(&self) -> Result<ActiveWindow, NativeError>;

    /// Gives input focus back to the topmost window after the menu closed.
    fn restore_focus(&self);
}
