//! The backend contract exposed to the application layer.
//!
//! One [`Backend`] implementation exists per supported display-server /
//! compositor combination.  The application picks one at startup and then
//! only talks to it through this trait.
//!
//! # Lifecycle
//!
//! ```text
//! uninitialized ──init()──▶ initialized ──bind/unbind──▶ initialized (0..n shortcuts bound)
//! ```
//!
//! `init` succeeds exactly once per instance.  There is no shutdown
//! operation; process exit tears everything down.
//!
//! # Partial capability
//!
//! Not every compositor can do everything.  A backend never pretends: it
//! reports reduced capability through [`BackendInfo`] and returns typed
//! errors instead of silently doing nothing.

use async_trait::async_trait;
use pieglue_core::{BackendInfo, KeySequence, KeymapError, Shortcut, WmInfo};
use thiserror::Error;

use super::control_tool::QueryError;
use super::native::NativeError;

/// Error type for backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A key name of a sequence has no key code.  Nothing was simulated.
    #[error(transparent)]
    UnknownKey(#[from] KeymapError),

    /// The native module failed to send a key event mid-sequence.
    #[error("key simulation failed: {0}")]
    Protocol(#[source] NativeError),

    /// The native module failed to register or remove a shortcut.
    #[error("shortcut {id:?} could not be updated: {source}")]
    Bind {
        id: String,
        #[source]
        source: NativeError,
    },

    /// A shortcut with this id is already bound on this backend.
    #[error("shortcut {0:?} is already bound")]
    DuplicateShortcut(String),

    /// No shortcut with this id is bound on this backend.
    #[error("shortcut {0:?} is not bound")]
    NotBound(String),

    /// Window or pointer information could not be retrieved.
    #[error("window manager query failed: {0}")]
    Query(#[from] QueryError),

    /// Setup failed in a way that makes the backend unusable.
    #[error("backend initialization failed: {0}")]
    Init(String),

    /// `init` was called a second time.
    #[error("backend is already initialized")]
    AlreadyInitialized,
}

/// Host-integration operations for one display-server / compositor combination.
#[async_trait]
pub trait Backend: Send + Sync {
    /// One-time setup.  Must be called before the backend is used.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::AlreadyInitialized`] on a second call, or
    /// [`BackendError::Init`] if the backend cannot work at all.
    async fn init(&self) -> Result<(), BackendError>;

    /// Static capabilities of this backend variant.
    fn backend_info(&self) -> BackendInfo;

    /// Name and app of the focused window plus the current pointer position.
    ///
    /// Always queries the host; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Query`] if the information cannot be retrieved.
    async fn wm_info(&self) -> Result<WmInfo, BackendError>;

    /// Binds `shortcut`; its callback runs whenever the shortcut is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::DuplicateShortcut`] if the id is already bound,
    /// or [`BackendError::Bind`] if the host refuses the registration.
    async fn bind_shortcut(&self, shortcut: &Shortcut) -> Result<(), BackendError>;

    /// Unbinds a previously bound shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotBound`] if the id is not bound, or
    /// [`BackendError::Bind`] if the host refuses the removal.
    async fn unbind_shortcut(&self, shortcut: &Shortcut) -> Result<(), BackendError>;

    /// Unbinds every shortcut bound through this backend.
    async fn unbind_all_shortcuts(&self);

    /// Moves the pointer by `(dx, dy)` pixels.
    ///
    /// Best effort: failures are logged and never returned.
    async fn move_pointer(&self, dx: i32, dy: i32);

    /// Plays `keys` in order, honouring every per-stroke delay.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::UnknownKey`] before sending anything if any name
    /// is unknown, or [`BackendError::Protocol`] if a key event fails.
    async fn simulate_keys(&self, keys: &KeySequence) -> Result<(), BackendError>;

    /// Returns focus to the window that was active before the menu opened.
    async fn restore_focus(&self);
}
