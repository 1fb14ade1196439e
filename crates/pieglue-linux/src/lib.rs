//! pieglue-linux library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does pieglue-linux do? (for beginners)
//!
//! A pie menu has to cooperate closely with the desktop: it opens at the
//! pointer, it may warp the pointer, it replays hotkeys into the window that
//! was focused before, and it is usually opened by a global shortcut.  How
//! each of those works depends on the compositor.
//!
//! This crate provides the Linux backends:
//!
//! 1. The wlroots family shares pointer movement and key simulation through
//!    the virtual-pointer and virtual-keyboard protocols
//!    ([`application::virtual_input::WlrVirtualInput`]).
//! 2. Compositor backends add what the protocols cannot do.  The Hyprland
//!    backend asks `hyprctl` for the focused window and the pointer position
//!    and registers shortcuts through Hyprland's global-shortcut protocol.
//! 3. The protocol work itself is done by a native module injected as a
//!    [`application::native::NativeCapabilities`] trait object.

/// Application layer: backend contract and shared backend logic.
pub mod application;

/// Infrastructure layer: concrete backends, control tools, native doubles, storage.
pub mod infrastructure;

pub use application::backend::{Backend, BackendError};
pub use infrastructure::backends::hyprland::HyprlandBackend;
