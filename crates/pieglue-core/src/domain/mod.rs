//! Domain types shared by every backend.
//!
//! This module contains plain data with no OS access and no async runtime.
//!
//! # What lives here? (for beginners)
//!
//! A *backend* is the piece of the application that talks to the host window
//! system.  Every backend, whatever compositor it targets, exchanges the same
//! values with the rest of the application:
//!
//! - [`BackendInfo`] – the static capabilities of a backend variant.
//! - [`Shortcut`] – a global key combination plus the callback it triggers.
//! - [`KeySequence`] – a timed list of key presses and releases to simulate.
//! - [`WmInfo`] – a snapshot of the focused window and the pointer position.
//!
//! Keeping them free of infrastructure dependencies means they can be built
//! and tested on any machine, with or without a display server.

pub mod backend_info;
pub mod key_sequence;
pub mod shortcut;
pub mod wm_info;

pub use backend_info::{BackendInfo, WindowType};
pub use key_sequence::{HotkeyError, KeySequence, KeyStroke};
pub use shortcut::Shortcut;
pub use wm_info::WmInfo;
