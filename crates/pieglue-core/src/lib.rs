//! # pieglue-core
//!
//! Shared library for pieglue containing the backend domain types and the key
//! code translation tables.
//!
//! This crate is used by every host backend crate.  It has zero dependencies
//! on OS APIs, display servers, or async runtimes.
//!
//! # Architecture overview (for beginners)
//!
//! pieglue is the host-integration layer of a pie-menu application.  The menu
//! itself is drawn by a UI layer; whenever the menu needs something from the
//! window system (where is the pointer? which window is focused? press
//! Ctrl+C for me, please) it asks the active *backend*.
//!
//! This crate (`pieglue-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The values every backend exchanges with the application:
//!   capability reports, shortcuts, key sequences and window snapshots.
//!
//! - **`keymap`** – Translation tables that convert platform-neutral key names
//!   (DOM `KeyboardEvent.code` values) into the codes a native input protocol
//!   expects, e.g. Linux evdev codes for the Wayland virtual keyboard.

pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `pieglue_core::KeySequence` instead of `pieglue_core::domain::key_sequence::KeySequence`.
pub use domain::{
    BackendInfo, HotkeyError, KeySequence, KeyStroke, Shortcut, WindowType, WmInfo,
};
pub use keymap::{KeyTable, KeymapError};
