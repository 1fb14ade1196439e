//! Concrete compositor backends.
//!
//! Each backend composes [`WlrVirtualInput`](crate::application::virtual_input::WlrVirtualInput)
//! for pointer and keyboard work and adds the compositor-specific parts.

pub mod hyprland;
