//! Control-tool implementations.
//!
//! - `hyprctl` – runs the real `hyprctl` executable.
//! - `mock`    – answers from scripted replies; used by tests and `--dry-run`.

pub mod hyprctl;
pub mod mock;
