//! Focused-window and pointer snapshot.

use serde::{Deserialize, Serialize};

/// The state of the window manager at query time.
///
/// A `WmInfo` is fetched fresh for every menu opening and never cached.
/// Pointer coordinates are relative to the currently focused output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WmInfo {
    /// Title of the focused window; empty if unknown.
    pub window_name: String,
    /// Application identifier (class / app id) of the focused window; empty if unknown.
    pub app_name: String,
    /// Horizontal pointer position in pixels.
    pub pointer_x: i32,
    /// Vertical pointer position in pixels.
    pub pointer_y: i32,
}
