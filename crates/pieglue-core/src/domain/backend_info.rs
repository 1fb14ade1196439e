//! Static capability report of a backend variant.

use serde::{Deserialize, Serialize};

/// How the menu window should be presented by the window manager.
///
/// The names follow the window type hints understood by the UI layer when it
/// creates the transparent, borderless menu window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// A regular top-level window.
    Normal,
    /// A splash screen: undecorated and usually placed above tiled windows.
    Splash,
    /// A dock or panel.
    Dock,
    /// A toolbar window.
    Toolbar,
    /// A transient dialog.
    Dialog,
    /// A notification bubble.
    Notification,
}

impl WindowType {
    /// The lowercase hint string handed to the UI layer.
    pub fn as_str(self) -> &'static str {
        match self {
            WindowType::Normal => "normal",
            WindowType::Splash => "splash",
            WindowType::Dock => "dock",
            WindowType::Toolbar => "toolbar",
            WindowType::Dialog => "dialog",
            WindowType::Notification => "notification",
        }
    }
}

/// What a backend variant can do natively.
///
/// A `BackendInfo` is computed once per variant and never changes, no matter
/// which shortcuts have been bound or unbound in the meantime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Preferred presentation of the menu window.
    pub window_type: WindowType,
    /// Whether the user can configure global shortcuts from within the
    /// application.
    ///
    /// This is a hint about the user-facing setup, not a promise about
    /// `bind_shortcut`: a backend may report `false` here and still accept
    /// bind calls through an experimental path.
    pub supports_shortcuts: bool,
    /// Shown next to the shortcut editor when `supports_shortcuts` is `false`.
    pub shortcut_hint: String,
}
