//! DOM key name to Linux evdev key code translation table.
//!
//! Evdev codes are defined in `linux/input-event-codes.h`.
//! Reference: https://github.com/torvalds/linux/blob/master/include/uapi/linux/input-event-codes.h
//!
//! # Which names and which codes? (for beginners)
//!
//! The key names are the values of the DOM `KeyboardEvent.code` property, for
//! example `KeyA`, `Digit1` or `ControlLeft`.  They describe a *physical key
//! position* and are independent of the keyboard layout, which is exactly what
//! the menu configuration stores when the user records a hotkey.
//!
//! The numbers are Linux *evdev* codes.  The Wayland virtual-keyboard protocol
//! (`zwp_virtual_keyboard_v1.key`) expects evdev codes, not X11 keycodes: an X11
//! keycode is always the evdev code plus 8.
//!
//! | DOM code      | evdev name     | Value |
//! |---------------|----------------|-------|
//! | `KeyA`        | `KEY_A`        | 30    |
//! | `Enter`       | `KEY_ENTER`    | 28    |
//! | `ControlLeft` | `KEY_LEFTCTRL` | 29    |

/// Every `(DOM code, evdev code)` pair known to the default Linux table.
///
/// Each DOM name appears exactly once.
pub const LINUX_KEY_CODES: &[(&str, u32)] = &[
    // Letters
    ("KeyA", 30), // KEY_A
    ("KeyB", 48), // KEY_B
    ("KeyC", 46), // KEY_C
    ("KeyD", 32), // KEY_D
    ("KeyE", 18), // KEY_E
    ("KeyF", 33), // KEY_F
    ("KeyG", 34), // KEY_G
    ("KeyH", 35), // KEY_H
    ("KeyI", 23), // KEY_I
    ("KeyJ", 36), // KEY_J
    ("KeyK", 37), // KEY_K
    ("KeyL", 38), // KEY_L
    ("KeyM", 50), // KEY_M
    ("KeyN", 49), // KEY_N
    ("KeyO", 24), // KEY_O
    ("KeyP", 25), // KEY_P
    ("KeyQ", 16), // KEY_Q
    ("KeyR", 19), // KEY_R
    ("KeyS", 31), // KEY_S
    ("KeyT", 20), // KEY_T
    ("KeyU", 22), // KEY_U
    ("KeyV", 47), // KEY_V
    ("KeyW", 17), // KEY_W
    ("KeyX", 45), // KEY_X
    ("KeyY", 21), // KEY_Y
    ("KeyZ", 44), // KEY_Z
    // Digits
    ("Digit1", 2),  // KEY_1
    ("Digit2", 3),  // KEY_2
    ("Digit3", 4),  // KEY_3
    ("Digit4", 5),  // KEY_4
    ("Digit5", 6),  // KEY_5
    ("Digit6", 7),  // KEY_6
    ("Digit7", 8),  // KEY_7
    ("Digit8", 9),  // KEY_8
    ("Digit9", 10), // KEY_9
    ("Digit0", 11), // KEY_0
    // Control keys
    ("Escape", 1),       // KEY_ESC
    ("Minus", 12),       // KEY_MINUS
    ("Equal", 13),       // KEY_EQUAL
    ("Backspace", 14),   // KEY_BACKSPACE
    ("Tab", 15),         // KEY_TAB
    ("BracketLeft", 26), // KEY_LEFTBRACE
    ("BracketRight", 27), // KEY_RIGHTBRACE
    ("Enter", 28),       // KEY_ENTER
    ("Semicolon", 39),   // KEY_SEMICOLON
    ("Quote", 40),       // KEY_APOSTROPHE
    ("Backquote", 41),   // KEY_GRAVE
    ("Backslash", 43),   // KEY_BACKSLASH
    ("Comma", 51),       // KEY_COMMA
    ("Period", 52),      // KEY_DOT
    ("Slash", 53),       // KEY_SLASH
    ("Space", 57),       // KEY_SPACE
    ("CapsLock", 58),    // KEY_CAPSLOCK
    ("NumLock", 69),     // KEY_NUMLOCK
    ("ScrollLock", 70),  // KEY_SCROLLLOCK
    ("IntlBackslash", 86), // KEY_102ND
    ("PrintScreen", 99), // KEY_SYSRQ
    ("Pause", 119),      // KEY_PAUSE
    ("ContextMenu", 127), // KEY_COMPOSE
    // Modifiers
    ("ControlLeft", 29),  // KEY_LEFTCTRL
    ("ShiftLeft", 42),    // KEY_LEFTSHIFT
    ("AltLeft", 56),      // KEY_LEFTALT
    ("MetaLeft", 125),    // KEY_LEFTMETA
    ("ControlRight", 97), // KEY_RIGHTCTRL
    ("ShiftRight", 54),   // KEY_RIGHTSHIFT
    ("AltRight", 100),    // KEY_RIGHTALT
    ("MetaRight", 126),   // KEY_RIGHTMETA
    // Navigation
    ("Home", 102),       // KEY_HOME
    ("ArrowUp", 103),    // KEY_UP
    ("PageUp", 104),     // KEY_PAGEUP
    ("ArrowLeft", 105),  // KEY_LEFT
    ("ArrowRight", 106), // KEY_RIGHT
    ("End", 107),        // KEY_END
    ("ArrowDown", 108),  // KEY_DOWN
    ("PageDown", 109),   // KEY_PAGEDOWN
    ("Insert", 110),     // KEY_INSERT
    ("Delete", 111),     // KEY_DELETE
    // Function keys
    ("F1", 59),   // KEY_F1
    ("F2", 60),   // KEY_F2
    ("F3", 61),   // KEY_F3
    ("F4", 62),   // KEY_F4
    ("F5", 63),   // KEY_F5
    ("F6", 64),   // KEY_F6
    ("F7", 65),   // KEY_F7
    ("F8", 66),   // KEY_F8
    ("F9", 67),   // KEY_F9
    ("F10", 68),  // KEY_F10
    ("F11", 87),  // KEY_F11
    ("F12", 88),  // KEY_F12
    ("F13", 183), // KEY_F13
    ("F14", 184), // KEY_F14
    ("F15", 185), // KEY_F15
    ("F16", 186), // KEY_F16
    ("F17", 187), // KEY_F17
    ("F18", 188), // KEY_F18
    ("F19", 189), // KEY_F19
    ("F20", 190), // KEY_F20
    ("F21", 191), // KEY_F21
    ("F22", 192), // KEY_F22
    ("F23", 193), // KEY_F23
    ("F24", 194), // KEY_F24
    // Numpad
    ("Numpad7", 71),         // KEY_KP7
    ("Numpad8", 72),         // KEY_KP8
    ("Numpad9", 73),         // KEY_KP9
    ("NumpadSubtract", 74),  // KEY_KPMINUS
    ("Numpad4", 75),         // KEY_KP4
    ("Numpad5", 76),         // KEY_KP5
    ("Numpad6", 77),         // KEY_KP6
    ("NumpadAdd", 78),       // KEY_KPPLUS
    ("Numpad1", 79),         // KEY_KP1
    ("Numpad2", 80),         // KEY_KP2
    ("Numpad3", 81),         // KEY_KP3
    ("Numpad0", 82),         // KEY_KP0
    ("NumpadDecimal", 83),   // KEY_KPDOT
    ("NumpadMultiply", 55),  // KEY_KPASTERISK
    ("NumpadEnter", 96),     // KEY_KPENTER
    ("NumpadDivide", 98),    // KEY_KPSLASH
    ("NumpadEqual", 117),    // KEY_KPEQUAL
    ("NumpadComma", 121),    // KEY_KPCOMMA
    // Media and browser keys
    ("AudioVolumeMute", 113),    // KEY_MUTE
    ("AudioVolumeDown", 114),    // KEY_VOLUMEDOWN
    ("AudioVolumeUp", 115),      // KEY_VOLUMEUP
    ("LaunchApp2", 140),         // KEY_CALC
    ("LaunchMail", 155),         // KEY_MAIL
    ("BrowserFavorites", 156),   // KEY_BOOKMARKS
    ("BrowserBack", 158),        // KEY_BACK
    ("BrowserForward", 159),     // KEY_FORWARD
    ("Eject", 161),              // KEY_EJECTCD
    ("MediaTrackNext", 163),     // KEY_NEXTSONG
    ("MediaPlayPause", 164),     // KEY_PLAYPAUSE
    ("MediaTrackPrevious", 165), // KEY_PREVIOUSSONG
    ("MediaStop", 166),          // KEY_STOPCD
    ("BrowserHome", 172),        // KEY_HOMEPAGE
    ("BrowserRefresh", 173),     // KEY_REFRESH
    ("BrowserSearch", 217),      // KEY_SEARCH
];
