//! Timed key press/release sequences.
//!
//! A [`KeySequence`] is built per simulate call and consumed once.  The order
//! of its strokes is significant: `ControlLeft` down, `KeyC` down, `KeyC` up,
//! `ControlLeft` up is a copy; any other order is not.
//!
//! # JSON form
//!
//! The UI layer stores sequences as a list of `{name, down, delay}` objects,
//! which is also the serde representation used here:
//!
//! ```json
//! [
//!   { "name": "ControlLeft", "down": true,  "delay": 0 },
//!   { "name": "KeyC",        "down": true,  "delay": 10 },
//!   { "name": "KeyC",        "down": false, "delay": 10 },
//!   { "name": "ControlLeft", "down": false, "delay": 10 }
//! ]
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for hotkey string expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    /// The hotkey string contains no key names at all.
    #[error("hotkey is empty")]
    Empty,
    /// A `+`-separated segment is blank, e.g. `"ControlLeft++KeyC"`.
    #[error("hotkey {0:?} contains an empty key name")]
    EmptyKey(String),
}

/// One key event of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStroke {
    /// Abstract key name, resolved through a key table at playback time.
    pub name: String,
    /// `true` for a press, `false` for a release.
    pub down: bool,
    /// Milliseconds to wait before this event is sent.
    #[serde(rename = "delay", default)]
    pub delay_ms: u64,
}

impl KeyStroke {
    /// A key press sent after `delay_ms` milliseconds.
    pub fn press(name: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            name: name.into(),
            down: true,
            delay_ms,
        }
    }

    /// A key release sent after `delay_ms` milliseconds.
    pub fn release(name: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            name: name.into(),
            down: false,
            delay_ms,
        }
    }

    /// The delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// An ordered list of [`KeyStroke`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySequence(Vec<KeyStroke>);

impl KeySequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands a `+`-separated hotkey such as `"ControlLeft+KeyC"`.
    ///
    /// All keys are pressed in the given order and then released in reverse
    /// order.  Every stroke except the first waits `delay_ms` milliseconds.
    /// Key names are not validated here; unknown names are reported by the
    /// backend before playback starts.
    ///
    /// # Errors
    ///
    /// Returns [`HotkeyError::Empty`] for a blank string and
    /// [`HotkeyError::EmptyKey`] if any segment is blank.
    pub fn from_hotkey(hotkey: &str, delay_ms: u64) -> Result<Self, HotkeyError> {
        if hotkey.trim().is_empty() {
            return Err(HotkeyError::Empty);
        }

        let names: Vec<&str> = hotkey.split('+').map(str::trim).collect();
        if names.iter().any(|name| name.is_empty()) {
            return Err(HotkeyError::EmptyKey(hotkey.to_string()));
        }

        let mut sequence = Self::new();
        for name in &names {
            let delay = if sequence.is_empty() { 0 } else { delay_ms };
            sequence.push(KeyStroke::press(*name, delay));
        }
        for name in names.iter().rev() {
            sequence.push(KeyStroke::release(*name, delay_ms));
        }
        Ok(sequence)
    }

    /// Appends a stroke.
    pub fn push(&mut self, stroke: KeyStroke) {
        self.0.push(stroke);
    }

    /// Iterates the strokes in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyStroke> {
        self.0.iter()
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence has no strokes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all per-stroke delays; the lower bound of the playback time.
    pub fn total_delay(&self) -> Duration {
        self.0.iter().map(KeyStroke::delay).sum()
    }
}

impl From<Vec<KeyStroke>> for KeySequence {
    fn from(strokes: Vec<KeyStroke>) -> Self {
        Self(strokes)
    }
}

impl FromIterator<KeyStroke> for KeySequence {
    fn from_iter<I: IntoIterator<Item = KeyStroke>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeySequence {
    type Item = &'a KeyStroke;
    type IntoIter = std::slice::Iter<'a, KeyStroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
