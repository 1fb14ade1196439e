//! Key code translation tables for key-sequence simulation.
//!
//! The application describes keys with platform-neutral names (DOM
//! `KeyboardEvent.code` values such as `KeyA` or `ControlLeft`).  A backend
//! translates those names into the numeric codes its native input protocol
//! expects right before playback.
//!
//! # Lookup cost
//!
//! `simulate_keys` resolves every stroke of a sequence, so lookups sit on the
//! hot path.  [`KeyTable`] is backed by a `HashMap` and built exactly once; a
//! lookup never scans the table.

pub mod linux_evdev;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

/// Error type for key name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    /// The key name has no entry in the translation table.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// An immutable mapping from abstract key names to platform key codes.
///
/// The mapping is total over its declared domain: every name passed to
/// [`KeyTable::code_for`] either resolves or fails with
/// [`KeymapError::UnknownKey`].  There is no silent fallback code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    codes: HashMap<String, u32>,
}

impl KeyTable {
    /// Builds a table from `(name, code)` pairs.
    ///
    /// If a name occurs more than once the last pair wins.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            codes: pairs
                .into_iter()
                .map(|(name, code)| (name.into(), code))
                .collect(),
        }
    }

    /// Returns the shared default table for Linux (DOM code → evdev code).
    ///
    /// The table is built on first use and shared afterwards; cloning the
    /// returned `Arc` is cheap.
    pub fn linux() -> Arc<KeyTable> {
        static LINUX: OnceLock<Arc<KeyTable>> = OnceLock::new();
        LINUX
            .get_or_init(|| {
                Arc::new(KeyTable::from_pairs(
                    linux_evdev::LINUX_KEY_CODES.iter().copied(),
                ))
            })
            .clone()
    }

    /// Translates `name` into its platform key code.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::UnknownKey`] if `name` is not in the table.
    pub fn code_for(&self, name: &str) -> Result<u32, KeymapError> {
        self.codes
            .get(name)
            .copied()
            .ok_or_else(|| KeymapError::UnknownKey(name.to_string()))
    }

    /// Translates every name in order, failing on the first unknown one.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::UnknownKey`] naming the first name that is not
    /// in the table.
    pub fn codes_for<'a, I>(&self, names: I) -> Result<Vec<u32>, KeymapError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|name| self.code_for(name)).collect()
    }

    /// Returns `true` if `name` has an entry in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// Number of names in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
