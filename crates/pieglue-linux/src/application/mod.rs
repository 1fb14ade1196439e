//! Application layer: the backend contract and the logic shared by backends.
//!
//! # What lives here?
//!
//! - **`backend`** – The [`Backend`](backend::Backend) trait the rest of the
//!   application talks to, and the [`BackendError`](backend::BackendError)
//!   taxonomy.
//!
//! - **`native`** – The contract of the external native module that performs
//!   the privileged input-injection and shortcut-registration work.  It is
//!   injected into backends at construction time.
//!
//! - **`control_tool`** – The contract of compositor command-line tools that
//!   answer state queries with JSON.
//!
//! - **`virtual_input`** – Pointer movement and key simulation for every
//!   wlroots compositor, composed by the concrete backends.
//!
//! Nothing in this layer spawns processes or touches the display server
//! directly; that is the job of the infrastructure layer.

pub mod backend;
pub mod control_tool;
pub mod native;
pub mod virtual_input;
