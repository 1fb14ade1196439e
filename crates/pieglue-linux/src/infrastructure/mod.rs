//! Infrastructure layer: concrete backends and the adapters they run on.
//!
//! - `backends`     – compositor backends implementing [`Backend`](crate::application::backend::Backend).
//! - `control_tool` – `hyprctl` process adapter and a scripted stand-in.
//! - `native`       – recording native module for tests and dry runs.
//! - `storage`      – TOML configuration file.

pub mod backends;
pub mod control_tool;
pub mod native;
pub mod storage;
