//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration file from the XDG
//! config directory (or an explicit path given on the command line), fills in
//! defaults for anything the file leaves out, and can write a configuration
//! back to disk.

pub mod config;
