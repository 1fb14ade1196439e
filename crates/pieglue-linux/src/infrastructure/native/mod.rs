//! Native module implementations.
//!
//! The production native module (virtual pointer, virtual keyboard and
//! global-shortcut protocol clients) is an external component that plugs in
//! through [`NativeCapabilities`](crate::application::native::NativeCapabilities).
//! This crate ships a recording implementation that performs no OS calls; it
//! backs the unit tests and the `pieglue` binary's dry runs.

pub mod mock;
