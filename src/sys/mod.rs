//! Platform-specific descriptor shims.
//!
//! The concrete implementation is selected at compile time depending
//! on the target operating system. Only Unix targets are supported:
//! the crate's whole surface is built around `RawFd`.

#[cfg(unix)]
pub(crate) mod unix;

#[cfg(unix)]
pub(crate) use unix as platform;
