//! Shared utilities for tiercache
//!
//! Small helpers used by the cache crate and by applications embedding it:
//! crash-safe file replacement, XDG cache directory resolution and the
//! tracing subscriber setup.

pub mod atomic_file;
pub mod tracing;
pub mod xdg;

pub use atomic_file::*;
pub use xdg::*;
