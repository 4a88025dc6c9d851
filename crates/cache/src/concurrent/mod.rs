//! Concurrency primitives used by cache instances
//!
//! [`KeyLock`] serializes the memory/disk sequence of operations that target
//! the same key, and [`dispatch`] moves blocking cache work onto the shared
//! worker pool.

mod dispatch;
mod key_lock;

pub use dispatch::{dispatch, dispatch_with, Completion, WORKER_THREAD_NAME};
pub use key_lock::KeyLock;
