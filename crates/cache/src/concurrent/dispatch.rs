//! Background execution of cache work

use crate::errors::{CacheError, RecoveryHint, Result};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot;
use tracing::{error, warn};

/// Name given to every thread that runs dispatched cache work
pub const WORKER_THREAD_NAME: &str = "tiercache-worker";

/// Shared worker pool
///
/// Lives for the whole process. When it cannot be built, work falls back to
/// one dedicated thread per operation.
static WORKERS: Lazy<Option<Runtime>> = Lazy::new(|| {
    match Builder::new_multi_thread()
        .thread_name(WORKER_THREAD_NAME)
        .enable_all()
        .build()
    {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            error!(error = %e, "failed to start cache worker pool, using dedicated threads");
            None
        }
    }
});

/// Pending result of work running on a cache worker
///
/// Await it from async code, or call [`Completion::wait`] from synchronous
/// code. Dropping it does not cancel the work.
#[must_use = "the operation runs regardless, but its result is lost unless awaited"]
#[derive(Debug)]
pub struct Completion<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> Completion<T> {
    /// Block the current thread until the work finishes
    ///
    /// Must not be called from within an async runtime.
    pub fn wait(self) -> Result<T> {
        self.receiver.blocking_recv().unwrap_or_else(|_| Err(worker_lost()))
    }
}

impl<T> Future for Completion<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(worker_lost())))
    }
}

/// Run `work` on a cache worker and return a handle to its result
pub fn dispatch<T, F>(work: F) -> Completion<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (sender, receiver) = oneshot::channel();
    spawn(move || {
        // The caller may have dropped the Completion
        let _ = sender.send(run_guarded(work));
    });
    Completion { receiver }
}

/// Run `work` on a cache worker, then hand its result to `callback` on the
/// same worker thread
///
/// `callback` runs exactly once. A panic in `work` reaches it as
/// [`CacheError::Worker`].
pub fn dispatch_with<T, F, C>(work: F, callback: C)
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
    C: FnOnce(Result<T>) + Send + 'static,
{
    spawn(move || callback(run_guarded(work)));
}

fn run_guarded<T>(work: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|_| Err(worker_lost()))
}

fn spawn<F>(job: F)
where
    F: FnOnce() + Send + 'static,
{
    if let Some(runtime) = WORKERS.as_ref() {
        // Blocking pool threads inherit the runtime's thread name
        drop(runtime.spawn_blocking(job));
        return;
    }

    // A failed spawn drops its closure, so keep the job reachable from here
    let slot = Arc::new(Mutex::new(Some(job)));
    let worker_slot = Arc::clone(&slot);
    let spawned = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let job = worker_slot.lock().take();
            if let Some(job) = job {
                job();
            }
        });

    if let Err(e) = spawned {
        warn!(error = %e, "failed to spawn cache worker thread, running on the caller");
        let job = slot.lock().take();
        if let Some(job) = job {
            job();
        }
    }
}

fn worker_lost() -> CacheError {
    CacheError::Worker {
        message: "cache worker exited before completing the operation".to_string(),
        recovery_hint: RecoveryHint::Retry {
            after: std::time::Duration::from_millis(100),
        },
    }
}
