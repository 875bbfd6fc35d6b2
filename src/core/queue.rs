//! Work queue capability for asynchronous action dispatch.
//!
//! The interpreter never manages threads of its own. Actions tagged with a
//! queue are forwarded to an externally supplied [`WorkQueue`] and the
//! interpreter moves on without waiting. Scheduling, error reporting and
//! cancellation for submitted jobs are entirely the queue's concern.

/// A unit of work handed to a [`WorkQueue`].
pub type Job = Box<dyn FnOnce() + Send>;

/// Capability for running jobs asynchronously.
///
/// Implementations are supplied by the application: a thread pool, an async
/// runtime handle, or a test double that records jobs for later execution.
/// The core only ever calls [`submit`](WorkQueue::submit) and reads
/// [`label`](WorkQueue::label) for diagnostics.
///
/// Ordering across jobs submitted to different queues, or between a
/// submitted job and the subscriber notification that follows a `send`, is
/// not guaranteed.
///
/// # Example
///
/// ```rust
/// use machina::core::{Job, WorkQueue};
///
/// /// Runs every job inline. Useful in tests.
/// struct Inline;
///
/// impl WorkQueue for Inline {
///     fn label(&self) -> &str {
///         "inline"
///     }
///
///     fn submit(&self, job: Job) {
///         job();
///     }
/// }
/// ```
pub trait WorkQueue: Send + Sync {
    /// Human-readable queue name, used in log output only.
    fn label(&self) -> &str;

    /// Submit a job for later, possibly concurrent, execution.
    fn submit(&self, job: Job);
}
