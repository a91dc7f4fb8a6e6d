//! Thread affinity checks for list models.
//!
//! A list model is owned by the host's UI thread. Its mutators do no
//! locking beyond what keeps the type `Send + Sync`, so concurrent mutation
//! from several threads can interleave deltas with the wrong content.
//! [`ThreadAffinity`] records the owning thread and lets the model assert
//! that later calls come from it.
//!
//! Two levels of checking are provided:
//!
//! - [`ThreadAffinity::debug_assert_same_thread`]: only active in debug
//!   builds and only while checks are enabled.
//! - [`ThreadAffinity::assert_same_thread`]: always active.
//!
//! # Example
//!
//! ```
//! use lister_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn bump(&self) {
//!         self.affinity.debug_assert_same_thread();
//!         self.value.set(self.value.get() + 1);
//!     }
//! }
//!
//! let counter = Counter { affinity: ThreadAffinity::current(), value: Default::default() };
//! counter.bump();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::ThreadId;

/// Flag to enable/disable runtime thread checks globally.
static THREAD_CHECKS_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Enable or disable debug thread checks process-wide.
///
/// Hosts that deliberately hand a model to a worker thread during setup
/// can switch the checks off.
pub fn set_thread_checks_enabled(enabled: bool) {
    THREAD_CHECKS_ENABLED.store(enabled, Ordering::SeqCst);
}

/// Returns whether debug thread checks are currently enabled.
#[inline]
pub fn are_thread_checks_enabled() -> bool {
    THREAD_CHECKS_ENABLED.load(Ordering::Relaxed)
}

#[cold]
#[inline(never)]
fn panic_wrong_thread(msg: &str, owner: ThreadId) -> ! {
    let current = std::thread::current();
    let current_name = current.name().unwrap_or("<unnamed>");
    panic!(
        "thread affinity violation: {msg}\n\
         current thread: \"{current_name}\" ({:?}), owning thread: {owner:?}",
        current.id()
    )
}

/// Thread affinity tracker.
///
/// Records the thread on which an object was created and verifies that
/// subsequent operations occur on the same thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Panic if the current thread differs from the owning thread.
    #[track_caller]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg("operation called from a non-owning thread");
    }

    /// Panic with a custom message if the current thread differs.
    #[track_caller]
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            panic_wrong_thread(msg, self.thread_id);
        }
    }

    /// Like [`assert_same_thread`](Self::assert_same_thread), but compiled out
    /// of release builds and skipped while checks are disabled.
    #[inline]
    #[track_caller]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        if are_thread_checks_enabled() {
            self.assert_same_thread();
        }
    }
}
