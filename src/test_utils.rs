// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! `CallSpy` stands in for the caller-supplied callbacks in tests: it counts
//! invocations and can be handed out as either an action callback or a
//! removal hook.

use crate::notifications::{ActionCallback, RemoveCallback};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A thread-safe invocation counter usable as a notification callback.
#[derive(Debug, Clone, Default)]
pub struct CallSpy {
    calls: Arc<AtomicUsize>,
}

impl CallSpy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times any callback minted from this spy was invoked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn was_called(&self) -> bool {
        self.calls() > 0
    }

    /// Mints an action callback that increments this spy.
    #[must_use]
    pub fn callback(&self) -> ActionCallback {
        let calls = Arc::clone(&self.calls);
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Mints a removal hook that increments this spy.
    #[must_use]
    pub fn remove_callback(&self) -> RemoveCallback {
        let calls = Arc::clone(&self.calls);
        Arc::new(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    }
}
