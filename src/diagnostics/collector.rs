// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating component events.
//!
//! The collector receives events from the component through a bounded
//! channel and stores them in a circular buffer for later inspection.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind};
use crate::notifications::{DismissCause, PropWarning, Uid};

/// Size of the bounded event channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Default number of retained events.
const DEFAULT_BUFFER_CAPACITY: usize = 512;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads. Sending is non-blocking;
/// events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a property type violation.
    pub fn log_prop_warning(&self, warning: PropWarning) {
        self.send(DiagnosticEventKind::PropWarning(warning));
    }

    /// Logs a toast entering the visible set.
    pub fn log_toast_shown(&self, uid: Uid) {
        self.send(DiagnosticEventKind::ToastShown { uid });
    }

    /// Logs a toast leaving the visible set.
    pub fn log_toast_dismissed(&self, uid: Uid, cause: DismissCause) {
        self.send(DiagnosticEventKind::ToastDismissed { uid, cause });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Receives and stores diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a collector retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        Self {
            event_tx,
            event_rx,
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Mints a handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains pending events into the buffer; returns how many arrived.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            processed += 1;
        }
        processed
    }

    /// Returns the stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
