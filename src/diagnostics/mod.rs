// SPDX-License-Identifier: MPL-2.0
//! Diagnostics channel for component warnings and lifecycle events.
//!
//! The component never writes to a specific logging sink; it sends
//! structured events through a [`DiagnosticsHandle`] and lets the embedding
//! application decide where they go. Events are buffered in a bounded ring
//! so an unattended collector cannot grow without limit.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with a fixed capacity
//! - [`DiagnosticEvent`]: timestamped event (property warnings, toast
//!   lifecycle)
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: bounded-channel
//!   receiver/sender pair

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
