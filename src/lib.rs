// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification component for the Iced GUI toolkit.
//!
//! Callers hand the [`notifications::Notifications`] component an ordered
//! list of notification descriptors; the component forwards the list to its
//! embedded toast renderer and invokes caller-supplied callbacks when a
//! notification is dismissed, whether by its auto-dismiss timer or by a user
//! action.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.2.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod test_utils;
pub mod ui;

pub use notifications::{Descriptor, Level, Message, Notifications, Uid};
