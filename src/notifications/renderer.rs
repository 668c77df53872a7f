// SPDX-License-Identifier: MPL-2.0
//! The renderer capability consumed by the `Notifications` component.
//!
//! The component itself never owns dismissal timing or the visible set; it
//! forwards the caller's desired list to a renderer and lets the renderer
//! drive the per-instance lifecycle. [`ToastStack`](super::ToastStack) is the
//! crate's built-in implementation.

use super::descriptor::{Descriptor, Uid};

/// Why a notification left the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    /// The auto-dismiss timer elapsed.
    Timeout,
    /// The user activated the manual-close control.
    Manual,
    /// The user activated the notification's action control.
    Action,
}

/// Whether default visual styling is applied to rendered toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// Default toast styling: accent border, shadow, themed background.
    #[default]
    Styled,
    /// Minimal presentation with built-in styles disabled.
    Unstyled,
}

impl StyleMode {
    /// Maps the component's boolean `style` property to a mode.
    #[must_use]
    pub fn from_flag(styled: bool) -> Self {
        if styled {
            StyleMode::Styled
        } else {
            StyleMode::Unstyled
        }
    }
}

/// A capability that displays a stack of dismissible messages.
///
/// Contract:
///
/// - [`render`](Self::render) reconciles the displayed set against the full
///   desired list. New instances become visible and arm their auto-dismiss
///   timer once; instances absent from the list are dropped *without*
///   invoking their removal hook. The removal hook is owned by the
///   renderer's own dismissal lifecycle, not by list diffing.
/// - The renderer holds each instance's registered callbacks, invokes them
///   exactly once at dismissal, and then clears the registration.
/// - Dismissing an instance by any means disarms its auto-dismiss timer, so
///   a timer and a manual dismissal can never both fire for one instance.
pub trait NotificationRenderer {
    /// Reconciles the displayed set against `desired`.
    fn render(&mut self, desired: &[Descriptor], style: StyleMode);

    /// Dismisses an instance via the manual-close path.
    ///
    /// Returns `false` when the instance is unknown or already dismissed.
    fn dismiss(&mut self, uid: &Uid) -> bool;

    /// Activates an instance's action control: invokes the action callback
    /// synchronously, then dismisses the instance.
    ///
    /// Returns `false` when the instance is unknown or already dismissed.
    fn activate(&mut self, uid: &Uid) -> bool;

    /// Sweeps auto-dismiss timers, dismissing every instance whose delay has
    /// elapsed.
    fn tick(&mut self);
}
