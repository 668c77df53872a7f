// SPDX-License-Identifier: MPL-2.0
//! The `Notifications` component.
//!
//! A thin adapter between the caller's `notifications` property and the
//! embedded renderer: it validates the property's shape, forwards the full
//! desired list, and routes user/timer messages back to the renderer. All
//! dismissal timing and callback discipline lives in the renderer.

use super::descriptor::Descriptor;
use super::prop::{PropValue, PropWarning};
use super::renderer::{NotificationRenderer, StyleMode};
use super::stack::{Message, OverlaySnapshot, ToastStack};
use crate::config::Position;
use crate::diagnostics::DiagnosticsHandle;
use crate::ui::toast::Toast;
use iced::{Element, Subscription};
use std::time::Duration;

/// Name this component reports in property warnings.
pub const COMPONENT_NAME: &str = "Notifications";

const NOTIFICATIONS_PROP: &str = "notifications";
const EXPECTED_TYPE: &str = "array";

/// Presentational notifications component.
///
/// Owns exactly one renderer for its whole lifetime, however many
/// notifications are supplied. Property updates describe the complete
/// desired state; dismissal is driven by the renderer's own lifecycle and
/// reported through each descriptor's callbacks.
#[derive(Debug)]
pub struct Notifications<R = ToastStack> {
    renderer: R,
    style: StyleMode,
    position: Position,
    notifications: Vec<Descriptor>,
    /// Optional diagnostics handle for property warnings.
    diagnostics: Option<DiagnosticsHandle>,
}

impl<R: NotificationRenderer> Notifications<R> {
    /// Creates the component around a custom renderer.
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            style: StyleMode::Styled,
            position: Position::default(),
            notifications: Vec::new(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle property warnings are routed to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Sets the `style` property. `false` disables default styling.
    pub fn set_style(&mut self, styled: bool) {
        self.style = StyleMode::from_flag(styled);
        self.renderer.render(&self.notifications, self.style);
    }

    /// Sets the overlay corner.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Sets the `notifications` property.
    ///
    /// The expected shape is an ordered list of descriptors. Any other type
    /// is a contract violation: a structured warning is emitted on debug
    /// builds and the component renders with zero notifications. It never
    /// panics.
    pub fn set_notifications(&mut self, value: impl Into<PropValue>) {
        match value.into() {
            PropValue::List(list) => self.notifications = list,
            other => {
                if cfg!(debug_assertions) {
                    if let Some(handle) = &self.diagnostics {
                        handle.log_prop_warning(PropWarning::new(
                            NOTIFICATIONS_PROP,
                            COMPONENT_NAME,
                            other.type_name(),
                            EXPECTED_TYPE,
                        ));
                    }
                }
                self.notifications = Vec::new();
            }
        }
        self.renderer.render(&self.notifications, self.style);
    }

    /// Returns the currently supplied (validated) list.
    #[must_use]
    pub fn notifications(&self) -> &[Descriptor] {
        &self.notifications
    }

    /// Routes a toast message to the renderer.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(uid) => {
                self.renderer.dismiss(uid);
            }
            Message::Activate(uid) => {
                self.renderer.activate(uid);
            }
            Message::Tick => self.renderer.tick(),
        }
    }

    /// Returns the embedded renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the embedded renderer mutably (e.g. to wire diagnostics).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl Notifications<ToastStack> {
    /// Creates the component with the built-in toast renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(ToastStack::new())
    }

    /// Builds the toast overlay element.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(&self.renderer, self.position)
    }

    /// Captures the headless render model of the overlay.
    #[must_use]
    pub fn snapshot(&self) -> OverlaySnapshot {
        self.renderer.snapshot()
    }

    /// Periodic tick subscription driving auto-dismiss sweeps.
    pub fn subscription(interval: Duration) -> Subscription<Message> {
        iced::time::every(interval).map(|_| Message::Tick)
    }
}

impl Default for Notifications<ToastStack> {
    fn default() -> Self {
        Self::new()
    }
}
