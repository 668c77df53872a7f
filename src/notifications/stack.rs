// SPDX-License-Identifier: MPL-2.0
//! The built-in toast renderer.
//!
//! `ToastStack` owns the visible set and the per-instance dismissal
//! lifecycle: it arms one auto-dismiss deadline per instance, reconciles the
//! displayed set against the caller's desired list, and guarantees the
//! removal hook fires exactly once per instance, whatever the dismissal
//! cause.

use super::descriptor::{Descriptor, Level, Uid};
use super::renderer::{DismissCause, NotificationRenderer, StyleMode};
use crate::diagnostics::DiagnosticsHandle;
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast via its manual-close control.
    Dismiss(Uid),
    /// Activate a specific toast's action control.
    Activate(Uid),
    /// Tick for sweeping auto-dismiss deadlines.
    Tick,
}

/// Per-instance lifecycle phase.
///
/// An instance enters `Visible` when it is first rendered, passes through
/// `Dismissing` while its callbacks run, and is removed from the stack once
/// terminal. The `Dismissing` guard is what makes the removal hook
/// exactly-once: a second dismissal path reaching the entry mid-flight is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    Dismissing,
}

#[derive(Debug)]
struct Entry {
    descriptor: Descriptor,
    /// Deadline armed once, when the instance first became visible.
    /// Re-rendering the same uid never re-arms it.
    deadline: Option<Instant>,
    phase: Phase,
}

/// Headless render model of a single toast card.
#[derive(Debug, Clone)]
pub struct ToastSnapshot {
    pub uid: Uid,
    pub title: Option<String>,
    pub message: Option<String>,
    pub level: Level,
    pub has_dismiss_control: bool,
    pub action_label: Option<String>,
}

impl ToastSnapshot {
    /// Returns all user-visible text of this card, in reading order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title);
        }
        if let Some(message) = &self.message {
            parts.push(message);
        }
        if let Some(label) = &self.action_label {
            parts.push(label);
        }
        parts.join(" ")
    }
}

/// Headless render model of the whole overlay.
///
/// Exactly one overlay exists per stack, regardless of how many toasts are
/// visible.
#[derive(Debug, Clone)]
pub struct OverlaySnapshot {
    pub styled: bool,
    pub toasts: Vec<ToastSnapshot>,
}

impl OverlaySnapshot {
    /// Returns the concatenated text content of every visible card.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.toasts
            .iter()
            .map(ToastSnapshot::text_content)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Manages the visible toast set and its dismissal lifecycle.
#[derive(Debug, Default)]
pub struct ToastStack {
    entries: Vec<Entry>,
    style: StyleMode,
    /// Optional diagnostics handle for logging toast lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastStack {
    /// Creates a new empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for logging lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(uid) => {
                self.dismiss(uid);
            }
            Message::Activate(uid) => {
                self.activate(uid);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Sweeps deadlines against an explicit clock reading.
    ///
    /// [`tick`](NotificationRenderer::tick) delegates here with
    /// `Instant::now()`; tests inject a synthetic `now` instead of sleeping.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<Uid> = self
            .entries
            .iter()
            .filter(|e| e.phase == Phase::Visible)
            .filter(|e| e.deadline.is_some_and(|deadline| deadline <= now))
            .map(|e| e.descriptor.uid().clone())
            .collect();

        for uid in expired {
            self.dismiss_entry(&uid, DismissCause::Timeout);
        }
    }

    /// Returns the currently visible descriptors, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    /// Returns the number of visible toasts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current style mode.
    #[must_use]
    pub fn style(&self) -> StyleMode {
        self.style
    }

    /// Captures the headless render model of the overlay.
    #[must_use]
    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            styled: self.style == StyleMode::Styled,
            toasts: self
                .entries
                .iter()
                .map(|e| ToastSnapshot {
                    uid: e.descriptor.uid().clone(),
                    title: e.descriptor.title_text().map(str::to_string),
                    message: e.descriptor.message_text().map(str::to_string),
                    level: e.descriptor.level(),
                    has_dismiss_control: e.descriptor.is_dismissible(),
                    action_label: e
                        .descriptor
                        .action_control()
                        .map(|action| action.label().to_string()),
                })
                .collect(),
        }
    }

    /// Drives one instance through `Dismissing` to removal.
    ///
    /// Ordering: for `DismissCause::Action` the action callback fires first,
    /// then the removal hook, both within this call. Removal disarms the
    /// instance's deadline, so a pending timeout can never fire afterwards.
    fn dismiss_entry(&mut self, uid: &Uid, cause: DismissCause) -> bool {
        let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.descriptor.uid() == uid)
        else {
            return false;
        };
        if self.entries[pos].phase != Phase::Visible {
            // Already mid-dismissal; the removal hook must not fire twice.
            return false;
        }
        self.entries[pos].phase = Phase::Dismissing;

        let descriptor = self.entries[pos].descriptor.clone();
        if cause == DismissCause::Action {
            if let Some(action) = descriptor.action_control() {
                action.invoke();
            }
        }
        descriptor.notify_removed();

        self.entries.retain(|e| e.descriptor.uid() != uid);

        if let Some(handle) = &self.diagnostics {
            handle.log_toast_dismissed(uid.clone(), cause);
        }
        true
    }
}

impl NotificationRenderer for ToastStack {
    fn render(&mut self, desired: &[Descriptor], style: StyleMode) {
        self.style = style;

        // Instances absent from the desired list are dropped without firing
        // their removal hook; that hook belongs to the dismissal lifecycle.
        self.entries
            .retain(|e| desired.iter().any(|d| d.uid() == e.descriptor.uid()));

        let now = Instant::now();
        for descriptor in desired {
            if let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.descriptor.uid() == descriptor.uid())
            {
                // Same instance re-rendered: refresh content, keep the
                // originally armed deadline.
                entry.descriptor = descriptor.clone();
            } else {
                let deadline = descriptor.auto_dismiss_delay().map(|delay| now + delay);
                self.entries.push(Entry {
                    descriptor: descriptor.clone(),
                    deadline,
                    phase: Phase::Visible,
                });
                if let Some(handle) = &self.diagnostics {
                    handle.log_toast_shown(descriptor.uid().clone());
                }
            }
        }
    }

    fn dismiss(&mut self, uid: &Uid) -> bool {
        self.dismiss_entry(uid, DismissCause::Manual)
    }

    fn activate(&mut self, uid: &Uid) -> bool {
        self.dismiss_entry(uid, DismissCause::Action)
    }

    fn tick(&mut self) {
        self.tick_at(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CallSpy;
    use std::time::Duration;

    fn descriptor(uid: &str) -> Descriptor {
        Descriptor::info(uid).title("title").message("message")
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = ToastStack::new();
        assert_eq!(stack.visible_count(), 0);
        assert!(stack.snapshot().toasts.is_empty());
    }

    #[test]
    fn render_adds_new_instances() {
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a"), descriptor("b")],
            StyleMode::Styled,
        );
        assert_eq!(stack.visible_count(), 2);
    }

    #[test]
    fn render_is_desired_state_not_delta() {
        let mut stack = ToastStack::new();
        stack.render(&[descriptor("a"), descriptor("b")], StyleMode::Styled);
        stack.render(&[descriptor("b")], StyleMode::Styled);

        assert_eq!(stack.visible_count(), 1);
        assert_eq!(stack.visible().next().unwrap().uid(), &Uid::from("b"));
    }

    #[test]
    fn list_removal_does_not_fire_removal_hook() {
        let spy = CallSpy::new();
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a").on_remove(spy.remove_callback())],
            StyleMode::Styled,
        );
        stack.render(&[], StyleMode::Styled);

        assert_eq!(stack.visible_count(), 0);
        assert_eq!(spy.calls(), 0);
    }

    #[test]
    fn manual_dismiss_fires_removal_hook_once() {
        let spy = CallSpy::new();
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a").on_remove(spy.remove_callback())],
            StyleMode::Styled,
        );

        assert!(stack.dismiss(&Uid::from("a")));
        assert!(!stack.dismiss(&Uid::from("a")));
        assert_eq!(spy.calls(), 1);
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn activate_invokes_action_then_removal_hook() {
        let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let action_order = std::sync::Arc::clone(&order);
        let remove_order = std::sync::Arc::clone(&order);

        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a")
                .action(
                    "Dismiss",
                    std::sync::Arc::new(move || {
                        action_order.lock().unwrap().push("action");
                    }),
                )
                .on_remove(std::sync::Arc::new(move |_| {
                    remove_order.lock().unwrap().push("remove");
                }))],
            StyleMode::Styled,
        );

        assert!(stack.activate(&Uid::from("a")));
        assert_eq!(*order.lock().unwrap(), vec!["action", "remove"]);
    }

    #[test]
    fn tick_dismisses_expired_instances() {
        let spy = CallSpy::new();
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a")
                .auto_dismiss_secs(1)
                .on_remove(spy.remove_callback())],
            StyleMode::Styled,
        );

        stack.tick_at(Instant::now() + Duration::from_millis(1100));
        assert_eq!(spy.calls(), 1);
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn tick_before_deadline_keeps_instance() {
        let spy = CallSpy::new();
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a")
                .auto_dismiss_secs(5)
                .on_remove(spy.remove_callback())],
            StyleMode::Styled,
        );

        stack.tick_at(Instant::now() + Duration::from_secs(1));
        assert_eq!(spy.calls(), 0);
        assert_eq!(stack.visible_count(), 1);
    }

    #[test]
    fn zero_auto_dismiss_never_expires() {
        let spy = CallSpy::new();
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a")
                .auto_dismiss_secs(0)
                .on_remove(spy.remove_callback())],
            StyleMode::Styled,
        );

        stack.tick_at(Instant::now() + Duration::from_secs(3600));
        assert_eq!(spy.calls(), 0);
        assert_eq!(stack.visible_count(), 1);
    }

    #[test]
    fn re_render_does_not_re_arm_deadline() {
        let spy = CallSpy::new();
        let armed = Instant::now();
        let mut stack = ToastStack::new();
        let toast = descriptor("a")
            .auto_dismiss_secs(1)
            .on_remove(spy.remove_callback());

        stack.render(std::slice::from_ref(&toast), StyleMode::Styled);
        // A later property update with the same uid keeps the old deadline.
        stack.render(std::slice::from_ref(&toast), StyleMode::Styled);

        stack.tick_at(armed + Duration::from_millis(1100));
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn timeout_and_manual_dismiss_cannot_both_fire() {
        let spy = CallSpy::new();
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a")
                .auto_dismiss_secs(1)
                .on_remove(spy.remove_callback())],
            StyleMode::Styled,
        );

        // Manual dismissal wins; the expired deadline afterwards is a no-op.
        assert!(stack.dismiss(&Uid::from("a")));
        stack.tick_at(Instant::now() + Duration::from_secs(2));
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn handle_message_routes_all_variants() {
        let mut stack = ToastStack::new();
        stack.render(
            &[
                descriptor("a").action("Retry", CallSpy::new().callback()),
                descriptor("b"),
            ],
            StyleMode::Styled,
        );

        stack.handle_message(&Message::Activate(Uid::from("a")));
        stack.handle_message(&Message::Dismiss(Uid::from("b")));
        stack.handle_message(&Message::Tick);
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn snapshot_reflects_content_and_controls() {
        let mut stack = ToastStack::new();
        stack.render(
            &[descriptor("a")
                .dismissible(false)
                .action("Undo", CallSpy::new().callback())],
            StyleMode::Unstyled,
        );

        let snapshot = stack.snapshot();
        assert!(!snapshot.styled);
        assert_eq!(snapshot.toasts.len(), 1);
        let card = &snapshot.toasts[0];
        assert!(!card.has_dismiss_control);
        assert_eq!(card.action_label.as_deref(), Some("Undo"));
        assert!(snapshot.text_content().contains("title"));
        assert!(snapshot.text_content().contains("message"));
    }
}
