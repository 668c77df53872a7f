// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Descriptor` value object handed to the
//! [`Notifications`](super::Notifications) component, along with its
//! identity (`Uid`), severity (`Level`), and callback types.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback invoked exactly once when a notification leaves the visible set.
///
/// Receives the dismissed descriptor, regardless of whether the dismissal
/// was triggered by a timeout or by a user action.
pub type RemoveCallback = Arc<dyn Fn(&Descriptor) + Send + Sync>;

/// Callback invoked when a notification's action control is activated.
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

/// Unique identity of a notification instance across re-renders.
///
/// Callers may key their notifications with either text or numbers, so both
/// are accepted and compared structurally.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Uid {
    Text(String),
    Number(u64),
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uid::Text(s) => write!(f, "{}", s),
            Uid::Number(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", self)
    }
}

impl From<&str> for Uid {
    fn from(s: &str) -> Self {
        Uid::Text(s.to_string())
    }
}

impl From<String> for Uid {
    fn from(s: String) -> Self {
        Uid::Text(s)
    }
}

impl From<u64> for Uid {
    fn from(n: u64) -> Self {
        Uid::Number(n)
    }
}

/// Severity level, determining the default accent styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Informational message (blue accent).
    #[default]
    Info,
    /// Operation completed successfully (green accent).
    Success,
    /// Warning that doesn't block operation (orange accent).
    Warning,
    /// Error requiring attention (red accent).
    Error,
}

impl Level {
    /// Returns the accent color for this level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Level::Info => palette::INFO_500,
            Level::Success => palette::SUCCESS_500,
            Level::Warning => palette::WARNING_500,
            Level::Error => palette::ERROR_500,
        }
    }
}

/// An interactive control rendered inside a toast.
///
/// Activating the control invokes `callback` synchronously and then removes
/// the notification (firing its `on_remove`, if any).
#[derive(Clone)]
pub struct Action {
    label: String,
    callback: ActionCallback,
}

impl Action {
    pub fn new(label: impl Into<String>, callback: ActionCallback) -> Self {
        Self {
            label: label.into(),
            callback,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invokes the action's callback.
    pub fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A notification's declarative data record.
///
/// Owned by the caller and treated as immutable by the component: the whole
/// list of descriptors is supplied fresh on every property update and
/// describes the complete desired state, not a delta.
#[derive(Clone)]
pub struct Descriptor {
    /// Identity of this instance for the lifetime of its visibility.
    uid: Uid,
    /// Short heading text.
    title: Option<String>,
    /// Body text.
    message: Option<String>,
    /// Severity level (determines accent styling).
    level: Level,
    /// When false, the manual-close control is suppressed.
    dismissible: bool,
    /// Time before automatic removal. `ZERO` means "never auto-dismiss".
    auto_dismiss: Duration,
    /// Optional interactive control.
    action: Option<Action>,
    /// Invoked exactly once when this instance leaves the visible set.
    on_remove: Option<RemoveCallback>,
}

impl Descriptor {
    /// Creates a descriptor with the given identity and level.
    pub fn new(uid: impl Into<Uid>, level: Level) -> Self {
        Self {
            uid: uid.into(),
            title: None,
            message: None,
            level,
            dismissible: true,
            auto_dismiss: Duration::ZERO,
            action: None,
            on_remove: None,
        }
    }

    /// Creates an info descriptor.
    pub fn info(uid: impl Into<Uid>) -> Self {
        Self::new(uid, Level::Info)
    }

    /// Creates a success descriptor.
    pub fn success(uid: impl Into<Uid>) -> Self {
        Self::new(uid, Level::Success)
    }

    /// Creates a warning descriptor.
    pub fn warning(uid: impl Into<Uid>) -> Self {
        Self::new(uid, Level::Warning)
    }

    /// Creates an error descriptor.
    pub fn error(uid: impl Into<Uid>) -> Self {
        Self::new(uid, Level::Error)
    }

    /// Sets the heading text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Controls whether the manual-close control is rendered.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Sets the auto-dismiss delay. [`Duration::ZERO`] disables the timer.
    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.auto_dismiss = delay;
        self
    }

    /// Sets the auto-dismiss delay in whole seconds. `0` disables the timer.
    #[must_use]
    pub fn auto_dismiss_secs(self, secs: u64) -> Self {
        self.auto_dismiss(Duration::from_secs(secs))
    }

    /// Attaches an interactive control with the given label.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, callback: ActionCallback) -> Self {
        self.action = Some(Action::new(label, callback));
        self
    }

    /// Registers the removal hook for this instance.
    #[must_use]
    pub fn on_remove(mut self, callback: RemoveCallback) -> Self {
        self.on_remove = Some(callback);
        self
    }

    #[must_use]
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns the auto-dismiss delay, or `None` when the instance never
    /// auto-dismisses.
    #[must_use]
    pub fn auto_dismiss_delay(&self) -> Option<Duration> {
        if self.auto_dismiss.is_zero() {
            None
        } else {
            Some(self.auto_dismiss)
        }
    }

    #[must_use]
    pub fn action_control(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Invokes the removal hook, if one is registered.
    pub(crate) fn notify_removed(&self) {
        if let Some(callback) = &self.on_remove {
            callback(self);
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("uid", &self.uid)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("level", &self.level)
            .field("dismissible", &self.dismissible)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("action", &self.action.as_ref().map(Action::label))
            .field("on_remove", &self.on_remove.is_some())
            .finish()
    }
}
