// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events capture the component's observable misbehavior (property type
//! violations) and toast lifecycle milestones, stamped with wall-clock time
//! for export and inspection.

use crate::notifications::{DismissCause, PropWarning, Uid};
use chrono::{DateTime, Utc};
use std::fmt;

/// What happened.
#[derive(Debug, Clone)]
pub enum DiagnosticEventKind {
    /// A property was supplied with the wrong type.
    PropWarning(PropWarning),
    /// A toast entered the visible set.
    ToastShown { uid: Uid },
    /// A toast left the visible set.
    ToastDismissed { uid: Uid, cause: DismissCause },
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::PropWarning(warning) => write!(f, "{}", warning),
            DiagnosticEventKind::ToastShown { uid } => write!(f, "Toast `{}` shown", uid),
            DiagnosticEventKind::ToastDismissed { uid, cause } => {
                write!(f, "Toast `{}` dismissed ({:?})", uid, cause)
            }
        }
    }
}

/// A single diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }

    /// Returns true for property type violation events.
    #[must_use]
    pub fn is_prop_warning(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::PropWarning(_))
    }
}
