// SPDX-License-Identifier: MPL-2.0
//! Dynamic property values and boundary validation.
//!
//! The `notifications` property accepts whatever the caller hands it, so the
//! component boundary models values dynamically and validates their shape at
//! runtime. A wrong-typed value produces a structured, matchable warning
//! instead of a crash; the component then renders with zero notifications.

use super::descriptor::Descriptor;
use std::fmt;

/// A dynamically typed property value.
#[derive(Debug, Clone)]
pub enum PropValue {
    /// The expected shape: an ordered list of descriptors.
    List(Vec<Descriptor>),
    Number(f64),
    Text(String),
    Flag(bool),
}

impl PropValue {
    /// Returns the caller-facing name of this value's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::List(_) => "array",
            PropValue::Number(_) => "number",
            PropValue::Text(_) => "string",
            PropValue::Flag(_) => "boolean",
        }
    }
}

impl From<Vec<Descriptor>> for PropValue {
    fn from(list: Vec<Descriptor>) -> Self {
        PropValue::List(list)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Flag(b)
    }
}

/// Structured diagnostic emitted when a property has the wrong type.
///
/// Never fatal: the warning is routed to the diagnostics channel and
/// rendering continues. The `Display` format is fixed so callers can match
/// on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropWarning {
    /// Name of the offending property.
    pub property: String,
    /// Name of the component the property was supplied to.
    pub component: String,
    /// Type actually supplied.
    pub actual_type: String,
    /// Type the component expected.
    pub expected_type: String,
}

impl PropWarning {
    pub fn new(
        property: impl Into<String>,
        component: impl Into<String>,
        actual_type: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            component: component.into(),
            actual_type: actual_type.into(),
            expected_type: expected_type.into(),
        }
    }
}

impl fmt::Display for PropWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid prop `{}` of type `{}` supplied to `{}`, expected `{}`.",
            self.property, self.actual_type, self.component, self.expected_type
        )
    }
}
