// SPDX-License-Identifier: MPL-2.0
//! Visual layer for the toast component.
//!
//! - [`toast`] - toast card and overlay views
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;

pub use toast::Toast;
