// SPDX-License-Identifier: MPL-2.0
//! Toast notification component and its collaborators.
//!
//! The caller supplies an ordered list of [`Descriptor`]s as the
//! `notifications` property of a [`Notifications`] component; the component
//! validates the property, forwards the list to a [`NotificationRenderer`],
//! and the renderer drives dismissal (auto-dismiss timers and user actions)
//! back into each descriptor's callbacks.
//!
//! # Components
//!
//! - [`descriptor`] - `Descriptor` value object with levels and callbacks
//! - [`adapter`] - the `Notifications` component (property boundary)
//! - [`renderer`] - the renderer capability and dismissal contract
//! - [`stack`] - `ToastStack`, the built-in renderer
//! - [`store`] - optional reducer-style list holder
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::notifications::{Descriptor, Notifications};
//! use std::sync::Arc;
//!
//! let mut component = Notifications::new();
//! component.set_notifications(vec![
//!     Descriptor::success("saved")
//!         .title("Saved")
//!         .message("Your changes are on disk.")
//!         .auto_dismiss_secs(5)
//!         .on_remove(Arc::new(|d| println!("gone: {}", d.uid()))),
//! ]);
//!
//! // In your view function, render the overlay
//! let overlay = component.view().map(AppMessage::Toast);
//! ```

pub mod adapter;
pub mod descriptor;
pub mod prop;
pub mod renderer;
pub mod stack;
pub mod store;

pub use adapter::{Notifications, COMPONENT_NAME};
pub use descriptor::{Action, ActionCallback, Descriptor, Level, RemoveCallback, Uid};
pub use prop::{PropValue, PropWarning};
pub use renderer::{DismissCause, NotificationRenderer, StyleMode};
pub use stack::{Message, OverlaySnapshot, ToastSnapshot, ToastStack};
pub use store::{NotificationStore, StoreAction};
