// SPDX-License-Identifier: MPL-2.0
//! Reducer-style holder for the notification list.
//!
//! The component treats the `notifications` property as external state; this
//! store is the crate's companion for callers who want that state managed
//! for them. Actions reduce into an ordered list that can be fed straight
//! back into [`Notifications`](super::Notifications) after every change.
//!
//! The usual wiring is a descriptor whose removal hook applies
//! [`StoreAction::Hide`] for its own uid, so a dismissed toast also leaves
//! the list.

use super::descriptor::{Descriptor, Uid};
use super::prop::PropValue;

/// Actions that mutate the held notification list.
#[derive(Debug, Clone)]
pub enum StoreAction {
    /// Append a notification. An existing notification with the same uid is
    /// replaced in place.
    Show(Descriptor),
    /// Remove the notification with the given uid, if present.
    Hide(Uid),
    /// Remove every notification.
    RemoveAll,
}

/// Ordered notification list with reducer semantics.
#[derive(Debug, Default)]
pub struct NotificationStore {
    items: Vec<Descriptor>,
    next_uid: u64,
}

impl NotificationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action to the held list.
    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::Show(descriptor) => {
                if let Some(existing) = self
                    .items
                    .iter_mut()
                    .find(|d| d.uid() == descriptor.uid())
                {
                    *existing = descriptor;
                } else {
                    self.items.push(descriptor);
                }
            }
            StoreAction::Hide(uid) => {
                self.items.retain(|d| d.uid() != &uid);
            }
            StoreAction::RemoveAll => self.items.clear(),
        }
    }

    /// Mints a fresh numeric uid for callers who don't pick their own.
    pub fn next_uid(&mut self) -> Uid {
        let uid = Uid::Number(self.next_uid);
        self.next_uid += 1;
        uid
    }

    /// Returns the held list, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Descriptor] {
        &self.items
    }

    /// Returns the held list as a property value for the component.
    #[must_use]
    pub fn prop(&self) -> PropValue {
        PropValue::List(self.items.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_appends_in_order() {
        let mut store = NotificationStore::new();
        store.apply(StoreAction::Show(Descriptor::info("a")));
        store.apply(StoreAction::Show(Descriptor::success("b")));

        let uids: Vec<String> = store
            .notifications()
            .iter()
            .map(|d| d.uid().to_string())
            .collect();
        assert_eq!(uids, vec!["a", "b"]);
    }

    #[test]
    fn show_with_existing_uid_replaces_in_place() {
        let mut store = NotificationStore::new();
        store.apply(StoreAction::Show(Descriptor::info("a").title("first")));
        store.apply(StoreAction::Show(Descriptor::info("a").title("second")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.notifications()[0].title_text(), Some("second"));
    }

    #[test]
    fn hide_removes_only_the_named_uid() {
        let mut store = NotificationStore::new();
        store.apply(StoreAction::Show(Descriptor::info("a")));
        store.apply(StoreAction::Show(Descriptor::info("b")));
        store.apply(StoreAction::Hide(Uid::from("a")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.notifications()[0].uid(), &Uid::from("b"));
    }

    #[test]
    fn hide_unknown_uid_is_a_no_op() {
        let mut store = NotificationStore::new();
        store.apply(StoreAction::Show(Descriptor::info("a")));
        store.apply(StoreAction::Hide(Uid::from("missing")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_all_clears_the_list() {
        let mut store = NotificationStore::new();
        store.apply(StoreAction::Show(Descriptor::info("a")));
        store.apply(StoreAction::Show(Descriptor::info("b")));
        store.apply(StoreAction::RemoveAll);
        assert!(store.is_empty());
    }

    #[test]
    fn minted_uids_are_unique() {
        let mut store = NotificationStore::new();
        let first = store.next_uid();
        let second = store.next_uid();
        assert_ne!(first, second);
    }

    #[test]
    fn prop_exposes_the_list_shape() {
        let mut store = NotificationStore::new();
        store.apply(StoreAction::Show(Descriptor::info("a")));
        assert_eq!(store.prop().type_name(), "array");
    }
}
