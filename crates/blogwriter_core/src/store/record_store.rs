//! Record store with explicit observer registration.
//!
//! # Invariants
//! - All mutations go through `dispatch`, which runs `reduce` and then
//!   notifies observers synchronously in registration order.
//! - `add` validates before any state change; a rejected entry never reaches
//!   the reducer or observers.

use crate::model::record::{Record, RecordId};
use crate::store::action::{reduce, StoreAction, StoreEvent};
use crate::validation::{validate_entry, ValidationError};
use log::debug;

/// Handle returned by `RecordStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreEvent, &[Record]) + Send>;

/// Single source of truth for the record collection.
#[derive(Default)]
pub struct RecordStore {
    records: Vec<Record>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the collection, newest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registers an observer called after every committed change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Record]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(candidate, _)| *candidate != id);
        self.observers.len() != before
    }

    /// Applies one action and notifies observers if the collection changed.
    ///
    /// Returns the emitted event, or `None` for a no-op.
    pub fn dispatch(&mut self, action: StoreAction) -> Option<StoreEvent> {
        let event = reduce(&mut self.records, action)?;
        debug!(
            "event=store_change module=store status=ok change={} count={}",
            event.name(),
            self.records.len()
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&event, &self.records);
        }
        Some(event)
    }

    /// Replaces the collection without validation (trusted restore path).
    pub fn set_all(&mut self, records: Vec<Record>) {
        self.dispatch(StoreAction::SetAll(records));
    }

    /// Validates, creates and prepends a new collapsed record.
    ///
    /// # Errors
    /// - Returns `ValidationError` when either field is blank after trimming;
    ///   the collection is left untouched.
    pub fn add(&mut self, title: &str, content: &str) -> Result<Record, ValidationError> {
        let (title, content) = validate_entry(title, content)?;
        let record = Record::new(title, content);
        self.dispatch(StoreAction::Add(record.clone()));
        Ok(record)
    }

    /// Removes the record with `id`; unknown ids are ignored.
    pub fn delete(&mut self, id: &RecordId) {
        self.dispatch(StoreAction::Delete(id.clone()));
    }

    /// Flips `expanded` on the record with `id`; unknown ids are ignored.
    pub fn toggle_expand(&mut self, id: &RecordId) {
        self.dispatch(StoreAction::ToggleExpand(id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStore;
    use crate::store::action::StoreEvent;
    use std::sync::{Arc, Mutex};

    #[test]
    fn observers_see_post_change_state_in_order() {
        let mut store = RecordStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event, records| {
            sink.lock().unwrap().push((event.clone(), records.len()));
        });

        let created = store.add("Hello", "World").unwrap();
        store.toggle_expand(&created.id);
        store.delete(&created.id);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (StoreEvent::Added(created.id.clone()), 1),
                (StoreEvent::Toggled(created.id.clone()), 1),
                (StoreEvent::Deleted(created.id.clone()), 0),
            ]
        );
    }

    #[test]
    fn rejected_add_and_noops_do_not_notify() {
        let mut store = RecordStore::new();
        let calls = Arc::new(Mutex::new(0_usize));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        assert!(store.add("   ", "body").is_err());
        store.delete(&"missing".into());
        store.toggle_expand(&"missing".into());

        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = RecordStore::new();
        let calls = Arc::new(Mutex::new(0_usize));
        let counter = Arc::clone(&calls);
        let handle = store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        store.add("a", "b").unwrap();
        assert!(store.unsubscribe(handle));
        assert!(!store.unsubscribe(handle));
        store.add("c", "d").unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
