//! Store actions and the reducer that applies them.

use crate::model::record::{Record, RecordId};

/// One mutation request against the record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Replace the whole collection, preserving the given order.
    SetAll(Vec<Record>),
    /// Insert an already validated record at the front.
    Add(Record),
    /// Remove the record with this id, if any.
    Delete(RecordId),
    /// Flip `expanded` on the record with this id, if any.
    ToggleExpand(RecordId),
}

/// Change notification delivered to store observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Collection replaced wholesale by `SetAll`.
    Restored,
    Added(RecordId),
    Deleted(RecordId),
    Toggled(RecordId),
}

impl StoreEvent {
    /// Short stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Restored => "restored",
            Self::Added(_) => "added",
            Self::Deleted(_) => "deleted",
            Self::Toggled(_) => "toggled",
        }
    }
}

/// Applies `action` to `records` in place.
///
/// Returns the event describing the change, or `None` when the action was a
/// no-op (unknown id on delete/toggle).
pub fn reduce(records: &mut Vec<Record>, action: StoreAction) -> Option<StoreEvent> {
    match action {
        StoreAction::SetAll(next) => {
            *records = next;
            Some(StoreEvent::Restored)
        }
        StoreAction::Add(record) => {
            let id = record.id.clone();
            records.insert(0, record);
            Some(StoreEvent::Added(id))
        }
        StoreAction::Delete(id) => {
            let position = records.iter().position(|record| record.id == id)?;
            records.remove(position);
            Some(StoreEvent::Deleted(id))
        }
        StoreAction::ToggleExpand(id) => {
            let record = records.iter_mut().find(|record| record.id == id)?;
            record.expanded = !record.expanded;
            Some(StoreEvent::Toggled(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, StoreAction, StoreEvent};
    use crate::model::record::{Record, RecordId};

    fn sample() -> Vec<Record> {
        vec![
            Record::with_id("1", "A", "first"),
            Record::with_id("2", "B", "second"),
            Record::with_id("3", "C", "third"),
        ]
    }

    #[test]
    fn add_prepends() {
        let mut records = sample();
        let event = reduce(&mut records, StoreAction::Add(Record::with_id("4", "D", "d")));
        assert_eq!(event, Some(StoreEvent::Added(RecordId::from("4"))));
        assert_eq!(records[0].id.as_str(), "4");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut records = sample();
        reduce(&mut records, StoreAction::Delete(RecordId::from("2")));
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn toggle_flips_only_target() {
        let mut records = sample();
        reduce(&mut records, StoreAction::ToggleExpand(RecordId::from("3")));
        assert!(records[2].expanded);
        assert!(!records[0].expanded && !records[1].expanded);

        reduce(&mut records, StoreAction::ToggleExpand(RecordId::from("3")));
        assert!(!records[2].expanded);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut records = sample();
        assert_eq!(
            reduce(&mut records, StoreAction::Delete(RecordId::from("missing"))),
            None
        );
        assert_eq!(
            reduce(&mut records, StoreAction::ToggleExpand(RecordId::from("missing"))),
            None
        );
        assert_eq!(records, sample());
    }

    #[test]
    fn set_all_replaces_and_is_idempotent() {
        let mut records = sample();
        let replacement = vec![Record::with_id("9", "Z", "z")];
        reduce(&mut records, StoreAction::SetAll(replacement.clone()));
        reduce(&mut records, StoreAction::SetAll(replacement.clone()));
        assert_eq!(records, replacement);
    }
}
