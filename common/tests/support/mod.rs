#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use common::builder::SegmentDraft;
use common::collaborators::{NotificationLevel, NotificationSink, SegmentSaver};
use common::model::segment::SegmentPayload;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
pub struct RecordingSink {
    pub notifications: RefCell<Vec<(NotificationLevel, String)>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.notifications
            .borrow_mut()
            .push((level, message.to_string()));
    }
}

impl RecordingSink {
    pub fn count(&self, level: NotificationLevel) -> usize {
        self.notifications
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }
}

#[derive(Default)]
pub struct RecordingSaver {
    pub payloads: RefCell<Vec<SegmentPayload>>,
}

impl SegmentSaver for RecordingSaver {
    fn save(&self, payload: &SegmentPayload) {
        self.payloads.borrow_mut().push(payload.clone());
    }
}

#[derive(Default)]
pub struct CloseCounter {
    pub calls: Cell<usize>,
}

impl CloseCounter {
    pub fn close(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// Asserts that `selected` and `available` split the catalog exactly.
pub fn assert_partitioned(draft: &SegmentDraft) {
    let selected: HashSet<&str> = draft.selected().iter().map(|o| o.value.as_str()).collect();
    let available: HashSet<&str> = draft.available().iter().map(|o| o.value.as_str()).collect();
    let catalog: HashSet<&str> = draft.catalog().iter().map(|o| o.value.as_str()).collect();

    assert_eq!(selected.len(), draft.selected().len(), "duplicate in selected");
    assert_eq!(available.len(), draft.available().len(), "duplicate in available");
    assert!(selected.is_disjoint(&available), "selected and available overlap");
    assert_eq!(
        selected.union(&available).copied().collect::<HashSet<_>>(),
        catalog,
        "catalog entries missing"
    );
}

pub fn values(draft_options: &[common::model::schema::SchemaOption]) -> Vec<&str> {
    draft_options.iter().map(|o| o.value.as_str()).collect()
}
