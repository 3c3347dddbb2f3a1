//! Validation and hand-off of a finished segment.

use common::builder::{SegmentDraft, SAVE_SUCCESS_MESSAGE};
use common::collaborators::NotificationLevel;
use common::error::ValidationError;
use serde_json::json;

mod support;
use crate::support::{init_logging, CloseCounter, RecordingSaver, RecordingSink};

#[test]
fn vip_users_segment_is_saved_and_closed_once() {
    init_logging();
    let sink = RecordingSink::default();
    let saver = RecordingSaver::default();
    let closer = CloseCounter::default();

    let mut draft = SegmentDraft::new();
    draft.set_name("VIP Users");
    draft.choose_pending("age");
    draft.commit_pending();
    draft.choose_pending("city");
    draft.commit_pending();

    let payload = draft
        .save(&sink, &saver, || closer.close())
        .expect("valid draft saves");

    assert_eq!(
        serde_json::to_value(&payload).expect("serialize payload"),
        json!({
            "segment_name": "VIP Users",
            "schema": [{"age": "Age"}, {"city": "City"}]
        })
    );
    assert_eq!(saver.payloads.borrow().as_slice(), [payload]);
    assert_eq!(closer.calls.get(), 1);
    assert_eq!(sink.count(NotificationLevel::Success), 1);
    assert_eq!(sink.count(NotificationLevel::Error), 0);
    assert_eq!(
        sink.notifications.borrow()[0],
        (NotificationLevel::Success, SAVE_SUCCESS_MESSAGE.to_string())
    );
}

#[test]
fn empty_name_is_reported_and_keeps_builder_open() {
    init_logging();
    let sink = RecordingSink::default();
    let saver = RecordingSaver::default();
    let closer = CloseCounter::default();

    let mut draft = SegmentDraft::new();
    draft.choose_pending("gender");
    draft.commit_pending();
    let before = draft.clone();

    let result = draft.save(&sink, &saver, || closer.close());

    assert_eq!(result, Err(ValidationError::EmptyName));
    assert_eq!(closer.calls.get(), 0);
    assert!(saver.payloads.borrow().is_empty());
    assert_eq!(
        sink.notifications.borrow().as_slice(),
        [(
            NotificationLevel::Error,
            "Please enter a segment name!".to_string()
        )]
    );
    assert_eq!(draft, before);
}

#[test]
fn missing_schemas_are_reported_and_keep_builder_open() {
    init_logging();
    let sink = RecordingSink::default();
    let saver = RecordingSaver::default();
    let closer = CloseCounter::default();

    let mut draft = SegmentDraft::new();
    draft.set_name("Everyone");

    let result = draft.save(&sink, &saver, || closer.close());

    assert_eq!(result, Err(ValidationError::NoSchemas));
    assert_eq!(closer.calls.get(), 0);
    assert!(saver.payloads.borrow().is_empty());
    assert_eq!(
        sink.notifications.borrow().as_slice(),
        [(
            NotificationLevel::Error,
            "Please add at least one schema!".to_string()
        )]
    );
}

#[test]
fn name_check_runs_before_schema_check() {
    init_logging();
    let sink = RecordingSink::default();
    let saver = RecordingSaver::default();

    let draft = SegmentDraft::new();
    let result = draft.save(&sink, &saver, || {});

    assert_eq!(result, Err(ValidationError::EmptyName));
    assert_eq!(sink.notifications.borrow().len(), 1);
}

#[test]
fn payload_keeps_name_as_typed() {
    init_logging();
    let mut draft = SegmentDraft::new();
    draft.set_name("  Night owls ");
    draft.choose_pending("state");
    draft.commit_pending();

    let payload = draft.payload();
    assert_eq!(payload.segment_name, "  Night owls ");
    assert_eq!(payload.schema.len(), 1);
    assert_eq!(payload.schema[0].get("state").map(String::as_str), Some("State"));
}

#[test]
fn cancel_closes_without_notifying() {
    init_logging();
    let closer = CloseCounter::default();

    let mut draft = SegmentDraft::new();
    draft.set_name("Draft to drop");
    draft.cancel(|| closer.close());

    assert_eq!(closer.calls.get(), 1);
}
