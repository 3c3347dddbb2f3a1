//! Seams between the segment builder and the outside world.
//!
//! The builder never talks to the DOM or the network. It reports to a
//! [`NotificationSink`] and hands finished payloads to a [`SegmentSaver`];
//! the frontend supplies the browser-backed implementations.

use crate::model::segment::SegmentPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
    Success,
}

/// Presents a short, transient message to the user.
pub trait NotificationSink {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Receives the payload of a successfully validated segment.
///
/// Fire-and-forget: the builder treats the hand-off as having succeeded.
pub trait SegmentSaver {
    fn save(&self, payload: &SegmentPayload);
}
