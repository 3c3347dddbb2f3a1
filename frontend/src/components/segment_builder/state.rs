//! Component state for the segment builder.

use common::builder::SegmentDraft;

/// Main state container for the `SegmentBuilderComponent`.
///
/// The draft is created when the modal mounts and dropped with it, so every
/// opening starts from an empty name and the full catalog.
pub struct SegmentBuilderComponent {
    pub draft: SegmentDraft,
}

impl SegmentBuilderComponent {
    pub fn new() -> Self {
        Self {
            draft: SegmentDraft::new(),
        }
    }
}
