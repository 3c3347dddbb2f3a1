//! Defines the properties for the `SegmentBuilderComponent`.

use yew::prelude::*;

/// Properties for the `SegmentBuilderComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SegmentBuilderProps {
    /// Asks the owner to unmount the builder.
    ///
    /// Emitted once after a successful save, and when the user leaves through
    /// the back button or "Cancel". The owner is expected to drop the
    /// component, which discards the draft.
    pub on_close: Callback<()>,
}
