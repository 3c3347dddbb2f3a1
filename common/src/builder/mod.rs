//! Segment builder state machine.
//!
//! A [`SegmentDraft`] lives for exactly one opening of the builder modal. It
//! partitions a fixed catalog into the ordered `selected` list and the
//! `available` pool, tracks the choice pending in the "add new" row, and
//! validates the draft before handing it to a [`SegmentSaver`].
//!
//! Every mutating method returns `true` when the draft changed, so callers
//! can use it directly as a re-render flag. References that no longer match
//! the draft (stale values, out-of-range rows) are ignored.

use log::{debug, info, warn};

use crate::collaborators::{NotificationLevel, NotificationSink, SegmentSaver};
use crate::error::{CatalogError, ValidationError};
use crate::model::schema::{check_catalog, default_catalog, SchemaOption};
use crate::model::segment::SegmentPayload;

/// Shown through the sink after a segment has been handed to the saver.
pub const SAVE_SUCCESS_MESSAGE: &str = "Segment saved successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDraft {
    catalog: Vec<SchemaOption>,
    name: String,
    selected: Vec<SchemaOption>,
    available: Vec<SchemaOption>,
    pending: Option<String>,
}

impl Default for SegmentDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentDraft {
    /// Fresh draft over the built-in catalog: no name, nothing selected.
    pub fn new() -> Self {
        Self::from_checked_catalog(default_catalog())
    }

    pub fn with_catalog(catalog: Vec<SchemaOption>) -> Result<Self, CatalogError> {
        check_catalog(&catalog)?;
        Ok(Self::from_checked_catalog(catalog))
    }

    fn from_checked_catalog(catalog: Vec<SchemaOption>) -> Self {
        Self {
            available: catalog.clone(),
            catalog,
            name: String::new(),
            selected: Vec::new(),
            pending: None,
        }
    }

    pub fn catalog(&self) -> &[SchemaOption] {
        &self.catalog
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected(&self) -> &[SchemaOption] {
        &self.selected
    }

    pub fn available(&self) -> &[SchemaOption] {
        &self.available
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn set_name(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.name == text {
            return false;
        }
        self.name = text;
        true
    }

    /// Records the value picked in the "add new" row. An empty value clears
    /// the pending choice.
    pub fn choose_pending(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let next = if value.is_empty() { None } else { Some(value) };
        if self.pending == next {
            return false;
        }
        debug!("pending schema choice: {:?}", next);
        self.pending = next;
        true
    }

    /// Moves the pending choice from `available` to the end of `selected`.
    pub fn commit_pending(&mut self) -> bool {
        let Some(value) = self.pending.as_deref() else {
            return false;
        };
        let Some(position) = self.available.iter().position(|o| o.value == value) else {
            warn!("pending schema '{}' is no longer available", value);
            return false;
        };

        let option = self.available.remove(position);
        debug!("schema '{}' added at row {}", option.value, self.selected.len());
        self.selected.push(option);
        self.pending = None;
        true
    }

    /// Drops the row at `index`; its option becomes available again.
    pub fn remove_selected(&mut self, index: usize) -> bool {
        if index >= self.selected.len() {
            warn!(
                "remove of row {} ignored, only {} selected",
                index,
                self.selected.len()
            );
            return false;
        }
        let removed = self.selected.remove(index);
        debug!("schema '{}' removed from row {}", removed.value, index);
        self.refresh_available();
        true
    }

    /// Swaps the option at row `index` for the available option `new_value`.
    ///
    /// Re-selecting the row's current value is a no-op, since that value is
    /// never in `available`. A pending choice that ends up in the row is
    /// cleared.
    pub fn replace_selected_at(&mut self, index: usize, new_value: &str) -> bool {
        if index >= self.selected.len() {
            warn!(
                "replace of row {} ignored, only {} selected",
                index,
                self.selected.len()
            );
            return false;
        }
        let Some(option) = self.available.iter().find(|o| o.value == new_value) else {
            return false;
        };

        debug!(
            "row {} changed from '{}' to '{}'",
            index, self.selected[index].value, option.value
        );
        self.selected[index] = option.clone();
        if self.pending.as_deref() == Some(new_value) {
            self.pending = None;
        }
        self.refresh_available();
        true
    }

    /// Options offered by the dropdown of row `index`: the row's own option
    /// first, then everything currently available.
    pub fn row_choices(&self, index: usize) -> Vec<&SchemaOption> {
        self.selected
            .get(index)
            .into_iter()
            .chain(self.available.iter())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.selected.is_empty() {
            return Err(ValidationError::NoSchemas);
        }
        Ok(())
    }

    pub fn payload(&self) -> SegmentPayload {
        SegmentPayload::new(self.name.clone(), &self.selected)
    }

    /// Validates the draft and, if it passes, hands the payload to `saver`,
    /// closes the builder and reports success.
    ///
    /// A failed validation is reported through `sink` and leaves both the
    /// draft and the builder untouched.
    pub fn save(
        &self,
        sink: &dyn NotificationSink,
        saver: &dyn SegmentSaver,
        close: impl FnOnce(),
    ) -> Result<SegmentPayload, ValidationError> {
        if let Err(err) = self.validate() {
            debug!("segment rejected: {}", err);
            sink.notify(NotificationLevel::Error, &err.to_string());
            return Err(err);
        }

        let payload = self.payload();
        info!(
            "saving segment '{}' with {} schema field(s)",
            payload.segment_name,
            payload.schema.len()
        );
        saver.save(&payload);
        close();
        sink.notify(NotificationLevel::Success, SAVE_SUCCESS_MESSAGE);
        Ok(payload)
    }

    /// Abandons the draft without validation or notification.
    pub fn cancel(self, close: impl FnOnce()) {
        debug!("segment draft '{}' discarded", self.name);
        close();
    }

    /// Rebuilds `available` as the catalog minus everything selected, in
    /// catalog order.
    fn refresh_available(&mut self) {
        self.available = self
            .catalog
            .iter()
            .filter(|option| !self.selected.iter().any(|s| s.value == option.value))
            .cloned()
            .collect();
    }
}
