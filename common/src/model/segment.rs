use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::schema::SchemaOption;

/// One selected field as it travels in the payload: a map with a single
/// `value -> label` entry, e.g. `{"age": "Age"}`.
pub type SchemaEntry = BTreeMap<String, String>;

/// The structure handed to the save collaborator when a segment is saved.
///
/// Serialized as:
///
/// ```json
/// {"segment_name": "VIP Users", "schema": [{"age": "Age"}, {"city": "City"}]}
/// ```
///
/// `schema` keeps the order in which the user selected the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPayload {
    pub segment_name: String,
    pub schema: Vec<SchemaEntry>,
}

impl SegmentPayload {
    pub fn new<'a>(
        segment_name: impl Into<String>,
        selected: impl IntoIterator<Item = &'a SchemaOption>,
    ) -> Self {
        Self {
            segment_name: segment_name.into(),
            schema: selected
                .into_iter()
                .map(|option| {
                    SchemaEntry::from([(option.value.clone(), option.label.clone())])
                })
                .collect(),
        }
    }
}
