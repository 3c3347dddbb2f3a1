use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single field a segment can be built from.
///
/// `value` is the stable identifier used in the payload and in every lookup;
/// `label` is only ever shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOption {
    pub label: String,
    pub value: String,
}

impl SchemaOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// `(label, value)` pairs of the built-in catalog, in display order.
const DEFAULT_SCHEMA_OPTIONS: [(&str, &str); 7] = [
    ("First Name", "first_name"),
    ("Last Name", "last_name"),
    ("Gender", "gender"),
    ("Age", "age"),
    ("Account Name", "account_name"),
    ("City", "city"),
    ("State", "state"),
];

/// Returns the fixed catalog of schema fields offered by the builder.
pub fn default_catalog() -> Vec<SchemaOption> {
    DEFAULT_SCHEMA_OPTIONS
        .iter()
        .map(|(label, value)| SchemaOption::new(*label, *value))
        .collect()
}

/// Checks that a catalog is usable by a draft: non-empty, unique values.
pub fn check_catalog(catalog: &[SchemaOption]) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (i, option) in catalog.iter().enumerate() {
        if catalog[..i].iter().any(|other| other.value == option.value) {
            return Err(CatalogError::DuplicateValue(option.value.clone()));
        }
    }
    Ok(())
}
