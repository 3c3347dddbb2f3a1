use thiserror::Error;

/// Reasons a draft cannot be saved yet.
///
/// The `Display` text is what the user sees in the error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a segment name!")]
    EmptyName,
    #[error("Please add at least one schema!")]
    NoSchemas,
}

/// Problems with a catalog supplied to `SegmentDraft::with_catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("schema catalog is empty")]
    Empty,
    #[error("duplicate schema value in catalog: {0}")]
    DuplicateValue(String),
}
