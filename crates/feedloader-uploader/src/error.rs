use thiserror::Error;

/// A single field could not be converted. Recovered by the item formatter:
/// the field is dropped and the rest of the row is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("price field {field} has no digits in {raw:?}")]
    MalformedPrice { field: String, raw: String },

    #[error("field {field} expects text but got a {kind} value")]
    UnsupportedValue { field: String, kind: &'static str },
}

impl ConvertError {
    /// Source field name the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            ConvertError::MalformedPrice { field, .. }
            | ConvertError::UnsupportedValue { field, .. } => field,
        }
    }
}

/// Fatal batch-building errors. These point at configuration or upstream
/// data integrity problems, not at ordinary per-row data quality issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploaderError {
    #[error("batch #{batch_number} entry {batch_id}: formatted item has no {field} to build productId")]
    MissingTemplateField {
        batch_number: usize,
        batch_id: usize,
        field: &'static str,
    },

    #[error("batch #{batch_number} entry {batch_id}: {field} cannot be used in productId: {reason}")]
    InvalidTemplateField {
        batch_number: usize,
        batch_id: usize,
        field: &'static str,
        reason: String,
    },
}
