//! Converts warehouse product rows into Content API `custombatch` payloads.
//!
//! Rows flow upward through three layers: [`convert`] maps one field,
//! [`filter`] decides whether the converted value is worth sending,
//! [`format`] assembles one product, and [`batch`] turns a list of rows into
//! a batch plus the skip list and batch-id index needed to reconcile the
//! API response.

pub mod batch;
pub mod convert;
pub mod error;
pub mod filter;
pub mod format;
pub mod observer;
pub mod types;

pub use batch::{chunk_rows, create_batch, BatchCreator};
pub use convert::{convert_field, snake_to_camel_case, strip_unwanted_chars};
pub use error::{ConvertError, UploaderError};
pub use filter::is_keepable;
pub use format::format_item;
pub use observer::{BatchObserver, TracingObserver};
pub use types::{
    ApiItem, ApiValue, Batch, BatchEntry, BatchIdIndex, BatchOutput, EntryPayload, FieldValue,
    Price, SourceRow, MERCHANT_ID_FIELD, MISSING_ITEM_ID,
};
