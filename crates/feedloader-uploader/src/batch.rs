//! Batch orchestration: rows in, `custombatch` payload out.

use feedloader_core::{Method, UploaderConfig};

use crate::error::UploaderError;
use crate::format::format_item;
use crate::observer::{BatchObserver, TracingObserver};
use crate::types::{
    ApiItem, ApiValue, BatchEntry, BatchOutput, EntryPayload, FieldValue, SourceRow,
    MERCHANT_ID_FIELD,
};

/// Fields of the REST product id, in order: `{channel}:{contentLanguage}:{targetCountry}:{offerId}`.
const PRODUCT_ID_FIELDS: [&str; 4] = ["channel", "contentLanguage", "targetCountry", "offerId"];

/// Builds batches against one configuration, reporting recoverable data
/// problems to an observer.
///
/// Holds no per-batch state, so one builder can serve any number of
/// [`create_batch`](Self::create_batch) calls.
#[derive(Debug, Clone)]
pub struct BatchCreator<'a, O = TracingObserver> {
    config: &'a UploaderConfig,
    observer: O,
}

impl<'a> BatchCreator<'a, TracingObserver> {
    #[must_use]
    pub fn new(config: &'a UploaderConfig) -> Self {
        Self::with_observer(config, TracingObserver)
    }
}

impl<'a, O: BatchObserver> BatchCreator<'a, O> {
    #[must_use]
    pub fn with_observer(config: &'a UploaderConfig, observer: O) -> Self {
        Self { config, observer }
    }

    #[must_use]
    pub fn config(&self) -> &UploaderConfig {
        self.config
    }

    /// Formats one row as an API product. See [`format_item`].
    #[must_use]
    pub fn format_item(&self, batch_number: usize, row: &SourceRow) -> ApiItem {
        format_item(self.config, &self.observer, batch_number, row)
    }

    /// Processes `rows` into a batch ready to submit to the API.
    ///
    /// `batch_number` identifies the whole batch in logs; each entry's
    /// `batchId` is the zero-based position of its row in `rows`. In
    /// multi-client mode, rows without a usable `google_merchant_id` are
    /// skipped but still consume their position, so emitted ids can have gaps.
    ///
    /// # Errors
    ///
    /// Returns [`UploaderError`] when a delete entry's formatted item lacks one
    /// of the fields needed to build its `productId`.
    pub fn create_batch(
        &self,
        batch_number: usize,
        rows: &[SourceRow],
        method: Method,
    ) -> Result<BatchOutput, UploaderError> {
        let mut output = BatchOutput::default();

        for (batch_id, row) in rows.iter().enumerate() {
            let merchant_id = if self.config.is_mca {
                match row_merchant_id(row) {
                    Some(id) => id,
                    None => {
                        let item_id = row.item_id();
                        self.observer.row_skipped(batch_number, &item_id);
                        output.skipped_item_ids.push(item_id);
                        continue;
                    }
                }
            } else {
                self.config.merchant_id.clone()
            };

            let formatted_item = self.format_item(batch_number, row);
            let payload = match method {
                Method::Insert => EntryPayload::Product(formatted_item),
                Method::Delete => EntryPayload::ProductId(format_product_id(
                    batch_number,
                    batch_id,
                    &formatted_item,
                )?),
            };

            output.batch.entries.push(BatchEntry {
                batch_id,
                merchant_id,
                method,
                payload,
            });
            output.batch_id_to_item_id.insert(batch_id, row.item_id());
        }

        Ok(output)
    }

    /// Splits `rows` into chunks of the configured batch size and builds one
    /// batch per chunk, numbered from zero.
    ///
    /// # Errors
    ///
    /// Stops at the first batch that fails; see [`Self::create_batch`].
    pub fn create_batches(
        &self,
        rows: &[SourceRow],
        method: Method,
    ) -> Result<Vec<BatchOutput>, UploaderError> {
        chunk_rows(rows, self.config.batch_size)
            .enumerate()
            .map(|(batch_number, chunk)| self.create_batch(batch_number, chunk, method))
            .collect()
    }
}

/// Builds one batch with the default [`TracingObserver`].
///
/// # Errors
///
/// See [`BatchCreator::create_batch`].
pub fn create_batch(
    config: &UploaderConfig,
    batch_number: usize,
    rows: &[SourceRow],
    method: Method,
) -> Result<BatchOutput, UploaderError> {
    BatchCreator::new(config).create_batch(batch_number, rows, method)
}

/// Consecutive slices of at most `batch_size` rows. A size of zero is
/// treated as one.
pub fn chunk_rows(rows: &[SourceRow], batch_size: usize) -> std::slice::Chunks<'_, SourceRow> {
    rows.chunks(batch_size.max(1))
}

/// Sub-account id from a multi-client row: non-empty text or a non-zero
/// integer. Anything else means the row cannot be routed.
fn row_merchant_id(row: &SourceRow) -> Option<String> {
    match row.get(MERCHANT_ID_FIELD)? {
        FieldValue::Text(id) if !id.is_empty() => Some(id.clone()),
        FieldValue::Integer(id) if *id != 0 => Some(id.to_string()),
        _ => None,
    }
}

fn format_product_id(
    batch_number: usize,
    batch_id: usize,
    item: &ApiItem,
) -> Result<String, UploaderError> {
    let mut parts = Vec::with_capacity(PRODUCT_ID_FIELDS.len());

    for field in PRODUCT_ID_FIELDS {
        let part = match item.get(field) {
            None => {
                return Err(UploaderError::MissingTemplateField {
                    batch_number,
                    batch_id,
                    field,
                })
            }
            Some(ApiValue::Text(s)) => s.clone(),
            Some(ApiValue::Integer(n)) => n.to_string(),
            Some(ApiValue::Float(n)) => n.to_string(),
            Some(other) => {
                return Err(UploaderError::InvalidTemplateField {
                    batch_number,
                    batch_id,
                    field,
                    reason: format!("expected a scalar, got {other:?}"),
                })
            }
        };
        parts.push(part);
    }

    Ok(parts.join(":"))
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
