//! Side-channel for recoverable data problems found while building a batch.
//!
//! The builder never logs on its own; it reports to a [`BatchObserver`].
//! [`TracingObserver`] is the production implementation.

use crate::error::ConvertError;

pub trait BatchObserver {
    /// A field failed conversion and was left out of the item.
    fn field_skipped(&self, batch_number: usize, item_id: &str, error: &ConvertError);

    /// A multi-client row had no usable `google_merchant_id` and was left out
    /// of the batch.
    fn row_skipped(&self, batch_number: usize, item_id: &str);
}

impl<T: BatchObserver + ?Sized> BatchObserver for &T {
    fn field_skipped(&self, batch_number: usize, item_id: &str, error: &ConvertError) {
        (**self).field_skipped(batch_number, item_id, error);
    }

    fn row_skipped(&self, batch_number: usize, item_id: &str) {
        (**self).row_skipped(batch_number, item_id);
    }
}

/// Emits `tracing` events: `debug` for dropped fields, `warn` for dropped rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BatchObserver for TracingObserver {
    fn field_skipped(&self, batch_number: usize, item_id: &str, error: &ConvertError) {
        tracing::debug!(
            batch_number,
            item_id,
            field = error.field(),
            error = %error,
            "error parsing item field; field omitted"
        );
    }

    fn row_skipped(&self, batch_number: usize, item_id: &str) {
        tracing::warn!(
            batch_number,
            item_id,
            "account is MCA but google_merchant_id is missing or invalid; item skipped"
        );
    }
}
