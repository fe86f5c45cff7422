//! Assembly of one API product from one warehouse row.

use feedloader_core::UploaderConfig;

use crate::convert::convert_field;
use crate::filter::is_keepable;
use crate::observer::BatchObserver;
use crate::types::{ApiItem, ApiValue, SourceRow, MERCHANT_ID_FIELD};

/// Columns used for routing only; never sent to the API.
const FIELDS_TO_IGNORE: &[&str] = &[MERCHANT_ID_FIELD];

/// Converts every column of `row` into API format and stamps the configured
/// locale and channel onto the result.
///
/// Fields that fail conversion are reported to `observer` and omitted; fields
/// whose converted value is empty are dropped silently. `contentLanguage`,
/// `targetCountry` and `channel` always come from `config`, overriding any
/// column of the same name.
pub fn format_item<O: BatchObserver + ?Sized>(
    config: &UploaderConfig,
    observer: &O,
    batch_number: usize,
    row: &SourceRow,
) -> ApiItem {
    let mut item = ApiItem::new();

    for (name, raw) in row.iter() {
        if FIELDS_TO_IGNORE.contains(&name) {
            continue;
        }
        match convert_field(name, raw, &config.target_currency) {
            Ok((api_name, value)) => {
                if is_keepable(&value) {
                    item.insert(api_name, value);
                }
            }
            Err(e) => observer.field_skipped(batch_number, &row.item_id(), &e),
        }
    }

    item.insert(
        "contentLanguage",
        ApiValue::Text(config.content_language.clone()),
    );
    item.insert("targetCountry", ApiValue::Text(config.target_country.clone()));
    item.insert("channel", ApiValue::Text(config.channel.to_string()));

    item
}
