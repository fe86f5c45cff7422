use crate::types::ApiValue;

/// Whether a converted value carries data worth sending.
///
/// Numbers (zero included) and booleans (`false` included) are meaningful
/// product data. `null`, empty text, empty lists and empty objects are not.
#[must_use]
pub fn is_keepable(value: &ApiValue) -> bool {
    match value {
        ApiValue::Null => false,
        ApiValue::Bool(_) | ApiValue::Integer(_) | ApiValue::Float(_) | ApiValue::Price(_) => true,
        ApiValue::Text(s) => !s.is_empty(),
        ApiValue::List(items) => !items.is_empty(),
        ApiValue::Object(map) => !map.is_empty(),
    }
}
