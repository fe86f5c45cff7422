//! Row, item and batch shapes.
//!
//! ## Source rows
//! Warehouse rows arrive as flat objects whose values are text, numbers,
//! booleans or `null`. Field order is preserved so that the formatted item
//! lists its fields in the same order as the query that produced them.
//!
//! ## Batch payload
//! [`Batch`] serializes to exactly the `products.custombatch` request body:
//!
//! ```json
//! {"entries": [{"batchId": 0, "merchantId": "123", "method": "insert", "product": {...}}]}
//! ```
//!
//! Delete entries carry `productId` instead of `product`.

use std::collections::BTreeMap;
use std::fmt;

use feedloader_core::Method;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Routing-only column holding the sub-account id in multi-client mode.
pub const MERCHANT_ID_FIELD: &str = "google_merchant_id";

/// Source column holding the merchant's own item identifier.
pub const ITEM_ID_FIELD: &str = "item_id";

/// Stand-in identifier for rows that have no usable `item_id`.
// TODO: report rows without an item_id through the skip list instead of
// indexing them under this placeholder.
pub const MISSING_ITEM_ID: &str = "(Missing)";

/// A raw warehouse value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Short type name used in conversion errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
        }
    }

    /// Text form of scalar values. Numbers are rendered in decimal;
    /// `null` and booleans have no text form.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::Float(n) => Some(n.to_string()),
            FieldValue::Null | FieldValue::Bool(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// One product record from the warehouse, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    fields: Vec<(String, FieldValue)>,
}

impl SourceRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing an existing value in place.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    fn set(&mut self, name: String, value: FieldValue) {
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The row's `item_id` as text, or [`MISSING_ITEM_ID`] when the column is
    /// absent, `null` or boolean.
    #[must_use]
    pub fn item_id(&self) -> String {
        self.get(ITEM_ID_FIELD)
            .and_then(FieldValue::to_text)
            .unwrap_or_else(|| MISSING_ITEM_ID.to_string())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for SourceRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = SourceRow::new();
        for (k, v) in iter {
            row.set(k.into(), v.into());
        }
        row
    }
}

impl Serialize for SourceRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = SourceRow;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of column names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SourceRow, A::Error> {
        let mut row = SourceRow::new();
        while let Some((k, v)) = access.next_entry::<String, FieldValue>()? {
            row.set(k, v);
        }
        Ok(row)
    }
}

impl<'de> Deserialize<'de> for SourceRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RowVisitor)
    }
}

/// `{currency, value}` money object used by `price` and `salePrice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    pub currency: String,
    pub value: String,
}

/// A converted value in API shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Price(Price),
    Object(BTreeMap<String, ApiValue>),
}

impl From<FieldValue> for ApiValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => ApiValue::Null,
            FieldValue::Bool(b) => ApiValue::Bool(b),
            FieldValue::Integer(n) => ApiValue::Integer(n),
            FieldValue::Float(n) => ApiValue::Float(n),
            FieldValue::Text(s) => ApiValue::Text(s),
        }
    }
}

impl From<&str> for ApiValue {
    fn from(value: &str) -> Self {
        ApiValue::Text(value.to_owned())
    }
}

/// A product in API format. Keeps insertion order; re-inserting a key
/// overwrites its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiItem {
    fields: Vec<(String, ApiValue)>,
}

impl ApiItem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ApiValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ApiValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ApiItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// What an entry operates on: the full product for inserts, the computed
/// REST id for deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryPayload {
    Product(ApiItem),
    ProductId(String),
}

/// One item operation within a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    /// Zero-based position of the source row in the input.
    pub batch_id: usize,
    pub merchant_id: String,
    pub method: Method,
    #[serde(flatten)]
    pub payload: EntryPayload,
}

impl BatchEntry {
    #[must_use]
    pub fn product(&self) -> Option<&ApiItem> {
        match &self.payload {
            EntryPayload::Product(item) => Some(item),
            EntryPayload::ProductId(_) => None,
        }
    }

    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        match &self.payload {
            EntryPayload::ProductId(id) => Some(id),
            EntryPayload::Product(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Batch {
    pub entries: Vec<BatchEntry>,
}

/// Maps `batchId` back to the source `item_id`; the API response only echoes
/// `batchId`.
pub type BatchIdIndex = BTreeMap<usize, String>;

/// Everything [`crate::create_batch`] produces for one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutput {
    pub batch: Batch,
    /// Item ids excluded from the batch (multi-client accounts only).
    pub skipped_item_ids: Vec<String>,
    pub batch_id_to_item_id: BatchIdIndex,
}
