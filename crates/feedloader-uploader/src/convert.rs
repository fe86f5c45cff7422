//! Field-level conversion from warehouse columns to API attributes.
//!
//! Column names are normalized to lower camel case and then dispatched
//! through [`FieldRule`]; adding a new special-cased attribute means adding
//! one arm to [`FieldRule::for_name`].

use std::collections::BTreeMap;

use crate::error::ConvertError;
use crate::types::{ApiValue, FieldValue, Price};

/// How a normalized attribute name is shaped for the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    /// Singular column holding comma-separated values; the API name is plural.
    PluralList,
    /// Already-plural column holding comma-separated values.
    List,
    OfferId,
    Price,
    /// Shipping is not derived from the feed; sent as an empty placeholder.
    Shipping,
    LoyaltyPoints,
    AdsRedirect,
    Passthrough,
}

impl FieldRule {
    fn for_name(camel: &str) -> Self {
        match camel {
            "size" | "additionalImageLink" | "productType" => FieldRule::PluralList,
            "productTypes" => FieldRule::List,
            "itemId" => FieldRule::OfferId,
            "price" | "salePrice" => FieldRule::Price,
            "shipping" => FieldRule::Shipping,
            "loyaltyPoints" => FieldRule::LoyaltyPoints,
            "adwordsRedirect" => FieldRule::AdsRedirect,
            _ => FieldRule::Passthrough,
        }
    }
}

/// Converts one warehouse field into its API name and value.
///
/// `currency` is attached to `price` and `salePrice` objects.
///
/// # Errors
///
/// Returns [`ConvertError::MalformedPrice`] when a price carries no digits and
/// [`ConvertError::UnsupportedValue`] when a list attribute holds a boolean.
pub fn convert_field(
    name: &str,
    raw: &FieldValue,
    currency: &str,
) -> Result<(String, ApiValue), ConvertError> {
    let camel = snake_to_camel_case(name);

    let converted = match FieldRule::for_name(&camel) {
        FieldRule::PluralList => {
            let value = split_list(name, raw)?;
            (format!("{camel}s"), value)
        }
        FieldRule::List => {
            let value = split_list(name, raw)?;
            (camel, value)
        }
        FieldRule::OfferId => ("offerId".to_string(), ApiValue::from(raw.clone())),
        FieldRule::Price => {
            let value = price_value(name, raw, currency)?;
            (camel, value)
        }
        FieldRule::Shipping => (camel, ApiValue::List(Vec::new())),
        FieldRule::LoyaltyPoints => (camel, ApiValue::Object(BTreeMap::new())),
        FieldRule::AdsRedirect => ("adsRedirect".to_string(), ApiValue::from(raw.clone())),
        FieldRule::Passthrough => {
            let value = match raw {
                FieldValue::Null => ApiValue::Text(String::new()),
                other => ApiValue::from(other.clone()),
            };
            (camel, value)
        }
    };

    Ok(converted)
}

/// Converts a snake_case or space-separated column name to lower camel case.
///
/// The first character is always lowercased. When the name has separators,
/// the first token is lowercased and every following token is capitalized
/// (`"sale_price"` → `"salePrice"`, `"Item ID"` → `"itemId"`). A name without
/// separators keeps the rest of its casing (`"GTIN"` → `"gTIN"`).
#[must_use]
pub fn snake_to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    let lowered_first: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };

    let normalized = lowered_first.replace(' ', "_");
    let mut tokens = normalized.split('_');
    let head = tokens.next().unwrap_or_default();
    let rest: Vec<&str> = tokens.collect();

    if rest.is_empty() {
        return head.to_string();
    }

    let mut camel = head.to_lowercase();
    for token in rest {
        camel.push_str(&capitalize(token));
    }
    camel
}

/// Uppercases the first character and lowercases the remainder.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Keeps only ASCII digits, in order (`"10,000 yen"` → `"10000"`).
#[must_use]
pub fn strip_unwanted_chars(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn split_list(field: &str, raw: &FieldValue) -> Result<ApiValue, ConvertError> {
    let text = match raw {
        FieldValue::Null => return Ok(ApiValue::List(Vec::new())),
        FieldValue::Bool(_) => {
            return Err(ConvertError::UnsupportedValue {
                field: field.to_string(),
                kind: raw.kind(),
            })
        }
        other => other.to_text().unwrap_or_default(),
    };

    if text.is_empty() {
        return Ok(ApiValue::List(Vec::new()));
    }
    Ok(ApiValue::List(text.split(',').map(str::to_string).collect()))
}

fn price_value(field: &str, raw: &FieldValue, currency: &str) -> Result<ApiValue, ConvertError> {
    let text = raw.to_text().unwrap_or_default();
    let digits = strip_unwanted_chars(&text);
    if digits.is_empty() {
        return Err(ConvertError::MalformedPrice {
            field: field.to_string(),
            raw: text,
        });
    }
    Ok(ApiValue::Price(Price {
        currency: currency.to_string(),
        value: digits,
    }))
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
