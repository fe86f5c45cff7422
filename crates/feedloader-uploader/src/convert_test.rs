use super::*;

fn convert(name: &str, raw: impl Into<FieldValue>) -> (String, ApiValue) {
    convert_field(name, &raw.into(), "USD").unwrap()
}

fn list(values: &[&str]) -> ApiValue {
    ApiValue::List(values.iter().map(|v| (*v).to_string()).collect())
}

// -----------------------------------------------------------------------
// snake_to_camel_case
// -----------------------------------------------------------------------

#[test]
fn camel_case_from_snake_case() {
    assert_eq!(snake_to_camel_case("additional_image_link"), "additionalImageLink");
}

#[test]
fn camel_case_from_spaces() {
    assert_eq!(snake_to_camel_case("Sale Price"), "salePrice");
}

#[test]
fn camel_case_lowercases_tail_of_each_token() {
    assert_eq!(snake_to_camel_case("ITEM_ID"), "itemId");
    assert_eq!(snake_to_camel_case("gtin_EAN"), "gtinEan");
}

#[test]
fn camel_case_without_separators_only_lowers_first_char() {
    assert_eq!(snake_to_camel_case("Title"), "title");
    assert_eq!(snake_to_camel_case("GTIN"), "gTIN");
    assert_eq!(snake_to_camel_case("mpn"), "mpn");
}

#[test]
fn camel_case_empty_and_repeated_separators() {
    assert_eq!(snake_to_camel_case(""), "");
    assert_eq!(snake_to_camel_case("sale__price"), "salePrice");
    assert_eq!(snake_to_camel_case("price_"), "price");
}

// -----------------------------------------------------------------------
// strip_unwanted_chars
// -----------------------------------------------------------------------

#[test]
fn strip_removes_currency_and_separators() {
    assert_eq!(strip_unwanted_chars("10,000 yen"), "10000");
    assert_eq!(strip_unwanted_chars("100"), "100");
    assert_eq!(strip_unwanted_chars("$ 1 299"), "1299");
}

#[test]
fn strip_drops_non_ascii_digits() {
    assert_eq!(strip_unwanted_chars("１００円 5"), "5");
}

// -----------------------------------------------------------------------
// convert_field
// -----------------------------------------------------------------------

#[test]
fn item_id_becomes_offer_id() {
    assert_eq!(convert("item_id", "A1"), ("offerId".into(), ApiValue::from("A1")));
}

#[test]
fn item_id_null_is_passed_through() {
    assert_eq!(convert("item_id", FieldValue::Null), ("offerId".into(), ApiValue::Null));
}

#[test]
fn product_type_is_pluralized_and_split() {
    assert_eq!(
        convert("product_type", "Apparel,Shirts"),
        ("productTypes".into(), list(&["Apparel", "Shirts"]))
    );
}

#[test]
fn size_and_additional_image_link_are_pluralized() {
    assert_eq!(convert("size", "M,L"), ("sizes".into(), list(&["M", "L"])));
    assert_eq!(
        convert("additional_image_link", "https://a/1.png"),
        ("additionalImageLinks".into(), list(&["https://a/1.png"]))
    );
}

#[test]
fn list_split_keeps_surrounding_whitespace() {
    assert_eq!(convert("size", "M, L"), ("sizes".into(), list(&["M", " L"])));
}

#[test]
fn plural_product_types_column_keeps_its_name() {
    assert_eq!(
        convert("product_types", "A,B"),
        ("productTypes".into(), list(&["A", "B"]))
    );
}

#[test]
fn empty_or_null_list_fields_become_empty_lists() {
    assert_eq!(convert("size", ""), ("sizes".into(), list(&[])));
    assert_eq!(convert("product_types", FieldValue::Null), ("productTypes".into(), list(&[])));
}

#[test]
fn numeric_list_field_is_stringified() {
    assert_eq!(convert("size", 42_i64), ("sizes".into(), list(&["42"])));
}

#[test]
fn boolean_list_field_is_rejected() {
    let err = convert_field("size", &FieldValue::Bool(true), "USD").unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnsupportedValue {
            field: "size".into(),
            kind: "boolean"
        }
    );
}

#[test]
fn price_gets_currency_and_digits() {
    assert_eq!(
        convert("price", "10,000 yen"),
        (
            "price".into(),
            ApiValue::Price(Price {
                currency: "USD".into(),
                value: "10000".into()
            })
        )
    );
}

#[test]
fn numeric_sale_price_is_stringified_before_stripping() {
    let (name, value) = convert("sale_price", 12.5);
    assert_eq!(name, "salePrice");
    assert_eq!(
        value,
        ApiValue::Price(Price {
            currency: "USD".into(),
            value: "125".into()
        })
    );
}

#[test]
fn zero_price_is_kept_as_zero() {
    let (_, value) = convert("price", 0_i64);
    assert!(matches!(value, ApiValue::Price(ref p) if p.value == "0"));
}

#[test]
fn price_without_digits_is_malformed() {
    let err = convert_field("price", &FieldValue::from("free"), "USD").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedPrice { ref field, ref raw } if field == "price" && raw == "free"));
    assert_eq!(err.field(), "price");
}

#[test]
fn null_price_is_malformed() {
    assert!(convert_field("sale_price", &FieldValue::Null, "USD").is_err());
}

#[test]
fn shipping_is_an_empty_placeholder() {
    assert_eq!(convert("shipping", "US:::5.00 USD"), ("shipping".into(), list(&[])));
}

#[test]
fn loyalty_points_is_an_empty_object() {
    assert_eq!(
        convert("loyalty_points", "100"),
        ("loyaltyPoints".into(), ApiValue::Object(BTreeMap::new()))
    );
}

#[test]
fn adwords_redirect_is_renamed() {
    assert_eq!(
        convert("adwords_redirect", "https://example.com/r"),
        ("adsRedirect".into(), ApiValue::from("https://example.com/r"))
    );
}

#[test]
fn other_fields_pass_through() {
    assert_eq!(convert("title", "Tee"), ("title".into(), ApiValue::from("Tee")));
    assert_eq!(convert("is_bundle", false), ("isBundle".into(), ApiValue::Bool(false)));
    assert_eq!(convert("multipack", 0_i64), ("multipack".into(), ApiValue::Integer(0)));
}

#[test]
fn other_null_fields_become_empty_text() {
    assert_eq!(convert("brand", FieldValue::Null), ("brand".into(), ApiValue::Text(String::new())));
}
