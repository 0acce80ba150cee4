use serde_json::json;

use phonefield_adapters::{JsonPhoneField, LibPhoneNumberService};
use phonefield_app::PhoneNumberFieldTransformer;
use phonefield_core::country::{CountryChoices, CountryCode};
use phonefield_core::field::FieldArray;
use phonefield_ports::inbound::DataTransformer;
use phonefield_ports::outbound::PhoneNumberService;

const FAILED: &str = "transformation_failed";

fn transformer(codes: &[&str]) -> PhoneNumberFieldTransformer<LibPhoneNumberService> {
    let choices = CountryChoices::parse_codes(codes.iter().copied()).unwrap();
    PhoneNumberFieldTransformer::new(LibPhoneNumberService::new(), choices)
}

/// Parses `(country, number)` the way a bound object would have been filled,
/// then renders it back into the two widgets.
fn transform(codes: &[&str], actual: Option<(&str, &str)>) -> Result<FieldArray, &'static str> {
    let t = transformer(codes);
    let number = actual.map(|(country, number)| {
        let hint = CountryCode::new(country).unwrap();
        t.service().parse(number, Some(&hint)).unwrap()
    });
    t.transform(number.as_ref()).map_err(|_| FAILED)
}

fn json_field(codes: &[&str]) -> JsonPhoneField<LibPhoneNumberService> {
    JsonPhoneField::new(transformer(codes))
}

fn reverse(codes: &[&str], country: &str, number: &str) -> Result<Option<String>, &'static str> {
    let t = transformer(codes);
    let parsed = t
        .reverse_transform(Some(&FieldArray::new(country, number)))
        .map_err(|_| FAILED)?;
    Ok(parsed.map(|n| t.service().format_e164(&n)))
}

#[test]
fn transform_absent_is_empty_pair() {
    assert_eq!(transform(&["GB"], None), Ok(FieldArray::new("", "")));
}

#[test]
fn transform_formats_national_number() {
    assert_eq!(
        transform(&["GB"], Some(("GB", "01234567890"))),
        Ok(FieldArray::new("GB", "01234 567890"))
    );
}

#[test]
fn transform_tolerates_wrong_country_hint() {
    assert_eq!(
        transform(&["GB", "JE"], Some(("JE", "01234567890"))),
        Ok(FieldArray::new("GB", "01234 567890"))
    );
    assert_eq!(
        transform(&["GB", "JE"], Some(("JE", "+441234567890"))),
        Ok(FieldArray::new("GB", "01234 567890"))
    );
}

#[test]
fn transform_country_not_in_list_fails() {
    assert_eq!(transform(&["US"], Some(("GB", "01234567890"))), Err(FAILED));
}

#[test]
fn transform_non_phone_value_fails() {
    let err = json_field(&["US"]).transform(&json!("foo")).unwrap_err();
    assert_eq!(err.message(), "expected a phone number");
}

#[test]
fn italian_landline_round_trips() {
    let field = json_field(&["GB", "JE", "US", "IT"]);
    assert_eq!(
        field
            .reverse_transform(&json!({"country": "IT", "number": "06 1234 5678"}))
            .unwrap(),
        json!("+390612345678")
    );
    let view = field.transform(&json!("+390612345678")).unwrap();
    assert_eq!(view["country"], json!("IT"));
}

#[test]
fn reverse_empty_inputs_are_absent() {
    let t = transformer(&["GB"]);
    assert_eq!(t.reverse_transform(None).unwrap(), None);
    assert_eq!(reverse(&["GB"], "", ""), Ok(None));
    assert_eq!(reverse(&["GB"], "GB", ""), Ok(None));
}

#[test]
fn reverse_unparsable_fails() {
    assert_eq!(reverse(&["GB"], "", "foo"), Err(FAILED));
    assert_eq!(reverse(&["GB"], "GB", "foo"), Err(FAILED));
}

#[test]
fn reverse_parses_national_and_international_input() {
    assert_eq!(
        reverse(&["GB"], "GB", "01234 567890"),
        Ok(Some("+441234567890".into()))
    );
    assert_eq!(
        reverse(&["GB"], "GB", "+44 1234 567890"),
        Ok(Some("+441234567890".into()))
    );
}

#[test]
fn reverse_country_not_in_list_fails() {
    assert_eq!(reverse(&["US"], "GB", "+44 1234 567890"), Err(FAILED));
}

#[test]
fn reverse_then_transform_round_trips() {
    let t = transformer(&["GB"]);
    let parsed = t
        .reverse_transform(Some(&FieldArray::new("GB", "01234567890")))
        .unwrap();
    assert_eq!(
        t.transform(parsed.as_ref()).unwrap(),
        FieldArray::new("GB", "01234 567890")
    );
}

#[test]
fn reverse_then_transform_with_jersey_hint() {
    let t = transformer(&["GB", "JE"]);
    let parsed = t
        .reverse_transform(Some(&FieldArray::new("JE", "01234567890")))
        .unwrap();
    assert_eq!(
        t.transform(parsed.as_ref()).unwrap(),
        FieldArray::new("GB", "01234 567890")
    );
}
