//! Loosely typed form payloads in and out of the phone field transformer.
//!
//! Form frameworks hand over whatever the request or the bound object holds,
//! so both directions start from a `serde_json::Value` and reject shapes the
//! transformer cannot work with.

use serde_json::{json, Value};

use phonefield_app::PhoneNumberFieldTransformer;
use phonefield_core::field::FieldArray;
use phonefield_ports::error::TransformationFailed;
use phonefield_ports::inbound::DataTransformer;
use phonefield_ports::outbound::PhoneNumberService;

pub struct JsonPhoneField<S>
where
    S: PhoneNumberService,
{
    transformer: PhoneNumberFieldTransformer<S>,
}

impl<S> JsonPhoneField<S>
where
    S: PhoneNumberService,
{
    pub fn new(transformer: PhoneNumberFieldTransformer<S>) -> Self {
        Self { transformer }
    }

    /// Model value (`null` or an international number string) to a field pair.
    pub fn transform(&self, value: &Value) -> Result<Value, TransformationFailed> {
        let number = self.decode_model(value)?;
        let fields = self.transformer.transform(number.as_ref())?;
        Ok(encode_view(&fields))
    }

    /// Submitted field pair to the model value: an E.164 string or `null`.
    pub fn reverse_transform(&self, value: &Value) -> Result<Value, TransformationFailed> {
        let fields = decode_view(value)?;
        let number = self.transformer.reverse_transform(fields.as_ref())?;
        Ok(match number {
            Some(number) => Value::String(self.transformer.service().format_e164(&number)),
            None => Value::Null,
        })
    }

    fn decode_model(&self, value: &Value) -> Result<Option<S::Number>, TransformationFailed> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => self
                .transformer
                .service()
                .parse(text, None)
                .map(Some)
                .map_err(|e| {
                    tracing::debug!(error = %e, "model value is not a phone number");
                    TransformationFailed::new("expected a phone number")
                }),
            other => {
                tracing::debug!(kind = json_kind(other), "model value has wrong shape");
                Err(TransformationFailed::new("expected a phone number"))
            }
        }
    }
}

/// Reads a submitted `{country, number}` object. Empty submissions are `None`.
pub fn decode_view(value: &Value) -> Result<Option<FieldArray>, TransformationFailed> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(_) => serde_json::from_value::<FieldArray>(value.clone())
            .map(Some)
            .map_err(|e| {
                tracing::debug!(error = %e, "submitted object is not a field pair");
                TransformationFailed::new("expected a country/number pair")
            }),
        other => {
            tracing::debug!(kind = json_kind(other), "submitted value has wrong shape");
            Err(TransformationFailed::new("expected a country/number pair"))
        }
    }
}

pub fn encode_view(fields: &FieldArray) -> Value {
    json!({
        "country": fields.country,
        "number": fields.number,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
