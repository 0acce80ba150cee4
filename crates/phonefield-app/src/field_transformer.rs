use phonefield_core::country::{CountryChoices, CountryCode};
use phonefield_core::field::FieldArray;
use phonefield_ports::error::TransformationFailed;
use phonefield_ports::inbound::DataTransformer;
use phonefield_ports::outbound::PhoneNumberService;

/// Binds a phone number to a country selector plus a number input.
pub struct PhoneNumberFieldTransformer<S>
where
    S: PhoneNumberService,
{
    service: S,
    choices: CountryChoices,
}

impl<S> PhoneNumberFieldTransformer<S>
where
    S: PhoneNumberService,
{
    pub fn new(service: S, choices: CountryChoices) -> Self {
        Self { service, choices }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Finds the country a number is shown under.
    ///
    /// The number's own region wins when allowed; otherwise the first allowed
    /// country the number validates for, with the digits read under that
    /// country's plan.
    fn resolve(
        &self,
        number: &S::Number,
    ) -> Result<(CountryCode, S::Number), TransformationFailed> {
        let region = self.service.region_of(number);
        if let Some(region) = region.as_ref().filter(|r| self.choices.contains(r)) {
            return Ok((region.clone(), number.clone()));
        }

        for candidate in self.choices.iter() {
            if !self.service.is_valid_for_region(number, candidate) {
                continue;
            }
            tracing::debug!(
                region = region.as_ref().map(CountryCode::as_str),
                candidate = candidate.as_str(),
                "number accepted under fallback country"
            );
            let reinterpreted = self.service.reinterpret(number, candidate)?;
            return Ok((candidate.clone(), reinterpreted));
        }

        Err(TransformationFailed::new(match region {
            Some(region) => format!("country {region} is not one of [{}]", self.choices),
            None => "number does not belong to any country".to_string(),
        }))
    }
}

impl<S> DataTransformer for PhoneNumberFieldTransformer<S>
where
    S: PhoneNumberService,
{
    type Model = S::Number;
    type View = FieldArray;

    fn transform(&self, value: Option<&S::Number>) -> Result<FieldArray, TransformationFailed> {
        let Some(number) = value else {
            return Ok(FieldArray::empty());
        };

        let (country, number) = self.resolve(number)?;
        Ok(FieldArray::new(
            country.as_str(),
            self.service.format_national(&number),
        ))
    }

    fn reverse_transform(
        &self,
        value: Option<&FieldArray>,
    ) -> Result<Option<S::Number>, TransformationFailed> {
        let Some(fields) = value else {
            return Ok(None);
        };
        if fields.has_no_number() {
            return Ok(None);
        }

        // An unknown selector value parses like no selection at all.
        let hint = CountryCode::new(&fields.country).ok();
        let number = self
            .service
            .parse(fields.number.trim(), hint.as_ref())
            .map_err(|e| {
                tracing::debug!(
                    input_len = fields.number.len(),
                    hint = hint.as_ref().map(CountryCode::as_str),
                    "phone number rejected"
                );
                TransformationFailed::from(e)
            })?;

        match self.service.region_of(&number) {
            Some(region) if self.choices.contains(&region) => Ok(Some(number)),
            Some(region) => Err(TransformationFailed::new(format!(
                "country {region} is not one of [{}]",
                self.choices
            ))),
            None => Err(TransformationFailed::new(
                "number does not belong to any country",
            )),
        }
    }
}
