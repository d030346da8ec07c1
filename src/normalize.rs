use serde_json::Value;
use tracing::error;

use crate::error::{NormalizeError, Result};
use crate::format::{DefaultValueFormatter, DisplayFields, ValueFormatter};
use crate::resolvers::{
    CountryCodeResolver, TagCountryCodeResolver, TagTypeResolver, TypeResolver,
};
use crate::types::{FallbackHit, FormattedHit, NormalizedHit, RawHit, SearchAnswer};

/// Turns raw backend hits into display-ready suggestion records.
///
/// Collaborators are injected at construction so tests can swap them without
/// touching any global state. Normalization itself is a stateless single pass;
/// a `HitNormalizer` can be shared freely across threads.
pub struct HitNormalizer {
    country_codes: Box<dyn CountryCodeResolver + Send + Sync>,
    types: Box<dyn TypeResolver + Send + Sync>,
    formatter: Box<dyn ValueFormatter + Send + Sync>,
}

impl HitNormalizer {
    pub fn new(
        country_codes: Box<dyn CountryCodeResolver + Send + Sync>,
        types: Box<dyn TypeResolver + Send + Sync>,
        formatter: Box<dyn ValueFormatter + Send + Sync>,
    ) -> Self {
        Self {
            country_codes,
            types,
            formatter,
        }
    }

    /// Normalizer wired with the tag-driven resolvers and the default formatter.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(TagCountryCodeResolver),
            Box::new(TagTypeResolver),
            Box::new(DefaultValueFormatter),
        )
    }

    /// Normalize one hit.
    ///
    /// Failures never escape: a hit that cannot be normalized is reported
    /// through the log and comes back as the `Unparsed` fallback, so one bad
    /// record among many cannot take down the result list being rendered.
    pub fn normalize(
        &self,
        hit: &RawHit,
        hit_index: usize,
        query: &str,
        raw_answer: &Value,
    ) -> FormattedHit {
        match self.try_normalize(hit, hit_index, query, raw_answer) {
            Ok(normalized) => FormattedHit::Parsed(normalized),
            Err(err) => {
                error!(hit_index, %err, "could not normalize hit");
                FormattedHit::Unparsed(FallbackHit::default())
            }
        }
    }

    /// Normalize every hit in a backend answer, preserving backend order.
    /// Hits that fail to decode or normalize become fallback records at their
    /// index; the rest of the batch is unaffected.
    pub fn normalize_answer(&self, answer: &SearchAnswer) -> Vec<FormattedHit> {
        answer
            .raw_hits()
            .iter()
            .enumerate()
            .map(|(hit_index, raw)| {
                match serde_json::from_value::<RawHit>(raw.clone()) {
                    Ok(hit) => self.normalize(&hit, hit_index, &answer.query, &answer.body),
                    Err(err) => {
                        error!(hit_index, %err, "could not decode hit");
                        FormattedHit::Unparsed(FallbackHit::default())
                    }
                }
            })
            .collect()
    }

    fn try_normalize(
        &self,
        hit: &RawHit,
        hit_index: usize,
        query: &str,
        raw_answer: &Value,
    ) -> Result<NormalizedHit> {
        let name = hit
            .locale_names
            .first()
            .ok_or(NormalizeError::MissingField("locale_names"))?
            .clone();

        // Administrative and city are suppressed when they would just repeat
        // the display name. They are deliberately never checked against each
        // other, only against the name.
        let administrative = first_unless(&hit.administrative, &name);
        let city = first_unless(&hit.city, &name);
        let postcode = hit
            .postcode
            .as_deref()
            .and_then(|values| values.first())
            .cloned();

        let country_code = self
            .country_codes
            .country_code(&hit.tags)
            .map_err(NormalizeError::CountryCode)?;
        let place_type = self
            .types
            .place_type(&hit.tags)
            .map_err(NormalizeError::PlaceType)?;

        let fields = DisplayFields {
            name,
            administrative,
            city,
            country: hit.country.clone(),
            country_code,
            place_type,
            latlng: hit.geoloc.clone(),
            postcode,
        };
        let value = self
            .formatter
            .format_value(&fields)
            .map_err(NormalizeError::Format)?;

        Ok(NormalizedHit {
            name: fields.name,
            administrative: fields.administrative,
            city: fields.city,
            country: fields.country,
            country_code: fields.country_code,
            place_type: fields.place_type,
            latlng: fields.latlng,
            postcode: fields.postcode,
            value,
            hit: hit.clone(),
            query: query.to_string(),
            raw_answer: raw_answer.clone(),
            hit_index,
        })
    }
}

impl Default for HitNormalizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Head of an optional name list, suppressed when it equals the display name.
fn first_unless(field: &Option<Vec<String>>, name: &str) -> Option<String> {
    field
        .as_deref()
        .and_then(|values| values.first())
        .filter(|value| value.as_str() != name)
        .cloned()
}
