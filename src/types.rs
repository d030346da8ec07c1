use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display value shown in place of a hit that could not be normalized.
pub const FALLBACK_VALUE: &str = "Could not parse object";

/// Coordinates exactly as the backend ships them: strings, no range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: String,
    pub lng: String,
}

/// Place classifications the backend encodes in a hit's tag list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceType {
    Country,
    City,
    Address,
    BusStop,
    TrainStation,
    Townhall,
    Airport,
}

impl PlaceType {
    /// Resolver scan order; later entries win when a hit carries several.
    pub const ALL: [PlaceType; 7] = [
        PlaceType::Country,
        PlaceType::City,
        PlaceType::Address,
        PlaceType::BusStop,
        PlaceType::TrainStation,
        PlaceType::Townhall,
        PlaceType::Airport,
    ];

    /// The tag spelling used by the backend.
    pub fn tag(&self) -> &'static str {
        match self {
            PlaceType::Country => "country",
            PlaceType::City => "city",
            PlaceType::Address => "address",
            PlaceType::BusStop => "busStop",
            PlaceType::TrainStation => "trainStation",
            PlaceType::Townhall => "townhall",
            PlaceType::Airport => "airport",
        }
    }
}

/// One candidate place record as returned by the search backend.
///
/// Hits are heterogeneous; every field except `locale_names` may be missing.
/// `locale_names` decodes leniently (defaulting to empty) so that a garbage
/// hit still reaches the normalizer, which owns the failure policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    /// Ordered display names; the first entry is the canonical one.
    #[serde(default)]
    pub locale_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<Vec<String>>,
    #[serde(rename = "_geoloc", default, skip_serializing_if = "Option::is_none")]
    pub geoloc: Option<LatLng>,
    #[serde(rename = "_tags", default)]
    pub tags: Vec<String>,
}

/// A raw backend response: the query that produced it plus the untouched body.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchAnswer {
    pub query: String,
    pub body: Value,
}

impl SearchAnswer {
    pub fn new(query: impl Into<String>, body: Value) -> Self {
        Self {
            query: query.into(),
            body,
        }
    }

    /// The hit objects in the body, in backend order.
    /// A missing or non-array `hits` key reads as no hits.
    pub fn raw_hits(&self) -> &[Value] {
        self.body
            .get("hits")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A display-ready suggestion assembled from one raw hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedHit {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub place_type: Option<PlaceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latlng: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// Rendered display string produced by the injected formatter.
    pub value: String,
    /// The input hit, passed through untouched for caller bookkeeping.
    pub hit: RawHit,
    pub query: String,
    pub raw_answer: Value,
    pub hit_index: usize,
}

/// The minimal record returned when a hit cannot be normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackHit {
    pub value: String,
}

impl Default for FallbackHit {
    fn default() -> Self {
        Self {
            value: FALLBACK_VALUE.to_string(),
        }
    }
}

/// Outcome of normalizing one hit.
///
/// Callers match on the variant instead of probing field presence; both
/// variants carry a display value so a result list always renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormattedHit {
    Parsed(NormalizedHit),
    Unparsed(FallbackHit),
}

impl FormattedHit {
    /// The display string, present in both variants.
    pub fn value(&self) -> &str {
        match self {
            FormattedHit::Parsed(hit) => &hit.value,
            FormattedHit::Unparsed(fallback) => &fallback.value,
        }
    }

    pub fn as_parsed(&self) -> Option<&NormalizedHit> {
        match self {
            FormattedHit::Parsed(hit) => Some(hit),
            FormattedHit::Unparsed(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, FormattedHit::Parsed(_))
    }
}
