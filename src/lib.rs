pub mod error;
pub mod format;
pub mod logging;
pub mod normalize;
pub mod resolvers;
pub mod types;

pub use error::{NormalizeError, Result};
pub use format::{DefaultValueFormatter, DisplayFields, ValueFormatter};
pub use normalize::HitNormalizer;
pub use resolvers::{CountryCodeResolver, TagCountryCodeResolver, TagTypeResolver, TypeResolver};
pub use types::{
    FallbackHit, FormattedHit, LatLng, NormalizedHit, PlaceType, RawHit, SearchAnswer,
    FALLBACK_VALUE,
};
