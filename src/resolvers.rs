use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PlaceType;

/// Derives a country code from a hit's tag list.
///
/// Implementations must be pure and deterministic; the `Result` exists so a
/// faulty implementation is contained by the normalizer instead of tearing
/// down a whole result page.
pub trait CountryCodeResolver {
    fn country_code(&self, tags: &[String]) -> anyhow::Result<Option<String>>;
}

/// Derives a place classification from a hit's tag list.
pub trait TypeResolver {
    fn place_type(&self, tags: &[String]) -> anyhow::Result<Option<PlaceType>>;
}

static COUNTRY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^country/(.+)$").unwrap());

/// Default resolver: the backend encodes the code as a `country/<code>` tag.
/// When several such tags are present the last one wins.
pub struct TagCountryCodeResolver;

impl CountryCodeResolver for TagCountryCodeResolver {
    fn country_code(&self, tags: &[String]) -> anyhow::Result<Option<String>> {
        let mut code = None;
        for tag in tags {
            if let Some(captures) = COUNTRY_TAG.captures(tag) {
                code = Some(captures[1].to_string());
            }
        }
        Ok(code)
    }
}

/// Default resolver: the backend tags hits with plain type names.
/// Scans the known types in order and keeps the last one present.
pub struct TagTypeResolver;

impl TypeResolver for TagTypeResolver {
    fn place_type(&self, tags: &[String]) -> anyhow::Result<Option<PlaceType>> {
        let mut found = None;
        for candidate in PlaceType::ALL {
            if tags.iter().any(|tag| tag == candidate.tag()) {
                found = Some(candidate);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn country_code_from_tag() {
        let resolver = TagCountryCodeResolver;
        let code = resolver
            .country_code(&tags(&["address", "country/fr"]))
            .unwrap();
        assert_eq!(code.as_deref(), Some("fr"));
    }

    #[test]
    fn country_code_last_match_wins() {
        let resolver = TagCountryCodeResolver;
        let code = resolver
            .country_code(&tags(&["country/fr", "country/de"]))
            .unwrap();
        assert_eq!(code.as_deref(), Some("de"));
    }

    #[test]
    fn country_code_absent_without_match() {
        let resolver = TagCountryCodeResolver;
        assert_eq!(resolver.country_code(&tags(&["address"])).unwrap(), None);
        // A bare "country/" carries no code.
        assert_eq!(resolver.country_code(&tags(&["country/"])).unwrap(), None);
        assert_eq!(resolver.country_code(&[]).unwrap(), None);
    }

    #[test]
    fn place_type_from_tag() {
        let resolver = TagTypeResolver;
        let place_type = resolver
            .place_type(&tags(&["country/fr", "address"]))
            .unwrap();
        assert_eq!(place_type, Some(PlaceType::Address));
    }

    #[test]
    fn place_type_later_entry_wins() {
        let resolver = TagTypeResolver;
        let place_type = resolver
            .place_type(&tags(&["city", "airport"]))
            .unwrap();
        assert_eq!(place_type, Some(PlaceType::Airport));
    }

    #[test]
    fn place_type_absent_without_match() {
        let resolver = TagTypeResolver;
        assert_eq!(resolver.place_type(&tags(&["country/fr"])).unwrap(), None);
    }
}
