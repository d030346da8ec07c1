use crate::types::{LatLng, PlaceType};

/// The derived fields handed to a value formatter, and nothing else.
/// The raw hit never crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    pub name: String,
    pub administrative: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub place_type: Option<PlaceType>,
    pub latlng: Option<LatLng>,
    pub postcode: Option<String>,
}

/// Renders the derived fields into the single suggestion string shown in the UI.
/// Injected per normalizer so different UIs can render the same fields differently.
pub trait ValueFormatter {
    fn format_value(&self, fields: &DisplayFields) -> anyhow::Result<String>;
}

/// Default rendering: name, then city, administrative region and country,
/// comma separated, skipping absent parts and echoes of the name.
pub struct DefaultValueFormatter;

impl ValueFormatter for DefaultValueFormatter {
    fn format_value(&self, fields: &DisplayFields) -> anyhow::Result<String> {
        let mut parts = vec![fields.name.as_str()];
        for part in [&fields.city, &fields.administrative, &fields.country]
            .into_iter()
            .flatten()
        {
            if part != &fields.name {
                parts.push(part.as_str());
            }
        }
        Ok(parts.join(", "))
    }
}
