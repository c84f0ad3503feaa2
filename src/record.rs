//! Input records.
//!
//! A [`RawRecord`] holds the text of one `<vg>` entry as extracted from the
//! stored dataset. [`RawRecord::parse`] turns it into a [`VertexRecord`] of
//! primitives without ever failing: unreadable numbers become NaN and an
//! unreadable order becomes [`Category::Unparsed`].

use log::warn;

use crate::vertex::{Category, GeodesicVertex};

/// Textual fields of one survey point.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct RawRecord {
    #[cfg_attr(feature = "json", serde(default, deserialize_with = "json::text"))]
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, deserialize_with = "json::text"))]
    pub latitude: String,
    #[cfg_attr(feature = "json", serde(default, deserialize_with = "json::text"))]
    pub longitude: String,
    #[cfg_attr(feature = "json", serde(default, deserialize_with = "json::text"))]
    pub altitude: String,
    #[cfg_attr(feature = "json", serde(rename = "type", default, deserialize_with = "json::text"))]
    pub survey_type: String,
    #[cfg_attr(feature = "json", serde(default, deserialize_with = "json::text"))]
    pub order: String,
}

/// One survey point as primitive values, ready to become a [`GeodesicVertex`].
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// NaN if absent or unparseable
    pub altitude: f64,
    pub survey_type: String,
    pub category: Category,
}

impl RawRecord {
    /// Convert the text fields to primitives.
    ///
    /// # Example
    /// ```
    /// use rgn_vertices::{Category, RawRecord};
    ///
    /// let raw = RawRecord {
    ///     name: "Monsanto".into(),
    ///     latitude: "38.7223".into(),
    ///     longitude: "-9.1880".into(),
    ///     altitude: "".into(),
    ///     survey_type: "Pilar".into(),
    ///     order: "1".into(),
    /// };
    /// let record = raw.parse();
    /// assert_eq!(record.category, Category::Order(1));
    /// assert!(record.altitude.is_nan());
    /// ```
    pub fn parse(&self) -> VertexRecord {
        let latitude = parse_number(&self.name, "latitude", &self.latitude, true);
        let longitude = parse_number(&self.name, "longitude", &self.longitude, true);
        let altitude = parse_number(&self.name, "altitude", &self.altitude, false);

        let category = match self.order.trim().parse::<i64>() {
            Ok(order) => Category::Order(order),
            Err(_) => {
                warn!("Vertex {:?}: unreadable order {:?}", self.name, self.order);
                Category::Unparsed
            }
        };

        VertexRecord {
            name: self.name.trim().to_string(),
            latitude,
            longitude,
            altitude,
            survey_type: self.survey_type.trim().to_string(),
            category,
        }
    }
}

/// Parse a decimal field, falling back to NaN. An empty field is only
/// reported when the value is required.
fn parse_number(vertex: &str, field: &str, text: &str, required: bool) -> f64 {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            if required || !trimmed.is_empty() {
                warn!("Vertex {:?}: unreadable {} {:?}", vertex, field, text);
            }
            f64::NAN
        }
    }
}

impl From<VertexRecord> for GeodesicVertex {
    fn from(r: VertexRecord) -> Self {
        GeodesicVertex::new(r.name, r.latitude, r.longitude, r.altitude, r.survey_type, r.category)
    }
}

impl From<&RawRecord> for GeodesicVertex {
    fn from(raw: &RawRecord) -> Self {
        raw.parse().into()
    }
}

#[cfg(feature = "json")]
mod json {
    use serde::{Deserialize, Deserializer};

    /// Field value as written in the document: text, a bare number, or null.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    /// Accept text or numbers so hand-written JSON datasets load too.
    pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Field>::deserialize(deserializer)? {
            Some(Field::Text(s)) => s,
            Some(Field::Integer(n)) => n.to_string(),
            Some(Field::Float(x)) => x.to_string(),
            None => String::new(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: &str, lon: &str, alt: &str, order: &str) -> RawRecord {
        RawRecord {
            name: " Sintra ".to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
            altitude: alt.to_string(),
            survey_type: "Pilar".to_string(),
            order: order.to_string(),
        }
    }

    #[test]
    fn test_parse_well_formed() {
        let record = raw("38.7876", " -9.3906", "528.4", "2").parse();
        assert_eq!(record.name, "Sintra");
        assert_eq!(record.latitude, 38.7876);
        assert_eq!(record.longitude, -9.3906);
        assert_eq!(record.altitude, 528.4);
        assert_eq!(record.survey_type, "Pilar");
        assert_eq!(record.category, Category::Order(2));
    }

    #[test]
    fn test_parse_malformed_numbers_become_nan() {
        let record = raw("north", "", "n/a", "1").parse();
        assert!(record.latitude.is_nan());
        assert!(record.longitude.is_nan());
        assert!(record.altitude.is_nan());
        assert_eq!(record.category, Category::Order(1));
    }

    #[test]
    fn test_parse_unreadable_order() {
        assert_eq!(raw("38", "-9", "1", "first").parse().category, Category::Unparsed);
        assert_eq!(raw("38", "-9", "1", "").parse().category, Category::Unparsed);
        assert_eq!(raw("38", "-9", "1", "1.5").parse().category, Category::Unparsed);
        // Out-of-range orders keep their value
        assert_eq!(raw("38", "-9", "1", "7").parse().category, Category::Order(7));
    }

    #[test]
    fn test_record_into_vertex() {
        let vertex: GeodesicVertex = (&raw("38.7876", "-9.3906", "528.4", "3")).into();
        assert_eq!(vertex.name(), "Sintra");
        assert_eq!(vertex.category(), Category::Order(3));
        assert_eq!(vertex.band().max_km, Some(10.0));
        assert_eq!(vertex.icon_key(), Some("order3"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_mixed_field_types() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"name": "Sintra", "latitude": 38.7876, "longitude": "-9.3906",
                "type": "Pilar", "order": 2, "altitude": null}"#,
        )
        .unwrap();
        let record = raw.parse();
        assert_eq!(record.latitude, 38.7876);
        assert_eq!(record.longitude, -9.3906);
        assert!(record.altitude.is_nan());
        assert_eq!(record.category, Category::Order(2));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_missing_fields_default_empty() {
        let raw: RawRecord = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(raw.latitude, "");
        let record = raw.parse();
        assert!(record.latitude.is_nan());
        assert_eq!(record.category, Category::Unparsed);
    }
}
