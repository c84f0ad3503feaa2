//! Geodesic vertex model.
//!
//! A [`GeodesicVertex`] is a [`PointOfInterest`] with an altitude, a survey
//! type and a precision [`Category`]. The category alone decides the
//! [`DistanceBand`] a vertex must find a same-category neighbour in to be
//! considered valid:
//!
//! | Category | Band (km) |
//! |----------|-----------|
//! | 1 | 30 ..= 60 |
//! | 2 | 20 ..= 30 |
//! | 3 | 5 ..= 10 |
//! | 4 | unconstrained |
//! | anything else | unconstrained |

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCategoryError;
use crate::geo_utils::distance_between;
use crate::group::CategoryGroup;
use crate::Coordinate;

// ============================================================================
// Distance Bands
// ============================================================================

/// Inclusive distance range in kilometers. `None` on a side means no limit there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DistanceBand {
    pub min_km: Option<f64>,
    pub max_km: Option<f64>,
}

impl DistanceBand {
    /// A band with no limit on either side.
    pub const UNCONSTRAINED: DistanceBand = DistanceBand { min_km: None, max_km: None };

    pub const fn new(min_km: f64, max_km: f64) -> Self {
        Self { min_km: Some(min_km), max_km: Some(max_km) }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min_km.is_none() && self.max_km.is_none()
    }

    /// Check `min_km <= distance_km <= max_km`.
    ///
    /// A NaN distance never satisfies a bound that is set.
    pub fn contains(&self, distance_km: f64) -> bool {
        self.min_km.map_or(true, |min| distance_km >= min)
            && self.max_km.map_or(true, |max| distance_km <= max)
    }
}

/// Validity bands of the four standard categories.
const STANDARD_BANDS: [(i64, DistanceBand); 4] = [
    (1, DistanceBand::new(30.0, 60.0)),
    (2, DistanceBand::new(20.0, 30.0)),
    (3, DistanceBand::new(5.0, 10.0)),
    (4, DistanceBand::UNCONSTRAINED),
];

// ============================================================================
// Category
// ============================================================================

/// Survey precision category ("order") of a vertex.
///
/// Orders compare numerically; `Unparsed` (the order field could not be read
/// as an integer) sorts after every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Order(i64),
    Unparsed,
}

impl Category {
    /// Whether this is one of the four standard orders.
    pub fn is_standard(&self) -> bool {
        matches!(self, Category::Order(1..=4))
    }

    /// Validity band for this category.
    pub fn band(&self) -> DistanceBand {
        match self {
            Category::Order(n) => STANDARD_BANDS
                .iter()
                .find(|(order, _)| order == n)
                .map(|(_, band)| *band)
                .unwrap_or(DistanceBand::UNCONSTRAINED),
            Category::Unparsed => DistanceBand::UNCONSTRAINED,
        }
    }

    /// Marker icon key (`"order1"` .. `"order4"`). Non-standard categories have no icon.
    pub fn icon_key(&self) -> Option<String> {
        match self {
            Category::Order(n) if self.is_standard() => Some(format!("order{n}")),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Order(n) => write!(f, "{n}"),
            Category::Unparsed => f.write_str("unparsed"),
        }
    }
}

/// Accepts `"3"`, `"order3"` (icon and checkbox identifiers) and `"unparsed"`.
impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unparsed") {
            return Ok(Category::Unparsed);
        }
        let digits = trimmed.strip_prefix("order").unwrap_or(trimmed);
        digits
            .parse::<i64>()
            .map(Category::Order)
            .map_err(|_| ParseCategoryError(s.to_string()))
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Points
// ============================================================================

/// A named, positioned map feature.
///
/// Immutable after construction. Any marker the rendering layer creates for
/// it is kept on the rendering side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PointOfInterest {
    name: String,
    position: Coordinate,
    icon_key: Option<String>,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, position: Coordinate, icon_key: Option<String>) -> Self {
        Self { name: name.into(), position, icon_key }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn icon_key(&self) -> Option<&str> {
        self.icon_key.as_deref()
    }
}

/// A surveyed reference point of the geodesic network.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct GeodesicVertex {
    #[cfg_attr(feature = "json", serde(flatten))]
    poi: PointOfInterest,
    /// Meters; NaN when unknown
    altitude: f64,
    survey_type: String,
    category: Category,
    band: DistanceBand,
}

impl GeodesicVertex {
    /// Create a vertex. The validity band is fixed here from `category`.
    ///
    /// # Example
    /// ```
    /// use rgn_vertices::{Category, GeodesicVertex};
    ///
    /// let v = GeodesicVertex::new("Serra da Estrela", 40.3217, -7.6114, 1993.0, "Pilar", Category::Order(1));
    /// assert_eq!(v.band().min_km, Some(30.0));
    /// assert_eq!(v.icon_key(), Some("order1"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        altitude: f64,
        survey_type: impl Into<String>,
        category: Category,
    ) -> Self {
        let poi = PointOfInterest::new(
            name,
            Coordinate::new(latitude, longitude),
            category.icon_key(),
        );
        Self {
            poi,
            altitude,
            survey_type: survey_type.into(),
            category,
            band: category.band(),
        }
    }

    pub fn poi(&self) -> &PointOfInterest {
        &self.poi
    }

    pub fn name(&self) -> &str {
        self.poi.name()
    }

    pub fn position(&self) -> Coordinate {
        self.poi.position()
    }

    pub fn icon_key(&self) -> Option<&str> {
        self.poi.icon_key()
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Altitude, or `None` when unknown.
    pub fn known_altitude(&self) -> Option<f64> {
        (!self.altitude.is_nan()).then_some(self.altitude)
    }

    pub fn survey_type(&self) -> &str {
        &self.survey_type
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn band(&self) -> DistanceBand {
        self.band
    }

    /// Great-circle distance to another vertex, in kilometers.
    pub fn distance_to(&self, other: &GeodesicVertex) -> f64 {
        distance_between(&self.position(), &other.position())
    }

    /// Check whether some other member of `group` lies inside this vertex's band.
    ///
    /// Unconstrained vertices are always valid. "Other" means a different
    /// position: members sharing this vertex's exact coordinates are skipped,
    /// including distinct vertices placed on the same spot. A vertex with a
    /// NaN coordinate is never valid unless unconstrained.
    pub fn is_valid(&self, group: &CategoryGroup) -> bool {
        if self.band.is_unconstrained() {
            return true;
        }
        let here = self.position();
        group
            .members()
            .iter()
            .filter(|other| other.position() != here)
            .any(|other| self.band.contains(distance_between(&here, &other.position())))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_utils::EARTH_RADIUS_KM;

    /// Latitude `km` kilometers north of `lat` along a meridian.
    fn north_of(lat: f64, km: f64) -> f64 {
        lat + (km / EARTH_RADIUS_KM).to_degrees()
    }

    fn vertex(name: &str, lat: f64, lon: f64, category: Category) -> GeodesicVertex {
        GeodesicVertex::new(name, lat, lon, 100.0, "Pilar", category)
    }

    fn group_of(category: Category, members: &[GeodesicVertex]) -> CategoryGroup {
        let mut group = CategoryGroup::new(category);
        for v in members {
            group.add(v.clone());
        }
        group
    }

    #[test]
    fn test_band_table() {
        assert_eq!(Category::Order(1).band(), DistanceBand::new(30.0, 60.0));
        assert_eq!(Category::Order(2).band(), DistanceBand::new(20.0, 30.0));
        assert_eq!(Category::Order(3).band(), DistanceBand::new(5.0, 10.0));
        assert!(Category::Order(4).band().is_unconstrained());
        assert!(Category::Order(7).band().is_unconstrained());
        assert!(Category::Order(0).band().is_unconstrained());
        assert!(Category::Unparsed.band().is_unconstrained());
    }

    #[test]
    fn test_band_boundaries_inclusive() {
        let band = Category::Order(1).band();
        assert!(band.contains(30.0));
        assert!(band.contains(60.0));
        assert!(band.contains(45.0));
        assert!(!band.contains(29.999));
        assert!(!band.contains(60.001));
        assert!(!band.contains(f64::NAN));
    }

    #[test]
    fn test_band_single_sided() {
        let at_least = DistanceBand { min_km: Some(5.0), max_km: None };
        assert!(at_least.contains(5.0));
        assert!(at_least.contains(10_000.0));
        assert!(!at_least.contains(4.9));
        assert!(!at_least.contains(f64::NAN));

        let at_most = DistanceBand { min_km: None, max_km: Some(5.0) };
        assert!(at_most.contains(0.0));
        assert!(!at_most.contains(5.1));
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("3".parse::<Category>(), Ok(Category::Order(3)));
        assert_eq!("order2".parse::<Category>(), Ok(Category::Order(2)));
        assert_eq!(" 11 ".parse::<Category>(), Ok(Category::Order(11)));
        assert_eq!("unparsed".parse::<Category>(), Ok(Category::Unparsed));
        assert!("VG1".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());

        assert_eq!(Category::Order(4).to_string(), "4");
        assert_eq!(Category::Unparsed.to_string(), "unparsed");
    }

    #[test]
    fn test_category_ordering() {
        let mut cats = vec![Category::Unparsed, Category::Order(10), Category::Order(2), Category::Order(1)];
        cats.sort();
        assert_eq!(
            cats,
            vec![Category::Order(1), Category::Order(2), Category::Order(10), Category::Unparsed]
        );
    }

    #[test]
    fn test_icon_keys() {
        assert_eq!(Category::Order(1).icon_key().as_deref(), Some("order1"));
        assert_eq!(Category::Order(4).icon_key().as_deref(), Some("order4"));
        assert_eq!(Category::Order(5).icon_key(), None);
        assert_eq!(Category::Unparsed.icon_key(), None);

        let v = vertex("Unknown", 38.0, -9.0, Category::Order(9));
        assert_eq!(v.icon_key(), None);
    }

    #[test]
    fn test_known_altitude() {
        let v = GeodesicVertex::new("A", 38.0, -9.0, f64::NAN, "Pilar", Category::Order(1));
        assert_eq!(v.known_altitude(), None);
        let v = GeodesicVertex::new("B", 38.0, -9.0, 0.0, "Pilar", Category::Order(1));
        assert_eq!(v.known_altitude(), Some(0.0));
    }

    #[test]
    fn test_order1_valid_with_neighbour_in_band() {
        let a = vertex("A", 38.5, -9.0, Category::Order(1));
        let b = vertex("B", north_of(38.5, 45.0), -9.0, Category::Order(1));
        let group = group_of(Category::Order(1), &[a.clone(), b.clone()]);

        assert!(a.is_valid(&group));
        assert!(b.is_valid(&group));
    }

    #[test]
    fn test_order1_invalid_outside_band() {
        for km in [25.0, 65.0] {
            let a = vertex("A", 38.5, -9.0, Category::Order(1));
            let b = vertex("B", north_of(38.5, km), -9.0, Category::Order(1));
            let group = group_of(Category::Order(1), &[a.clone(), b]);
            assert!(!a.is_valid(&group), "{km} km should be outside the band");
        }
    }

    #[test]
    fn test_single_member_constrained_is_invalid() {
        let a = vertex("A", 38.5, -9.0, Category::Order(3));
        let group = group_of(Category::Order(3), &[a.clone()]);
        assert!(!a.is_valid(&group));
    }

    #[test]
    fn test_order4_always_valid() {
        let a = vertex("A", 38.5, -9.0, Category::Order(4));
        assert!(a.is_valid(&CategoryGroup::new(Category::Order(4))));
        assert!(a.is_valid(&group_of(Category::Order(4), &[a.clone()])));
    }

    #[test]
    fn test_unrecognized_category_always_valid() {
        let a = vertex("A", 38.5, -9.0, Category::Order(42));
        assert!(a.is_valid(&group_of(Category::Order(42), &[a.clone()])));

        let b = vertex("B", f64::NAN, -9.0, Category::Unparsed);
        assert!(b.is_valid(&group_of(Category::Unparsed, &[b.clone()])));
    }

    #[test]
    fn test_nan_coordinate_degrades_to_invalid() {
        let a = vertex("A", f64::NAN, -9.0, Category::Order(2));
        let b = vertex("B", 38.5, -9.0, Category::Order(2));
        let c = vertex("C", north_of(38.5, 25.0), -9.0, Category::Order(2));
        let group = group_of(Category::Order(2), &[a.clone(), b.clone(), c.clone()]);

        assert!(!a.is_valid(&group));
        // The NaN member never qualifies as someone else's neighbour either
        assert!(b.is_valid(&group));
        assert!(c.is_valid(&group));
    }

    #[test]
    fn test_colocated_vertices_exclude_each_other() {
        let a = vertex("A", 38.5, -9.0, Category::Order(3));
        let twin = vertex("A'", 38.5, -9.0, Category::Order(3));
        let group = group_of(Category::Order(3), &[a.clone(), twin]);
        assert!(!a.is_valid(&group));
    }

    #[test]
    fn test_distance_to() {
        let a = vertex("A", 38.5, -9.0, Category::Order(1));
        let b = vertex("B", north_of(38.5, 45.0), -9.0, Category::Order(1));
        assert!((a.distance_to(&b) - 45.0).abs() < 1e-6);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
