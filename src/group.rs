//! All vertices of one category, with a visibility flag and altitude extremes.

use crate::geo_utils::haversine_km;
use crate::vertex::{Category, GeodesicVertex};
use crate::Coordinate;

/// Insertion-ordered members of one [`Category`].
///
/// The highest/lowest altitude members are tracked as vertices are added.
/// Members with a NaN altitude never enter the cache, and on ties the member
/// added first is kept. There is no removal.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    category: Category,
    members: Vec<GeodesicVertex>,
    visible: bool,
    highest: Option<usize>,
    lowest: Option<usize>,
}

impl CategoryGroup {
    /// Create an empty, visible group.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            members: Vec::new(),
            visible: true,
            highest: None,
            lowest: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Append a vertex and update the altitude extremes.
    pub fn add(&mut self, vertex: GeodesicVertex) {
        let idx = self.members.len();
        if let Some(altitude) = vertex.known_altitude() {
            if self.highest().map_or(true, |h| altitude > h.altitude()) {
                self.highest = Some(idx);
            }
            if self.lowest().map_or(true, |l| altitude < l.altitude()) {
                self.lowest = Some(idx);
            }
        }
        self.members.push(vertex);
    }

    pub fn members(&self) -> &[GeodesicVertex] {
        &self.members
    }

    /// Member count, regardless of visibility.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the visibility flag. Nothing is recomputed here.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Member with the highest known altitude.
    pub fn highest(&self) -> Option<&GeodesicVertex> {
        self.highest.map(|i| &self.members[i])
    }

    /// Member with the lowest known altitude.
    pub fn lowest(&self) -> Option<&GeodesicVertex> {
        self.lowest.map(|i| &self.members[i])
    }

    /// Count members within `max_distance_km` (inclusive) of `(latitude, longitude)`.
    ///
    /// Members positioned exactly at the query point are not counted, so
    /// querying with a member's own coordinates gives its same-category
    /// proximity count.
    pub fn count_neighbours(&self, latitude: f64, longitude: f64, max_distance_km: f64) -> usize {
        let query = Coordinate::new(latitude, longitude);
        self.members
            .iter()
            .filter(|v| v.position() != query)
            .filter(|v| {
                let p = v.position();
                haversine_km(latitude, longitude, p.latitude, p.longitude) <= max_distance_km
            })
            .count()
    }

    /// Members that fail [`GeodesicVertex::is_valid`] against this group.
    pub fn invalid_members(&self) -> impl Iterator<Item = &GeodesicVertex> + '_ {
        self.members.iter().filter(move |v| !v.is_valid(self))
    }
}

// ============================================================================
// Tests
// ============================================================================
