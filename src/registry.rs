//! # Registry
//!
//! Owns every [`CategoryGroup`] of a loaded dataset and answers the queries
//! the map page needs: statistics over the visible groups, invalid vertices,
//! and neighbour counts.
//!
//! The registry is built once per load with [`Registry::populate`]; after that
//! the only mutation is [`Registry::set_visibility`]. It has a single owner and
//! no interior mutability, so every query sees a consistent model.
//!
//! ## Visibility
//!
//! | Operation | Hidden groups |
//! |-----------|---------------|
//! | [`Registry::calculate_stats`] | counted as 0, excluded from extremes |
//! | [`Registry::find_invalid`] | included |
//! | [`Registry::count_neighbours`] | included |

use std::collections::{BTreeMap, HashMap};

use log::{debug, info, warn};

use crate::geo_utils::compute_bounds;
use crate::group::CategoryGroup;
use crate::vertex::{Category, GeodesicVertex};
use crate::{Bounds, Coordinate};

/// Statistics over the currently visible groups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct VertexStats<'a> {
    /// Number of vertices in visible groups
    pub count_all: usize,
    /// Per-category counts in category order; hidden categories map to 0
    pub count_per_category: BTreeMap<Category, usize>,
    /// Visible vertex with the highest known altitude
    pub highest: Option<&'a GeodesicVertex>,
    /// Visible vertex with the lowest known altitude
    pub lowest: Option<&'a GeodesicVertex>,
}

/// All category groups of one loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Groups in order of first occurrence
    groups: Vec<CategoryGroup>,
    index: HashMap<Category, usize>,
    /// (group slot, member slot) of every vertex, in load order
    load_order: Vec<(usize, usize)>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group vertices by category, creating groups on first occurrence.
    ///
    /// Accepts anything convertible to a vertex ([`crate::VertexRecord`]s
    /// included). There is no deduplication: populating twice with the same
    /// data duplicates every member.
    pub fn populate<I, V>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<GeodesicVertex>,
    {
        let before = self.load_order.len();
        for vertex in vertices {
            self.insert(vertex.into());
        }
        info!(
            "Populated {} vertices into {} category groups",
            self.load_order.len() - before,
            self.groups.len()
        );
    }

    fn insert(&mut self, vertex: GeodesicVertex) {
        let category = vertex.category();
        let slot = match self.index.get(&category) {
            Some(&slot) => slot,
            None => {
                debug!("Creating group for category {}", category);
                self.groups.push(CategoryGroup::new(category));
                self.index.insert(category, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[slot];
        self.load_order.push((slot, group.count()));
        group.add(vertex);
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.load_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.load_order.is_empty()
    }

    /// Groups in order of first occurrence (not numeric order).
    pub fn groups(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.index.get(&category).map(|&slot| &self.groups[slot])
    }

    /// Categories in order of first occurrence.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|g| g.category())
    }

    /// Every vertex in load order, with the group that owns it.
    pub fn entries(&self) -> impl Iterator<Item = (&GeodesicVertex, &CategoryGroup)> {
        self.load_order.iter().map(move |&(slot, member)| {
            let group = &self.groups[slot];
            (&group.members()[member], group)
        })
    }

    /// Every vertex in load order.
    pub fn vertices(&self) -> impl Iterator<Item = &GeodesicVertex> {
        self.entries().map(|(vertex, _)| vertex)
    }

    /// Vertices of visible groups, in load order.
    pub fn visible_vertices(&self) -> impl Iterator<Item = &GeodesicVertex> {
        self.entries()
            .filter(|(_, group)| group.is_visible())
            .map(|(vertex, _)| vertex)
    }

    /// Visibility of a category, `None` if no such group exists.
    pub fn is_visible(&self, category: Category) -> Option<bool> {
        self.group(category).map(|g| g.is_visible())
    }

    /// Show or hide a category.
    ///
    /// Unknown categories are ignored; the return value tells whether the
    /// category named an existing group.
    pub fn set_visibility(&mut self, category: Category, visible: bool) -> bool {
        match self.index.get(&category) {
            Some(&slot) => {
                debug!("Category {} visible: {}", category, visible);
                self.groups[slot].set_visible(visible);
                true
            }
            None => {
                warn!("Ignoring visibility change for unknown category {}", category);
                false
            }
        }
    }

    /// Counts and altitude extremes over the visible groups.
    ///
    /// Hidden categories still appear in `count_per_category`, with a count of
    /// 0. When two groups share the extreme altitude, the group that occurred
    /// first in the dataset wins.
    pub fn calculate_stats(&self) -> VertexStats<'_> {
        let mut stats = VertexStats {
            count_all: 0,
            count_per_category: BTreeMap::new(),
            highest: None,
            lowest: None,
        };

        for group in self.groups.iter().filter(|g| !g.is_empty()) {
            if !group.is_visible() {
                stats.count_per_category.insert(group.category(), 0);
                continue;
            }

            stats.count_all += group.count();
            stats.count_per_category.insert(group.category(), group.count());

            if let Some(h) = group.highest() {
                if stats.highest.map_or(true, |best| h.altitude() > best.altitude()) {
                    stats.highest = Some(h);
                }
            }
            if let Some(l) = group.lowest() {
                if stats.lowest.map_or(true, |best| l.altitude() < best.altitude()) {
                    stats.lowest = Some(l);
                }
            }
        }

        debug!(
            "Stats: {} visible vertices across {} categories",
            stats.count_all,
            stats.count_per_category.len()
        );
        stats
    }

    /// Every vertex without a same-category neighbour in its band, in load order.
    ///
    /// Scans the whole dataset, hidden groups included.
    pub fn find_invalid(&self) -> Vec<&GeodesicVertex> {
        let invalid: Vec<&GeodesicVertex> = self
            .entries()
            .filter(|(vertex, group)| !vertex.is_valid(group))
            .map(|(vertex, _)| vertex)
            .collect();
        debug!("Found {} invalid vertices out of {}", invalid.len(), self.len());
        invalid
    }

    /// Count vertices of any category within `max_distance_km` of a point.
    ///
    /// Hidden groups are included. Vertices exactly at the query point are not
    /// counted.
    pub fn count_neighbours(&self, latitude: f64, longitude: f64, max_distance_km: f64) -> usize {
        self.groups
            .iter()
            .map(|g| g.count_neighbours(latitude, longitude, max_distance_km))
            .sum()
    }

    /// Bounding box of all vertices with finite coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        let positions: Vec<Coordinate> = self.vertices().map(|v| v.position()).collect();
        compute_bounds(&positions)
    }
}

impl<V: Into<GeodesicVertex>> FromIterator<V> for Registry {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.populate(iter);
        registry
    }
}

// ============================================================================
// Tests
// ============================================================================
