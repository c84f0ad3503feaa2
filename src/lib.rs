//! # RGN Vertices
//!
//! Domain model and query engine for the national geodesic network (RGN) map.
//!
//! This library provides:
//! - A geodesic vertex model with per-category validity distance bands
//! - Per-category grouping with visibility flags and cached altitude extremes
//! - Haversine neighbour counts and validity detection
//! - Visibility-aware statistics for the display layer
//!
//! Rendering (tiles, markers, popups) and HTML assembly are left to the host
//! application; everything here is plain data.
//!
//! ## Features
//!
//! - **`json`** (default) - Load datasets from JSON and serialize results
//!
//! ## Quick Start
//!
//! ```rust
//! use rgn_vertices::{Category, GeodesicVertex, Registry};
//!
//! let vertices = vec![
//!     GeodesicVertex::new("Monsanto", 38.7223, -9.1880, 227.0, "Pilar", Category::Order(1)),
//!     GeodesicVertex::new("Montejunto", 39.1740, -9.0577, 666.0, "Pilar", Category::Order(1)),
//!     GeodesicVertex::new("Cabo Raso", 38.7100, -9.4860, 36.0, "Marco", Category::Order(4)),
//! ];
//!
//! let mut registry = Registry::new();
//! registry.populate(vertices);
//!
//! let stats = registry.calculate_stats();
//! assert_eq!(stats.count_all, 3);
//! assert_eq!(stats.highest.map(|v| v.name()), Some("Montejunto"));
//!
//! registry.set_visibility(Category::Order(1), false);
//! assert_eq!(registry.calculate_stats().count_all, 1);
//! ```

use geo::Point;

pub mod config;
pub mod error;
pub mod geo_utils;
pub mod group;
pub mod record;
pub mod registry;
pub mod vertex;

#[cfg(feature = "json")]
pub mod loader;

pub use config::MapConfig;
pub use error::{LoadError, Result};
pub use group::CategoryGroup;
pub use record::{RawRecord, VertexRecord};
pub use registry::{Registry, VertexStats};
pub use vertex::{Category, DistanceBand, GeodesicVertex, PointOfInterest};

// ============================================================================
// Core Types
// ============================================================================

/// A position in decimal degrees.
///
/// No normalization or range validation is applied: unparseable inputs arrive
/// as NaN and are carried through as-is.
///
/// # Example
/// ```
/// use rgn_vertices::Coordinate;
/// let fct = Coordinate::new(38.661, -9.2044);
/// assert!(fct.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check that neither component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Coordinate::new(p.y(), p.x())
    }
}

/// Bounding box of a set of vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Get the center point of the bounds.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Check whether a coordinate lies inside the bounds (edges included).
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.latitude >= self.min_lat
            && c.latitude <= self.max_lat
            && c.longitude >= self.min_lng
            && c.longitude <= self.max_lng
    }
}

// ============================================================================
// Tests
// ============================================================================
