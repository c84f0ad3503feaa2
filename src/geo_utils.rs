//! # Geographic Utilities
//!
//! Distance and extent computations shared by the vertex model and the registry.
//!
//! ## Overview
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_km`] | Great-circle distance between two lat/lon pairs, in km |
//! | [`distance_between`] | Same, for two [`Coordinate`]s |
//! | [`compute_bounds`] | Bounding box of the finite coordinates in a set |
//! | [`compute_center`] | Centroid of the finite coordinates in a set |
//!
//! ## Example
//!
//! ```rust
//! use rgn_vertices::{Coordinate, geo_utils};
//!
//! let lisbon = Coordinate::new(38.7223, -9.1393);
//! let porto = Coordinate::new(41.1579, -8.6291);
//!
//! let d = geo_utils::distance_between(&lisbon, &porto);
//! assert!((d - 274.0).abs() < 2.0);
//! ```
//!
//! ## Algorithm Notes
//!
//! ### Haversine Formula
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`] (6372.8 km). Validity bands are expressed against this
//! radius, so it must not be swapped for the IUGG mean radius used by `geo`.
//!
//! Reference: [Haversine formula (Wikipedia)](https://en.wikipedia.org/wiki/Haversine_formula)
//!
//! NaN inputs are not special-cased: any distance involving a NaN component is NaN.

use geo::{BoundingRect, Centroid, MultiPoint, Point};
use crate::{Bounds, Coordinate};

/// Sphere radius used for every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

// =============================================================================
// Distance Functions
// =============================================================================

/// Great-circle distance in kilometers between `(lat1, lon1)` and `(lat2, lon2)`.
///
/// Inputs are decimal degrees. `haversine_km(a, a) == 0.0` and the result is
/// symmetric in its two points.
///
/// # Example
///
/// ```rust
/// use rgn_vertices::geo_utils::haversine_km;
///
/// // One degree of latitude
/// let d = haversine_km(38.0, -9.0, 39.0, -9.0);
/// assert!((d - 111.226).abs() < 0.01);
/// ```
#[inline]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let sa = (d_lat / 2.0).sin();
    let so = (d_lon / 2.0).sin();
    let a = sa * sa + so * so * lat1.to_radians().cos() * lat2.to_radians().cos();
    EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
}

/// Great-circle distance in kilometers between two coordinates.
#[inline]
pub fn distance_between(a: &Coordinate, b: &Coordinate) -> f64 {
    haversine_km(a.latitude, a.longitude, b.latitude, b.longitude)
}

// =============================================================================
// Extent Functions
// =============================================================================

fn finite_points<'a, I>(coords: I) -> MultiPoint<f64>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    coords
        .into_iter()
        .filter(|c| c.is_finite())
        .map(|c| Point::from(*c))
        .collect()
}

/// Compute the bounding box of a set of coordinates.
///
/// Coordinates with a NaN or infinite component are skipped. Returns `None`
/// if no finite coordinate remains.
///
/// # Example
///
/// ```rust
/// use rgn_vertices::{Coordinate, geo_utils};
///
/// let coords = vec![
///     Coordinate::new(38.50, -9.30),
///     Coordinate::new(39.10, -8.90),
///     Coordinate::new(f64::NAN, 0.0),
/// ];
///
/// let bounds = geo_utils::compute_bounds(&coords).unwrap();
/// assert_eq!(bounds.min_lat, 38.50);
/// assert_eq!(bounds.max_lng, -8.90);
/// ```
pub fn compute_bounds<'a, I>(coords: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let rect = finite_points(coords).bounding_rect()?;
    Some(Bounds {
        min_lat: rect.min().y,
        max_lat: rect.max().y,
        min_lng: rect.min().x,
        max_lng: rect.max().x,
    })
}

/// Compute the centroid of a set of coordinates.
///
/// Non-finite coordinates are skipped; `None` for an empty input. Planar
/// averaging, so only meaningful for areas the size of a country.
pub fn compute_center<'a, I>(coords: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    finite_points(coords).centroid().map(Coordinate::from)
}

// =============================================================================
// Unit Tests
// =============================================================================
