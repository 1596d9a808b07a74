//! Static location reference tables and the location resolver.
//!
//! The tables map a region (US state) to its named locations, each carrying
//! the single coordinate that serves both as the radius-filter focal point
//! and the map centre. The data is small and static, so resolution is a
//! plain table scan with no caching.

use geo::Coord;
use thiserror::Error;

/// A selectable region grouping named locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Short region code, e.g. `CA`.
    pub code: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// A named location within a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedLocation {
    /// Identifier accepted by [`resolve`].
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Code of the owning region.
    pub region: &'static str,
    /// WGS84 position, `x = longitude`, `y = latitude`.
    pub position: Coord<f64>,
}

/// Regions available for selection, in display order.
pub const REGIONS: &[Region] = &[
    Region { code: "CA", label: "California" },
    Region { code: "NY", label: "New York" },
    Region { code: "TX", label: "Texas" },
    Region { code: "IL", label: "Illinois" },
    Region { code: "FL", label: "Florida" },
    Region { code: "WA", label: "Washington" },
    Region { code: "NV", label: "Nevada" },
];

#[rustfmt::skip]
const LOCATIONS: &[NamedLocation] = &[
    NamedLocation { id: "SF",  label: "San Francisco", region: "CA", position: Coord { x: -122.4194, y: 37.7749 } },
    NamedLocation { id: "LA",  label: "Los Angeles",   region: "CA", position: Coord { x: -118.2437, y: 34.0522 } },
    NamedLocation { id: "SD",  label: "San Diego",     region: "CA", position: Coord { x: -117.1611, y: 32.7157 } },
    NamedLocation { id: "SJ",  label: "San Jose",      region: "CA", position: Coord { x: -121.8863, y: 37.3382 } },
    NamedLocation { id: "NYC", label: "New York City", region: "NY", position: Coord { x: -74.006,   y: 40.7128 } },
    NamedLocation { id: "BUF", label: "Buffalo",       region: "NY", position: Coord { x: -78.8784,  y: 42.8864 } },
    NamedLocation { id: "ROC", label: "Rochester",     region: "NY", position: Coord { x: -77.6088,  y: 43.1566 } },
    NamedLocation { id: "HOU", label: "Houston",       region: "TX", position: Coord { x: -95.3698,  y: 29.7604 } },
    NamedLocation { id: "AUS", label: "Austin",        region: "TX", position: Coord { x: -97.7431,  y: 30.2672 } },
    NamedLocation { id: "DAL", label: "Dallas",        region: "TX", position: Coord { x: -96.797,   y: 32.7767 } },
    NamedLocation { id: "CHI", label: "Chicago",       region: "IL", position: Coord { x: -87.6298,  y: 41.8781 } },
    NamedLocation { id: "SPI", label: "Springfield",   region: "IL", position: Coord { x: -89.6501,  y: 39.7817 } },
    NamedLocation { id: "MIA", label: "Miami",         region: "FL", position: Coord { x: -80.1918,  y: 25.7617 } },
    NamedLocation { id: "ORL", label: "Orlando",       region: "FL", position: Coord { x: -81.3792,  y: 28.5383 } },
    NamedLocation { id: "TPA", label: "Tampa",         region: "FL", position: Coord { x: -82.4572,  y: 27.9506 } },
    NamedLocation { id: "SEA", label: "Seattle",       region: "WA", position: Coord { x: -122.3321, y: 47.6062 } },
    NamedLocation { id: "TAC", label: "Tacoma",        region: "WA", position: Coord { x: -122.4443, y: 47.2529 } },
    NamedLocation { id: "LV",  label: "Las Vegas",     region: "NV", position: Coord { x: -115.1398, y: 36.1699 } },
    NamedLocation { id: "RNO", label: "Reno",          region: "NV", position: Coord { x: -119.8138, y: 39.5296 } },
];

/// Error raised when a location id cannot be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The identifier is not present in the reference table.
    #[error("unknown location id '{id}'")]
    UnknownLocation {
        /// The identifier that failed to resolve.
        id: String,
    },
}

/// Resolve a location id to its coordinate.
///
/// # Errors
/// Returns [`ResolveError::UnknownLocation`] when the identifier is absent
/// from the reference table.
pub fn resolve(id: &str) -> Result<Coord<f64>, ResolveError> {
    LOCATIONS
        .iter()
        .find(|location| location.id == id)
        .map(|location| location.position)
        .ok_or_else(|| ResolveError::UnknownLocation { id: id.to_owned() })
}

/// Every named location, in table order.
#[must_use]
pub fn all() -> &'static [NamedLocation] {
    LOCATIONS
}

/// Named locations belonging to one region.
pub fn in_region(region_code: &str) -> impl Iterator<Item = &'static NamedLocation> + '_ {
    LOCATIONS
        .iter()
        .filter(move |location| location.region == region_code)
}

/// Whether a region code appears in the reference table.
#[must_use]
pub fn region_exists(region_code: &str) -> bool {
    REGIONS.iter().any(|region| region.code == region_code)
}
