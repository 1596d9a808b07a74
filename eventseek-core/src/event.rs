//! Event domain types.
//!
//! Events mirror the upstream feed shape: venue coordinates and the start
//! timestamp arrive as raw strings and are validated lazily. A malformed
//! record therefore degrades a single filter axis (radius or date window)
//! instead of poisoning the whole snapshot.

use chrono::NaiveDateTime;
use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::Category;

/// A single discoverable event.
///
/// # Examples
/// ```
/// use eventseek_core::{Category, Event, Venue};
///
/// let event = Event {
///     id: "21".into(),
///     title: "Chicago Blues Festival".into(),
///     description: "The largest free blues festival in the world.".into(),
///     start_local: "2025-06-07T12:00:00".into(),
///     category: Category::Music,
///     venue: Venue {
///         name: "Millennium Park".into(),
///         latitude: "41.8826".into(),
///         longitude: "-87.6226".into(),
///         address_display: "Chicago, IL".into(),
///     },
///     tickets: None,
///     url: "https://example.com/event/21".into(),
/// };
///
/// assert!(event.start_time().is_some());
/// assert!(event.venue.position().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within one snapshot.
    pub id: String,
    /// Headline shown in listings.
    pub title: String,
    /// Longer description shown on detail surfaces.
    pub description: String,
    /// Local start timestamp as supplied by the feed, e.g.
    /// `2025-06-07T12:00:00`. No zone is attached and none is inferred.
    pub start_local: String,
    /// Category from the fixed set.
    pub category: Category,
    /// Where the event takes place.
    pub venue: Venue,
    /// Ticket availability, when the feed knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<TicketAvailability>,
    /// Detail page link.
    pub url: String,
}

impl Event {
    /// Parse the local start timestamp.
    ///
    /// Returns `None` when the feed value is not an ISO-8601 local datetime.
    /// Such events fall outside every active date window.
    #[must_use]
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_local.parse().ok()
    }
}

/// Venue block carried by every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue name.
    pub name: String,
    /// Latitude in degrees, as the raw feed string.
    pub latitude: String,
    /// Longitude in degrees, as the raw feed string.
    pub longitude: String,
    /// Localised single-line address.
    pub address_display: String,
}

impl Venue {
    /// Parse and validate the venue position.
    ///
    /// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
    /// Returns `None` when either component fails to parse or lies outside
    /// the valid range (latitude [-90, 90], longitude [-180, 180]); such
    /// events cannot take part in radius filtering or map placement.
    #[must_use]
    pub fn position(&self) -> Option<Coord<f64>> {
        let y: f64 = self.latitude.trim().parse().ok()?;
        let x: f64 = self.longitude.trim().parse().ok()?;
        ((-90.0..=90.0).contains(&y) && (-180.0..=180.0).contains(&x)).then_some(Coord { x, y })
    }
}

/// Ticket availability reported by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAvailability {
    /// Whether tickets can still be bought.
    pub has_available: bool,
    /// Display string of the cheapest ticket, e.g. `$45`. Absent for free
    /// events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price_display: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn venue(latitude: &str, longitude: &str) -> Venue {
        Venue {
            name: "Millennium Park".into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            address_display: "Chicago, IL".into(),
        }
    }

    fn event(start_local: &str) -> Event {
        Event {
            id: "1".into(),
            title: "Blues Festival".into(),
            description: String::new(),
            start_local: start_local.into(),
            category: Category::Music,
            venue: venue("41.8826", "-87.6226"),
            tickets: None,
            url: "https://example.com/event/1".into(),
        }
    }

    #[test]
    fn position_parses_feed_strings() {
        let position = venue("41.8826", "-87.6226").position().unwrap();
        assert!((position.y - 41.8826).abs() < 1e-9);
        assert!((position.x + 87.6226).abs() < 1e-9);
    }

    #[rstest]
    #[case("", "-87.6")]
    #[case("not-a-number", "-87.6")]
    #[case("41.8", "east")]
    fn position_rejects_unparsable_components(#[case] lat: &str, #[case] lon: &str) {
        assert_eq!(venue(lat, lon).position(), None);
    }

    #[rstest]
    #[case("90.0001", "0.0")]
    #[case("-91.0", "0.0")]
    #[case("0.0", "180.5")]
    #[case("NaN", "0.0")]
    fn position_rejects_out_of_range_components(#[case] lat: &str, #[case] lon: &str) {
        assert_eq!(venue(lat, lon).position(), None);
    }

    #[test]
    fn position_accepts_range_boundaries() {
        assert!(venue("90", "-180").position().is_some());
        assert!(venue("-90", "180").position().is_some());
    }

    #[test]
    fn start_time_parses_local_timestamps() {
        let parsed = event("2025-06-07T12:00:00").start_time().unwrap();
        assert_eq!(parsed.to_string(), "2025-06-07 12:00:00");
    }

    #[rstest]
    #[case("")]
    #[case("soon")]
    #[case("2025-13-40T99:00:00")]
    fn start_time_rejects_unparsable_timestamps(#[case] raw: &str) {
        assert_eq!(event(raw).start_time(), None);
    }

    #[test]
    fn snapshot_json_round_trips() {
        let original = event("2025-06-07T12:00:00");
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), original);
    }

    #[test]
    fn tickets_default_to_absent() {
        let json = r#"{
            "id": "2",
            "title": "Tech Week",
            "description": "",
            "start_local": "2025-05-20T09:00:00",
            "category": "tech",
            "venue": {
                "name": "Convention Center",
                "latitude": "47.6126",
                "longitude": "-122.3316",
                "address_display": "705 Pike St, Seattle, WA"
            },
            "url": "https://example.com/event/2"
        }"#;
        let parsed: Event = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tickets, None);
    }
}
