//! Presentation adapters for list and map surfaces.
//!
//! These shape ranked events into the data each presentation needs; actual
//! rendering belongs to the host. Default-value rules that the feed leaves
//! implicit (a missing minimum price reads as free) are made explicit here
//! rather than in the pipeline.

use geo::Coord;

use crate::Event;

/// Display format for event start times, e.g. `06/07/2025, 12:00 PM`.
const START_FORMAT: &str = "%m/%d/%Y, %-I:%M %p";

/// One entry of the list presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    /// Event headline.
    pub title: String,
    /// Formatted start time, or the raw feed value when it cannot be
    /// parsed.
    pub starts_at: String,
    /// Venue name.
    pub venue_name: String,
    /// Single-line venue address.
    pub venue_address: String,
    /// Category badge label.
    pub category_label: String,
    /// Ticket badge text, absent when the feed has no ticket information.
    pub ticket_badge: Option<String>,
    /// Detail page link.
    pub url: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            starts_at: event.start_time().map_or_else(
                || event.start_local.clone(),
                |at| at.format(START_FORMAT).to_string(),
            ),
            venue_name: event.venue.name.clone(),
            venue_address: event.venue.address_display.clone(),
            category_label: event.category.label().to_owned(),
            ticket_badge: ticket_badge(event),
            url: event.url.clone(),
        }
    }
}

/// Ticket badge text for an event. Availability without a listed minimum
/// price reads as free rather than hiding the badge.
fn ticket_badge(event: &Event) -> Option<String> {
    event.tickets.as_ref().map(|tickets| {
        if tickets.has_available {
            let price = tickets.min_price_display.as_deref().unwrap_or("Free");
            format!("From {price}")
        } else {
            "Sold Out".to_owned()
        }
    })
}

/// A marker placed on the map presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Identifier of the marked event.
    pub event_id: String,
    /// Marker position, `x = longitude`, `y = latitude`.
    pub position: Coord<f64>,
}

/// Markers for every placeable event, in the order given.
///
/// Events without a usable venue position cannot be placed; they stay in the
/// list presentation but are dropped from the marker set with a warning.
#[must_use]
pub fn event_markers(events: &[Event]) -> Vec<MapMarker> {
    events
        .iter()
        .filter_map(|event| match event.venue.position() {
            Some(position) => Some(MapMarker {
                event_id: event.id.clone(),
                position,
            }),
            None => {
                log::warn!(
                    "event {} has no usable venue position; omitting its marker",
                    event.id
                );
                None
            }
        })
        .collect()
}
