//! Predicate factories for the four filter axes.
//!
//! Each builder turns one criterion into a boolean test over a single event.
//! At an axis default the builder returns the always-true predicate, so the
//! pipeline can AND-compose whatever is active without special-casing
//! inactive axes.

use chrono::{Days, NaiveDate, NaiveTime};
use geo::Coord;

use crate::{CategoryFilter, DateWindow, Event, distance_km};

/// Boolean test deciding whether a single event survives one filter axis.
pub type EventPredicate = Box<dyn Fn(&Event) -> bool>;

/// Case-insensitive substring match over title, venue name, and venue
/// address. Empty or whitespace-only search text restricts nothing.
#[must_use]
pub fn text(search: &str) -> EventPredicate {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return Box::new(|_| true);
    }
    Box::new(move |event| {
        [
            &event.title,
            &event.venue.name,
            &event.venue.address_display,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    })
}

/// Exact category match; the `All` sentinel restricts nothing.
#[must_use]
pub fn category(filter: CategoryFilter) -> EventPredicate {
    match filter {
        CategoryFilter::All => Box::new(|_| true),
        CategoryFilter::Only(wanted) => Box::new(move |event| event.category == wanted),
    }
}

/// Date-window test anchored at `today`, the caller's evaluation date.
///
/// The window spans from the start of `today` through the whole of its final
/// day. The upper bound is the following midnight, exclusive, which is
/// equivalent to an inclusive end-of-day at any timestamp precision. Events
/// whose start timestamp fails to parse fall outside every window.
#[must_use]
pub fn date_window(window: DateWindow, today: NaiveDate) -> EventPredicate {
    let Some(days) = window.horizon_days() else {
        return Box::new(|_| true);
    };
    let start = today.and_time(NaiveTime::MIN);
    let bound = today
        .checked_add_days(Days::new(days + 1))
        .map(|day| day.and_time(NaiveTime::MIN));

    Box::new(move |event| match (event.start_time(), bound) {
        (Some(at), Some(until)) => start <= at && at < until,
        _ => false,
    })
}

/// Great-circle radius test around a focal coordinate.
///
/// Events whose venue position cannot be parsed or validated are excluded
/// rather than failing the comparison.
#[must_use]
pub fn within_radius(focal: Coord<f64>, radius_km: f64) -> EventPredicate {
    Box::new(move |event| {
        event
            .venue
            .position()
            .is_some_and(|position| distance_km(position, focal) <= radius_km)
    })
}
